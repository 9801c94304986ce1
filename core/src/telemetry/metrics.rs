use std::sync::Mutex;

/// Running totals for a reduction session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReductionTally {
    pub reduced: usize,
    pub skipped: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<ReductionTally>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ReductionTally::default()),
        }
    }

    pub fn record_reduced(&self) {
        if let Ok(mut tally) = self.inner.lock() {
            tally.reduced += 1;
        }
    }

    pub fn record_skipped(&self) {
        if let Ok(mut tally) = self.inner.lock() {
            tally.skipped += 1;
        }
    }

    pub fn snapshot(&self) -> ReductionTally {
        self.inner
            .lock()
            .map(|tally| *tally)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_accumulates_across_records() {
        let recorder = MetricsRecorder::new();
        recorder.record_reduced();
        recorder.record_reduced();
        recorder.record_skipped();
        assert_eq!(
            recorder.snapshot(),
            ReductionTally {
                reduced: 2,
                skipped: 1
            }
        );
    }
}

use anyhow::Context;
use gravcore::prelude::{CorrectionSelection, SelectionConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// JSON file holding the raw station records.
    pub stations: PathBuf,
    /// Name of the reference body to resolve from the store.
    pub planet: String,
    /// JSON store of reference-body definitions.
    #[serde(default = "default_planets_file")]
    pub planets_file: PathBuf,
    /// Output path; derived from the station file when not set.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Variant index per correction category.
    #[serde(default)]
    pub methods: SelectionConfig,
}

fn default_planets_file() -> PathBuf {
    PathBuf::from("planets_definitions.json")
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        stations: PathBuf,
        planet: String,
        planets_file: PathBuf,
        output: Option<PathBuf>,
        methods: SelectionConfig,
    ) -> Self {
        Self {
            stations,
            planet,
            planets_file,
            output,
            methods,
        }
    }

    pub fn to_selection(&self) -> CorrectionSelection {
        self.methods.resolve()
    }

    /// Output path, suffixed from the station file when not set explicitly.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let stem = self
                    .stations
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("stations");
                self.stations.with_file_name(format!("{}_gravcor.json", stem))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_resolves_selection() {
        let methods = SelectionConfig {
            normal_gravity: Some(0),
            free_air: Some(0),
            atmospheric: None,
            bouguer: Some(1),
        };
        let cfg = WorkflowConfig::from_args(
            PathBuf::from("survey.json"),
            "Earth".to_string(),
            PathBuf::from("planets_definitions.json"),
            None,
            methods,
        );

        let selection = cfg.to_selection();
        assert!(selection.normal_gravity.is_some());
        assert!(selection.atmospheric.is_none());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"stations: survey.json\nplanet: Mars\nmethods:\n  NORMAL_GRAVITY: 0\n  BOUGUER: 1\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.planet, "Mars");
        assert_eq!(cfg.methods.bouguer, Some(1));
        assert_eq!(cfg.planets_file, PathBuf::from("planets_definitions.json"));
    }

    #[test]
    fn output_path_defaults_to_suffixed_station_file() {
        let cfg = WorkflowConfig::from_args(
            PathBuf::from("data/survey.json"),
            "Earth".to_string(),
            default_planets_file(),
            None,
            SelectionConfig::default(),
        );
        assert_eq!(cfg.output_path(), PathBuf::from("data/survey_gravcor.json"));
    }
}

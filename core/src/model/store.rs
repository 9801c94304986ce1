use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::model::body::{BodyParams, ReferenceBody};
use crate::prelude::{CorrectionError, CorrectionResult};

/// Keyed store of reference-body definitions, loaded from a JSON document
/// mapping body name to parameters.
pub struct BodyStore {
    bodies: HashMap<String, BodyParams>,
}

impl BodyStore {
    pub fn load<P: AsRef<Path>>(path: P) -> CorrectionResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|err| {
            CorrectionError::Configuration(format!(
                "reading body definitions {}: {}",
                path_ref.display(),
                err
            ))
        })?;
        let bodies: HashMap<String, BodyParams> =
            serde_json::from_str(&contents).map_err(|err| {
                CorrectionError::Configuration(format!(
                    "parsing body definitions {}: {}",
                    path_ref.display(),
                    err
                ))
            })?;
        Ok(Self { bodies })
    }

    pub fn from_map(bodies: HashMap<String, BodyParams>) -> Self {
        Self { bodies }
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bodies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolves a body by name. An unknown name is a hard failure surfaced
    /// before any station is processed.
    pub fn resolve(&self, name: &str) -> CorrectionResult<ReferenceBody> {
        self.bodies
            .get(name)
            .map(ReferenceBody::from_params)
            .ok_or_else(|| {
                CorrectionError::Configuration(format!("unknown reference body '{}'", name))
            })
    }
}

//! Loading persisted model artifacts
//!
//! The trained scaler statistics, circuit angles, and classifier weights are
//! loaded once at startup from a single JSON document and validated before
//! any service is constructed. The format is an implementation choice; the
//! rest of the crate only sees the validated parameter structs.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::classifier::LogisticHeadParams;
use crate::error::ArtifactError;
use crate::quantum::CircuitParameters;
use crate::scaler::ScalerParams;

/// The full set of persisted inference parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifacts {
    pub scaler: ScalerParams,
    pub circuit: CircuitParameters,
    pub head: LogisticHeadParams,
}

impl ModelArtifacts {
    /// Load artifacts from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load artifacts from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        let artifacts: ModelArtifacts = serde_json::from_reader(reader)?;
        Ok(artifacts)
    }

    /// Parse artifacts from an in-memory JSON string.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let artifacts: ModelArtifacts = serde_json::from_str(json)?;
        Ok(artifacts)
    }
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::priors::PriorSpec;

/// A named collection of prior specifications, ordered by name.
pub type PriorCollection = BTreeMap<String, PriorSpec>;

/// Loads a collection of named priors from a JSON file.
///
/// The file must contain a single JSON object mapping names to serialized
/// [`PriorSpec`] values. Multivariate priors are re-validated while loading.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(PriorCollection)` - The priors keyed by name
/// * `Err(IOError)` - An error that occurred during file reading or JSON parsing
pub fn load_priors(path: impl Into<PathBuf>) -> Result<PriorCollection, IOError> {
    let path = path.into();
    log::debug!("Loading priors from {}", path.display());
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(file).map_err(IOError::JsonParseError)
}

/// Saves a collection of named priors to a JSON file.
///
/// # Arguments
///
/// * `path` - Path of the JSON file to create or overwrite
/// * `priors` - The priors to save
pub fn save_priors(path: impl Into<PathBuf>, priors: &PriorCollection) -> Result<(), IOError> {
    let path = path.into();
    log::debug!("Saving {} priors to {}", priors.len(), path.display());
    let file = std::fs::File::create(path).map_err(IOError::FileWriteError)?;
    serde_json::to_writer_pretty(file, priors).map_err(IOError::JsonWriteError)
}

/// Represents errors that can occur while reading or writing prior collections.
#[derive(Error, Debug)]
pub enum IOError {
    /// The file could not be opened for reading.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// The file contents are not a valid prior collection.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// The file could not be created or truncated.
    #[error("Failed to create file: {0}")]
    FileWriteError(std::io::Error),

    /// Writing the serialized collection failed.
    #[error("Failed to write JSON: {0}")]
    JsonWriteError(serde_json::Error),
}

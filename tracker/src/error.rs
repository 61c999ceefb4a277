use std::path::PathBuf;

use database::StorageError;
use scoring::ScorecardError;
use thiserror::Error;
use types::{GameId, GameValidationError};

use crate::collaborators::DeviceError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] GameValidationError),

    #[error(transparent)]
    Scorecard(#[from] ScorecardError),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    #[error("Invalid hole number: {0}")]
    InvalidHole(u32),

    #[error("Invalid score adjustment '{0}', expected HOLE:DELTA")]
    InvalidAdjustment(String),

    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TrackerError {
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, TrackerError::Storage(StorageError::Unavailable { .. }))
    }
}

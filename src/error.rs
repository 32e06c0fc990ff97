//! Crate error type.
//!
//! Engines have no recoverable failures; these cover the I/O and
//! configuration edges around a simulation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write timeline to '{}': {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid workload: {}", format_validation(.0))]
    InvalidWorkload(Vec<ValidationError>),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

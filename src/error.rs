//! Crate-level error type and `Result` alias.
//! Only the fatal conditions live here; per-record anomalies are reported
//! through `core::naming::SkipReason` and never abort a run.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot write output: {0}")]
    Environment(#[source] std::io::Error),

    #[error("Cannot open file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected file format")]
    Format,
}

impl Error {
    /// Process exit code reported by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

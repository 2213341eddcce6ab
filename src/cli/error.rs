//! Error types for the CLI

use thiserror::Error;

use mask_integrity::store::StoreError;
use mask_integrity::validation::integrity::CheckError;

/// Errors surfaced by CLI command handlers.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pre-flight failure: a declared dataset path does not exist
    #[error(transparent)]
    Input(#[from] StoreError),

    /// The check ran but could not produce a verdict
    #[error("check could not be completed: {0}")]
    Check(#[from] CheckError),

    /// Demo dataset generation failed
    #[error("seed failed: {0:#}")]
    Seed(anyhow::Error),

    /// Refusing to clobber an existing dataset
    #[error("file already exists: {0} (pass --force to overwrite)")]
    FileExists(String),

    /// Filesystem error while preparing output paths
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

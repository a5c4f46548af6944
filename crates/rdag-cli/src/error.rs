//! Command-level error handling with exit codes.

use std::path::PathBuf;

use rdag_catalog::CatalogError;
use rdag_config::ConfigError;
use rdag_synth::SynthesisError;
use thiserror::Error;

/// Errors that abort a generator run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line does not select exactly one artifact.
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A catalog failed to load or validate.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An artifact could not be synthesized.
    #[error("Synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    /// Failed to write output file.
    #[error("Failed to write output file '{path}': {message}")]
    OutputWrite { path: PathBuf, message: String },
}

impl CliError {
    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage { .. } => 2,
            CliError::Config(_)
            | CliError::Catalog(_)
            | CliError::Synthesis(_)
            | CliError::OutputWrite { .. } => 1,
        }
    }
}

/// Result type for command execution.
pub type CliResult<T> = Result<T, CliError>;

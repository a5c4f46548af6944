//! Synthesis error types

use rdag_catalog::{CatalogError, OperationCategory};
use rdag_templates::RenderError;
use thiserror::Error;

/// Result type for synthesis operations
pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Synthesis error variants
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// A unit was requested that the operation's category does not produce
    #[error("Operation {operation} ({category}) does not produce {unit} units")]
    UnsupportedOperation {
        operation: String,
        category: OperationCategory,
        unit: &'static str,
    },

    /// The catalogs cannot be synthesized together
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A unit failed to render
    #[error(transparent)]
    Render(#[from] RenderError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Catalog validation.
//!
//! Every check here runs while a catalog is being constructed, before any
//! text is emitted. A catalog value that exists has passed all of them.

use crate::operations::OperationCategory;
use crate::terminals::{Domain, Shape};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A category requires a payload field that the entry lacks.
    #[error("Missing required field '{field}' for {category} operation {operation}")]
    MissingField {
        operation: String,
        category: OperationCategory,
        field: &'static str,
    },

    /// An entry carries a payload field its category does not take.
    #[error("Unexpected field '{field}' for {category} operation {operation}")]
    UnexpectedField {
        operation: String,
        category: OperationCategory,
        field: &'static str,
    },

    /// A name or payload cannot be used as an identifier in generated source.
    #[error("Invalid {what} '{value}' for operation {operation}: {reason}")]
    InvalidIdentifier {
        operation: String,
        what: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The enumeration name must differ from the catalog name.
    #[error("Operation {operation} uses its own name as enum name")]
    EnumNameEqualsName { operation: String },

    /// Two entries share an enumeration name.
    #[error("Duplicate enum name '{enum_name}' at positions {first} and {second}")]
    DuplicateEnumName {
        enum_name: String,
        first: usize,
        second: usize,
    },

    /// An identifier of one entry is reused by another entry in a
    /// different role (name, enum name or runner name).
    #[error("Identifier '{identifier}' is used by the operations at positions {first} and {second}")]
    IdentifierClash {
        identifier: String,
        first: usize,
        second: usize,
    },

    /// Two entries share a catalog name.
    #[error("Duplicate operation name '{name}' at positions {first} and {second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    /// Two terminal entries share a (domain, shape) identity.
    #[error("Duplicate terminal ({domain}, {shape}) at positions {first} and {second}")]
    DuplicateTerminal {
        domain: Domain,
        shape: Shape,
        first: usize,
        second: usize,
    },

    /// A combination references a terminal the terminal catalog lacks.
    #[error("Operation {operation} needs terminal ({domain}, {shape}) which is not in the terminal catalog")]
    MissingTerminal {
        operation: String,
        domain: Domain,
        shape: Shape,
    },

    /// The catalog has no entries.
    #[error("The {what} catalog is empty")]
    Empty { what: &'static str },

    /// Reading a catalog file failed.
    #[error("IO failure when reading catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid TOML or does not match the schema.
    #[error("Failed to parse catalog file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// In-memory catalog text is not valid TOML or does not match the schema.
    #[error("Failed to parse catalog: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Returns true if `value` is a C-family identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check an identifier-valued field, naming the operation on failure.
pub(crate) fn require_identifier(
    operation: &str,
    what: &'static str,
    value: &str,
) -> Result<(), CatalogError> {
    if value.is_empty() {
        return Err(CatalogError::InvalidIdentifier {
            operation: operation.to_string(),
            what,
            value: value.to_string(),
            reason: "must not be empty",
        });
    }
    if !is_identifier(value) {
        return Err(CatalogError::InvalidIdentifier {
            operation: operation.to_string(),
            what,
            value: value.to_string(),
            reason: "must match [A-Za-z_][A-Za-z0-9_]*",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("PLUS"));
        assert!(is_identifier("_tmp1"));
        assert!(is_identifier("NORM2_ENUM"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2PLUS"));
        assert!(!is_identifier("PL US"));
        assert!(!is_identifier("a-b"));
    }

    #[test]
    fn require_identifier_names_the_operation() {
        let err = require_identifier("TAN", "function", "tan()").unwrap_err();
        assert!(err.to_string().contains("TAN"));
        assert!(matches!(
            err,
            CatalogError::InvalidIdentifier { what: "function", .. }
        ));
    }
}

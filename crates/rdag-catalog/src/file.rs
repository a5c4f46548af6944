//! TOML catalog files.
//!
//! A catalog file lists `[[operations]]` in ordinal order and, optionally,
//! `[[terminals]]`. When no terminals are given the reference terminal
//! catalog is used.

use std::fs;
use std::path::Path;

use rdag_core::log_info;
use serde::{Deserialize, Serialize};

use crate::operations::{OperationCatalog, OperationRecord};
use crate::terminals::{TerminalCatalog, TerminalSpec};
use crate::validation::CatalogError;

/// Raw contents of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub operations: Vec<OperationRecord>,
    #[serde(default)]
    pub terminals: Vec<TerminalSpec>,
}

impl CatalogFile {
    /// Loads a catalog file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: Self = toml::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log_info!(
            "catalog",
            "Loaded {} operations and {} terminals from {}",
            file.operations.len(),
            file.terminals.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate the file into the two catalogs.
    pub fn into_catalogs(self) -> Result<(OperationCatalog, TerminalCatalog), CatalogError> {
        let operations = OperationCatalog::from_records(self.operations)?;
        let terminals = if self.terminals.is_empty() {
            TerminalCatalog::reference()
        } else {
            TerminalCatalog::new(self.terminals)?
        };
        Ok((operations, terminals))
    }
}

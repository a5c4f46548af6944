//! The ordered operation catalog.

use std::collections::HashMap;

use rdag_core::log_debug;

use super::definitions::{OperationRecord, OperationSpec};
use crate::validation::CatalogError;

/// Immutable, ordered list of operations.
///
/// An entry's position is its ordinal in every emitted enumeration. The only
/// way to derive a new catalog from an existing one is [`with_appended`],
/// which leaves every existing ordinal untouched.
///
/// [`with_appended`]: OperationCatalog::with_appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationCatalog {
    entries: Vec<OperationSpec>,
}

impl OperationCatalog {
    /// Build a catalog from validated specs, rejecting duplicates.
    pub fn new(entries: Vec<OperationSpec>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty { what: "operation" });
        }

        // Names, enum names and runner names share one namespace in the
        // generated sources.
        let mut identifiers: HashMap<String, (Role, usize)> =
            HashMap::with_capacity(entries.len() * 3);
        for (position, spec) in entries.iter().enumerate() {
            let own = [
                (Role::EnumName, spec.enum_name().to_string()),
                (Role::Name, spec.name().to_string()),
                (Role::Runner, spec.runner_name()),
            ];
            for (role, identifier) in own {
                if let Some(&(seen, first)) = identifiers.get(&identifier) {
                    return Err(clash(identifier, seen, role, first, position));
                }
                identifiers.insert(identifier, (role, position));
            }
        }

        log_debug!("catalog", "Built operation catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Validate records and build a catalog, preserving their order.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = OperationRecord>,
    {
        let specs = records
            .into_iter()
            .map(OperationSpec::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(specs)
    }

    /// A new catalog with `record` added at the end.
    pub fn with_appended(&self, record: OperationRecord) -> Result<Self, CatalogError> {
        let mut entries = self.entries.clone();
        entries.push(OperationSpec::from_record(record)?);
        Self::new(entries)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &OperationSpec> {
        self.entries.iter()
    }

    /// Entries paired with their ordinals.
    pub fn ordinals(&self) -> impl ExactSizeIterator<Item = (usize, &OperationSpec)> {
        self.entries.iter().enumerate()
    }

    pub fn entries(&self) -> &[OperationSpec] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an operation by catalog name.
    pub fn get(&self, name: &str) -> Option<&OperationSpec> {
        self.entries.iter().find(|s| s.name() == name)
    }

    /// Ordinal of the entry with the given enumeration name.
    pub fn ordinal_of(&self, enum_name: &str) -> Option<usize> {
        self.entries.iter().position(|s| s.enum_name() == enum_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Name,
    EnumName,
    Runner,
}

fn clash(identifier: String, seen: Role, role: Role, first: usize, second: usize) -> CatalogError {
    match (seen, role) {
        (Role::EnumName, Role::EnumName) => CatalogError::DuplicateEnumName {
            enum_name: identifier,
            first,
            second,
        },
        (Role::Name, Role::Name) => CatalogError::DuplicateName {
            name: identifier,
            first,
            second,
        },
        _ => CatalogError::IdentifierClash {
            identifier,
            first,
            second,
        },
    }
}

impl<'a> IntoIterator for &'a OperationCatalog {
    type Item = &'a OperationSpec;
    type IntoIter = std::slice::Iter<'a, OperationSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Operation catalog: categories, validated specs and the ordered catalog.
//!
//! The `reference` submodule holds the catalog shipped with the generator.
//! Its order is part of the external contract: downstream dispatch tables
//! index by the ordinal, so entries are only ever appended.

mod catalog;
mod category;
mod definitions;
mod reference;

pub use catalog::OperationCatalog;
pub use category::OperationCategory;
pub use definitions::{OperationKind, OperationRecord, OperationSpec};
pub use reference::{reference_operations, reference_records};

//! # RDAG Catalogs
//!
//! This crate is the **single source of truth** for what the dispatch
//! generator knows about: the ordered operation catalog and the terminal-type
//! catalog. Every synthesizer reads the same immutable values, so an
//! operation's position in [`OperationCatalog`] is its ordinal in every
//! emitted artifact.
//!
//! ## Architecture
//!
//! ```text
//!   OperationRecord (TOML / reference table)
//!          │  validate
//!          ▼
//!   OperationSpec ──► OperationCatalog ─┐
//!                                       ├──► rdag-synth
//!   TerminalSpec  ──► TerminalCatalog ──┘
//! ```
//!
//! ## Categories
//!
//! | Category | Arity | Payload |
//! |----------|-------|---------|
//! | InfixArithmetic | 2 | operator symbol |
//! | PrefixArithmetic | 1 | operator symbol |
//! | UnaryElementwiseFunction | 1 | function name |
//! | PlaceholderUnary / PlaceholderBinary | 1 / 2 | none |
//! | ExternalUnaryExpression / ExternalBinaryExpression / ExternalSelectResult | 1 / 2 / 2 | none |

pub mod file;
pub mod operations;
pub mod terminals;
pub mod validation;

pub use file::CatalogFile;
pub use operations::{
    OperationCatalog, OperationCategory, OperationKind, OperationRecord, OperationSpec,
    reference_operations,
};
pub use terminals::{Domain, Shape, TerminalCatalog, TerminalSpec, reference_terminals};
pub use validation::{CatalogError, is_identifier};

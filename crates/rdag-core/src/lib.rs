//! RDAG Core - shared plumbing for the dispatch generator crates.
//!
//! Every other crate in the workspace logs through the macros exported here so
//! that events carry a consistent `module` field.

pub mod logging;

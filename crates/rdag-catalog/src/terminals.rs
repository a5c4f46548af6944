//! Terminal-type catalog.
//!
//! A terminal is a leaf of the expression DAG, identified by its element
//! domain and storage shape. The catalog fixes the order in which the
//! dispatch table lists terminal types.

use std::fmt;

use rdag_core::log_debug;
use serde::{Deserialize, Serialize};

use crate::validation::CatalogError;

/// Element domain of a terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Real,
    Complex,
    Integer,
    Logical,
}

impl Domain {
    /// CamelCase spelling used in generated type names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Real => "Real",
            Domain::Complex => "Complex",
            Domain::Integer => "Integer",
            Domain::Logical => "Logical",
        }
    }

    /// SCREAMING_CASE spelling used in generated type tags.
    pub fn screaming(&self) -> &'static str {
        match self {
            Domain::Real => "REAL",
            Domain::Complex => "COMPLEX",
            Domain::Integer => "INTEGER",
            Domain::Logical => "LOGICAL",
        }
    }

    /// Native element storage type.
    pub fn element_type(&self) -> &'static str {
        match self {
            Domain::Real | Domain::Logical => "real8",
            Domain::Complex => "complex16",
            Domain::Integer => "int",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage shape of a terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Scalar,
    Matrix,
    DenseMatrix,
    DiagonalMatrix,
    SparseMatrix,
}

impl Shape {
    /// CamelCase spelling used in generated type names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Scalar => "Scalar",
            Shape::Matrix => "Matrix",
            Shape::DenseMatrix => "DenseMatrix",
            Shape::DiagonalMatrix => "DiagonalMatrix",
            Shape::SparseMatrix => "SparseMatrix",
        }
    }

    /// SCREAMING_CASE spelling used in generated type tags.
    pub fn screaming(&self) -> &'static str {
        match self {
            Shape::Scalar => "SCALAR",
            Shape::Matrix => "MATRIX",
            Shape::DenseMatrix => "DENSE_MATRIX",
            Shape::DiagonalMatrix => "DIAGONAL_MATRIX",
            Shape::SparseMatrix => "SPARSE_MATRIX",
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Shape::Scalar)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One leaf data kind. Identity is the (domain, shape) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerminalSpec {
    pub domain: Domain,
    pub shape: Shape,
}

impl TerminalSpec {
    pub const fn new(domain: Domain, shape: Shape) -> Self {
        Self { domain, shape }
    }

    /// Generated type name, e.g. `OGRealDenseMatrix`.
    pub fn type_name(&self) -> String {
        format!("OG{}{}", self.domain.as_str(), self.shape.as_str())
    }

    /// Generated type tag, e.g. `REAL_DENSE_MATRIX_ENUM`.
    pub fn type_enum(&self) -> String {
        format!("{}_{}_ENUM", self.domain.screaming(), self.shape.screaming())
    }

    /// Native element storage type.
    pub fn element_type(&self) -> &'static str {
        self.domain.element_type()
    }
}

impl fmt::Display for TerminalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.domain, self.shape)
    }
}

/// Ordered, duplicate-free list of terminal types. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalCatalog {
    entries: Vec<TerminalSpec>,
}

impl TerminalCatalog {
    /// Build a catalog, rejecting empty input and duplicate identities.
    pub fn new(entries: Vec<TerminalSpec>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty { what: "terminal" });
        }
        for (second, spec) in entries.iter().enumerate() {
            if let Some(first) = entries[..second].iter().position(|s| s == spec) {
                return Err(CatalogError::DuplicateTerminal {
                    domain: spec.domain,
                    shape: spec.shape,
                    first,
                    second,
                });
            }
        }
        log_debug!("catalog", "Built terminal catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// The ten terminal types of the reference runtime.
    pub fn reference() -> Self {
        Self {
            entries: reference_terminals().to_vec(),
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TerminalSpec> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[TerminalSpec] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look a terminal up by identity.
    pub fn lookup(&self, domain: Domain, shape: Shape) -> Option<&TerminalSpec> {
        self.entries
            .iter()
            .find(|s| s.domain == domain && s.shape == shape)
    }

    pub fn contains(&self, spec: &TerminalSpec) -> bool {
        self.lookup(spec.domain, spec.shape).is_some()
    }
}

/// Terminal types of the reference runtime, in dispatch-table order.
pub fn reference_terminals() -> &'static [TerminalSpec] {
    use Domain::*;
    use Shape::*;
    const TERMINALS: [TerminalSpec; 10] = [
        TerminalSpec::new(Real, Scalar),
        TerminalSpec::new(Complex, Scalar),
        TerminalSpec::new(Integer, Scalar),
        TerminalSpec::new(Real, DenseMatrix),
        TerminalSpec::new(Logical, Matrix),
        TerminalSpec::new(Complex, DenseMatrix),
        TerminalSpec::new(Real, DiagonalMatrix),
        TerminalSpec::new(Complex, DiagonalMatrix),
        TerminalSpec::new(Real, SparseMatrix),
        TerminalSpec::new(Complex, SparseMatrix),
    ];
    &TERMINALS
}

//! RDAG Synthesizers
//!
//! Turns an operation catalog and a terminal catalog into the source
//! artifacts of the runtime's double-dispatch visitor framework.
//!
//! ```text
//! OperationCatalog ──┐                  ┌─> runners.hh / runners.cc
//!                    ├─> Synthesizer ───┼─> dispatch.hh / dispatch.cc
//! TerminalCatalog ───┘        │         ├─> expression.* / numeric.*
//!                             │         ├─> createexpr.cc
//!                  EnumerationTable ────┴─> exprenum.hh / ExprTypeEnum.java / exprenum.json
//! ```
//!
//! The synthesizer borrows both catalogs immutably. Output order is always
//! catalog order, and every artifact is a pure function of the catalogs and
//! [`EmitOptions`], so regenerating from unchanged inputs is byte-identical.

#![forbid(unsafe_code)]

pub mod artifact;
pub mod dispatch;
pub mod enumeration;
pub mod error;
pub mod expressions;
pub mod policy;
pub mod runners;
pub mod wiring;

use rdag_catalog::{OperationCatalog, OperationSpec, TerminalCatalog};
use rdag_core::log_info;

pub use artifact::ArtifactKind;
pub use enumeration::{EnumerationEntry, EnumerationTable};
pub use error::{Result, SynthesisError};
pub use policy::{Combination, select_combinations};

/// Default C++ namespace of every native artifact.
pub const DEFAULT_NAMESPACE: &str = "librdag";
/// Default package of `ExprTypeEnum.java`.
pub const DEFAULT_JAVA_PACKAGE: &str = "com.opengamma.rdag.enums";

/// Names stamped into the emitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub namespace: String,
    pub java_package: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            java_package: DEFAULT_JAVA_PACKAGE.to_string(),
        }
    }
}

/// Artifact generator over a pair of immutable catalogs.
#[derive(Debug)]
pub struct Synthesizer<'a> {
    operations: &'a OperationCatalog,
    terminals: &'a TerminalCatalog,
    options: EmitOptions,
    enumeration: EnumerationTable,
}

impl<'a> Synthesizer<'a> {
    /// Pair the catalogs and enumerate the operations.
    ///
    /// # Errors
    /// Fails with [`rdag_catalog::CatalogError::MissingTerminal`] if the
    /// combination policy selects a terminal the terminal catalog lacks.
    pub fn new(
        operations: &'a OperationCatalog,
        terminals: &'a TerminalCatalog,
        options: EmitOptions,
    ) -> Result<Self> {
        policy::check_terminals(operations, terminals)?;
        Ok(Self {
            operations,
            terminals,
            options,
            enumeration: EnumerationTable::build(operations),
        })
    }

    pub fn operations(&self) -> &OperationCatalog {
        self.operations
    }

    pub fn terminals(&self) -> &TerminalCatalog {
        self.terminals
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    pub fn enumeration(&self) -> &EnumerationTable {
        &self.enumeration
    }

    /// Combinations that receive a generated overload for `spec`.
    pub fn overloads(&self, spec: &OperationSpec) -> &'static [Combination] {
        select_combinations(spec.category())
    }

    /// Runner class declaration for `spec`.
    pub fn declaration(&self, spec: &OperationSpec) -> Result<String> {
        runners::declaration(spec)
    }

    /// Runner function bodies for `spec`, one per overload.
    ///
    /// # Errors
    /// Fails with [`SynthesisError::UnsupportedOperation`] for placeholder
    /// and external categories.
    pub fn bodies(&self, spec: &OperationSpec) -> Result<Vec<String>> {
        runners::bodies(spec)
    }

    /// Render one complete artifact.
    pub fn artifact(&self, kind: ArtifactKind) -> Result<String> {
        let (ops, terms, options) = (self.operations, self.terminals, &self.options);
        let text = match kind {
            ArtifactKind::RunnersHeader => runners::header(ops, options)?,
            ArtifactKind::RunnersSource => runners::source(ops, options)?,
            ArtifactKind::DispatchHeader => dispatch::header(ops, terms, options)?,
            ArtifactKind::DispatchSource => dispatch::source(ops, terms, options)?,
            ArtifactKind::ExpressionHeader => expressions::expression_header(ops, options)?,
            ArtifactKind::ExpressionSource => expressions::expression_source(ops, options)?,
            ArtifactKind::NumericHeader => expressions::numeric_header(ops, options)?,
            ArtifactKind::NumericSource => expressions::numeric_source(ops, options)?,
            ArtifactKind::ExprEnumHeader => self.enumeration.to_cpp(options)?,
            ArtifactKind::ExprEnumJava => self.enumeration.to_java(options)?,
            ArtifactKind::ExprEnumJson => self.enumeration.to_json()?,
            ArtifactKind::CreateExprSource => wiring::source(ops, terms, options)?,
        };
        log_info!(
            "synth",
            "Assembled {} ({} operations, {} bytes)",
            kind,
            ops.len(),
            text.len()
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdag_catalog::{
        CatalogError, Domain, OperationCategory, OperationRecord, Shape, TerminalSpec,
        reference_operations,
    };

    fn reference() -> (OperationCatalog, TerminalCatalog) {
        (reference_operations().unwrap(), TerminalCatalog::reference())
    }

    #[test]
    fn plus_runner_has_three_overloads() {
        let (ops, terms) = reference();
        let synth = Synthesizer::new(&ops, &terms, EmitOptions::default()).unwrap();
        let plus = ops.get("PLUS").unwrap();

        assert_eq!(synth.overloads(plus).len(), 3);
        let decl = synth.declaration(plus).unwrap();
        assert!(decl.contains("class PLUSRunner"));
        assert_eq!(decl.matches("run(RegContainer* reg").count(), 3);

        let bodies = synth.bodies(plus).unwrap();
        assert!(bodies[0].contains("ret = new OGRealScalar(arg0->getValue() + arg1->getValue());"));
    }

    #[test]
    fn tan_tag_reaches_enumeration() {
        let (ops, terms) = reference();
        let synth = Synthesizer::new(&ops, &terms, EmitOptions::default()).unwrap();
        let tan = ops.get("TAN").unwrap();

        let bodies = synth.bodies(tan).unwrap();
        assert_eq!(bodies.len(), 3);
        assert!(bodies.iter().all(|b| b.contains("std::tan(")));

        let tags = synth.artifact(ArtifactKind::ExprEnumHeader).unwrap();
        assert!(tags.contains("\"tan\", // TAN_ENUM"));
    }

    #[test]
    fn abs_is_declaration_only() {
        let (ops, terms) = reference();
        let synth = Synthesizer::new(&ops, &terms, EmitOptions::default()).unwrap();
        let abs = ops.get("ABS").unwrap();

        assert!(synth.overloads(abs).is_empty());
        assert!(synth.declaration(abs).unwrap().contains("using DispatchVoidUnaryOp::run;"));
        assert!(synth.bodies(abs).is_err());
        assert_eq!(synth.enumeration().ordinal_of("ABS_ENUM"), Some(0));
    }

    #[test]
    fn norm2_is_enumerated_without_body() {
        let (ops, terms) = reference();
        let synth = Synthesizer::new(&ops, &terms, EmitOptions::default()).unwrap();
        let norm2 = ops.get("NORM2").unwrap();

        assert_eq!(synth.enumeration().ordinal_of("NORM2_ENUM"), Some(41));
        let dispatch = synth.artifact(ArtifactKind::DispatchHeader).unwrap();
        assert!(dispatch.contains("class NORM2Runner;"));

        match synth.bodies(norm2) {
            Err(SynthesisError::UnsupportedOperation {
                operation,
                category,
                unit,
            }) => {
                assert_eq!(operation, "NORM2");
                assert!(category.is_external());
                assert_eq!(unit, "body");
            }
            other => panic!("expected UnsupportedOperation, got {other:?}"),
        }
    }

    #[test]
    fn every_artifact_is_deterministic() {
        let (ops, terms) = reference();
        let synth = Synthesizer::new(&ops, &terms, EmitOptions::default()).unwrap();
        for kind in ArtifactKind::ALL {
            let first = synth.artifact(kind).unwrap();
            let second = synth.artifact(kind).unwrap();
            assert_eq!(first, second, "{kind}");
            assert!(first.ends_with('\n'), "{kind}");
        }
    }

    #[test]
    fn coverage_counts_match_policy() {
        let (ops, terms) = reference();
        let synth = Synthesizer::new(&ops, &terms, EmitOptions::default()).unwrap();
        let source = synth.artifact(ArtifactKind::RunnersSource).unwrap();

        for spec in &ops {
            let defined = source.matches(&format!("\n{}::run(", spec.runner_name())).count();
            let expected = match spec.category() {
                OperationCategory::InfixArithmetic => 3,
                OperationCategory::PrefixArithmetic => 2,
                OperationCategory::UnaryElementwiseFunction => 3,
                _ => 0,
            };
            assert_eq!(defined, expected, "{}", spec.name());
        }
    }

    #[test]
    fn every_operation_gets_one_runner_class() {
        let (ops, terms) = reference();
        let synth = Synthesizer::new(&ops, &terms, EmitOptions::default()).unwrap();
        let header = synth.artifact(ArtifactKind::RunnersHeader).unwrap();
        for spec in &ops {
            let class = format!("class {}: public ", spec.runner_name());
            assert_eq!(header.matches(&class).count(), 1, "{}", spec.name());
        }
    }

    #[test]
    fn appended_operation_leaves_enumeration_prefix_alone() {
        let (ops, terms) = reference();
        let extended = ops
            .with_appended(OperationRecord::infix("MAXIMUM", "MAXIMUM_ENUM", "max"))
            .unwrap();
        let before = Synthesizer::new(&ops, &terms, EmitOptions::default()).unwrap();
        let after = Synthesizer::new(&extended, &terms, EmitOptions::default()).unwrap();

        let old = before.artifact(ArtifactKind::ExprEnumJava).unwrap();
        let new = after.artifact(ArtifactKind::ExprEnumJava).unwrap();
        for line in old.lines().filter(|l| l.contains("_ENUM(")) {
            assert!(new.contains(line), "{line} moved");
        }
        assert!(new.contains("  MAXIMUM_ENUM(54, null),"));
    }

    #[test]
    fn missing_policy_terminal_is_rejected() {
        let (ops, _) = reference();
        let terms = TerminalCatalog::new(vec![
            TerminalSpec::new(Domain::Real, Shape::Scalar),
            TerminalSpec::new(Domain::Real, Shape::DenseMatrix),
        ])
        .unwrap();
        let err = Synthesizer::new(&ops, &terms, EmitOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            SynthesisError::Catalog(CatalogError::MissingTerminal { ref operation, .. })
                if operation == "ACOS"
        ));
    }
}

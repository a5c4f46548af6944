//! Runner (visitor) declarations and bodies.

use rdag_catalog::{OperationCatalog, OperationKind, OperationSpec};
use rdag_core::log_debug;
use rdag_templates::{Unit, UnitKind, render, render_all};

use crate::EmitOptions;
use crate::error::{Result, SynthesisError};
use crate::policy::{Combination, select_combinations};

/// Dispatch base class of every unary runner.
pub const UNARY_BASE: &str = "DispatchVoidUnaryOp";
/// Dispatch base class of every binary runner.
pub const BINARY_BASE: &str = "DispatchVoidBinaryOp";

pub(crate) fn runner_base(spec: &OperationSpec) -> &'static str {
    if spec.arity() == 1 { UNARY_BASE } else { BINARY_BASE }
}

/// Parameter list of the `eval` entry point for the given arity.
pub(crate) fn eval_params(arity: usize) -> &'static str {
    if arity == 1 {
        "RegContainer* reg, const OGTerminal* arg"
    } else {
        "RegContainer* reg, const OGTerminal* arg0, const OGTerminal* arg1"
    }
}

/// Render the runner class declaration for one operation.
///
/// Generated categories get one `run` override per selected combination,
/// placeholders only re-expose the base overloads, and external entries
/// declare an `eval` override implemented elsewhere.
pub fn declaration(spec: &OperationSpec) -> Result<String> {
    let base = runner_base(spec);
    let mut members = vec![Unit::new(UnitKind::RunnerUsingBase).with("base", base)];

    match spec.kind() {
        OperationKind::InfixArithmetic { .. }
        | OperationKind::PrefixArithmetic { .. }
        | OperationKind::UnaryElementwiseFunction { .. } => {
            members.extend(select_combinations(spec.category()).iter().map(|&c| entry(c)));
        }
        OperationKind::PlaceholderUnary | OperationKind::PlaceholderBinary => {}
        OperationKind::ExternalUnaryExpression
        | OperationKind::ExternalBinaryExpression
        | OperationKind::ExternalSelectResult => {
            members.push(
                Unit::new(UnitKind::RunnerEvalEntry).with("params", eval_params(spec.arity())),
            );
        }
    }

    let class = Unit::new(UnitKind::RunnerClass)
        .with("nodename", spec.name())
        .with("base", base)
        .with("members", render_all(&members)?);
    Ok(render(&class)?)
}

fn entry(combination: Combination) -> Unit {
    match combination {
        Combination::Unary(arg) => {
            Unit::new(UnitKind::RunnerUnaryEntry).with("argtype", arg.type_name())
        }
        Combination::Binary(arg0, arg1) => Unit::new(UnitKind::RunnerBinaryEntry)
            .with("arg0type", arg0.type_name())
            .with("arg1type", arg1.type_name()),
    }
}

/// Render one complete runner function per selected combination.
///
/// # Errors
/// Fails with [`SynthesisError::UnsupportedOperation`] for placeholder and
/// external categories, which have no generated bodies.
pub fn bodies(spec: &OperationSpec) -> Result<Vec<String>> {
    let combinations = select_combinations(spec.category());
    if !spec.category().has_bodies() {
        return Err(SynthesisError::UnsupportedOperation {
            operation: spec.name().to_string(),
            category: spec.category(),
            unit: "body",
        });
    }

    log_debug!(
        "synth",
        "Generating {} overloads for {}",
        combinations.len(),
        spec.name()
    );
    combinations
        .iter()
        .map(|&combination| body(spec, combination))
        .collect()
}

fn body(spec: &OperationSpec, combination: Combination) -> Result<String> {
    let result = combination.result();
    let scalar = combination.is_scalar();

    let implementation = match spec.kind() {
        OperationKind::InfixArithmetic { symbol } => {
            let kind = if scalar {
                UnitKind::InfixScalarBody
            } else {
                UnitKind::InfixMatrixBody
            };
            element_unit(kind, scalar, result.element_type()).with("symbol", symbol.as_str())
        }
        OperationKind::PrefixArithmetic { symbol } => {
            let kind = if scalar {
                UnitKind::PrefixScalarBody
            } else {
                UnitKind::PrefixMatrixBody
            };
            element_unit(kind, scalar, result.element_type()).with("symbol", symbol.as_str())
        }
        OperationKind::UnaryElementwiseFunction { function } => {
            let kind = if scalar {
                UnitKind::FunctionScalarBody
            } else {
                UnitKind::FunctionMatrixBody
            };
            element_unit(kind, scalar, result.element_type()).with("function", function.as_str())
        }
        OperationKind::PlaceholderUnary
        | OperationKind::PlaceholderBinary
        | OperationKind::ExternalUnaryExpression
        | OperationKind::ExternalBinaryExpression
        | OperationKind::ExternalSelectResult => {
            return Err(SynthesisError::UnsupportedOperation {
                operation: spec.name().to_string(),
                category: spec.category(),
                unit: "body",
            });
        }
    }
    .with("returntype", result.type_name());

    let function = match combination {
        Combination::Unary(arg) => Unit::new(UnitKind::UnaryRunnerFunction)
            .with("argtype", arg.type_name()),
        Combination::Binary(arg0, arg1) => Unit::new(UnitKind::BinaryRunnerFunction)
            .with("arg0type", arg0.type_name())
            .with("arg1type", arg1.type_name()),
    }
    .with("nodename", spec.name())
    .with("returntype", result.type_name())
    .with("implementation", render(&implementation)?);

    Ok(render(&function)?)
}

fn element_unit(kind: UnitKind, scalar: bool, datatype: &str) -> Unit {
    let unit = Unit::new(kind);
    if scalar { unit } else { unit.with("datatype", datatype) }
}

/// `runners.hh`: one class per operation, in catalog order.
pub(crate) fn header(operations: &OperationCatalog, options: &EmitOptions) -> Result<String> {
    let mut classes = String::new();
    for spec in operations {
        classes.push_str(&declaration(spec)?);
    }
    let unit = Unit::new(UnitKind::RunnersHeader)
        .with("namespace", options.namespace.as_str())
        .with("class_definitions", classes);
    Ok(render(&unit)?)
}

/// `runners.cc`: bodies of every generated runner, in catalog order.
pub(crate) fn source(operations: &OperationCatalog, options: &EmitOptions) -> Result<String> {
    let mut functions = String::new();
    for spec in operations.iter().filter(|s| s.category().has_bodies()) {
        for text in bodies(spec)? {
            functions.push_str(&text);
        }
    }
    let unit = Unit::new(UnitKind::RunnersSource)
        .with("namespace", options.namespace.as_str())
        .with("function_definitions", functions);
    Ok(render(&unit)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdag_catalog::OperationRecord;

    fn spec(record: OperationRecord) -> OperationSpec {
        OperationSpec::from_record(record).unwrap()
    }

    #[test]
    fn plus_declares_three_entry_points() {
        let text = declaration(&spec(OperationRecord::infix("PLUS", "PLUS_ENUM", "+"))).unwrap();
        assert!(text.starts_with("class PLUSRunner: public DispatchVoidBinaryOp, private Uncopyable\n"));
        assert!(text.contains("using DispatchVoidBinaryOp::run;"));
        assert_eq!(text.matches("virtual void * run(").count(), 3);
        assert!(text.contains(
            "run(RegContainer* reg, const OGComplexDenseMatrix* arg0, const OGComplexDenseMatrix* arg1)"
        ));
        assert!(!text.contains("OGComplexScalar"));
    }

    #[test]
    fn plus_scalar_body_adds_values() {
        let texts = bodies(&spec(OperationRecord::infix("PLUS", "PLUS_ENUM", "+"))).unwrap();
        assert_eq!(texts.len(), 3);
        assert!(texts[0].contains(
            "PLUSRunner::run(RegContainer* reg, const OGRealScalar* arg0, const OGRealScalar* arg1) const"
        ));
        assert!(texts[0].contains("ret = new OGRealScalar(arg0->getValue() + arg1->getValue());"));
    }

    #[test]
    fn matrix_bodies_walk_the_buffer() {
        let texts = bodies(&spec(OperationRecord::infix("TIMES", "TIMES_ENUM", "*"))).unwrap();
        let complex = &texts[2];
        assert!(complex.contains("const complex16* data0 = arg0->getData();"));
        assert!(complex.contains("const int datalen = arg0->getRows() * arg0->getCols();"));
        assert!(complex.contains("newData[i] = data0[i] * data1[i];"));
        assert!(complex.contains(
            "ret = new OGComplexDenseMatrix(newData, arg0->getRows(), arg0->getCols());"
        ));
    }

    #[test]
    fn negate_covers_scalar_and_dense() {
        let texts = bodies(&spec(OperationRecord::prefix("NEGATE", "NEGATE_ENUM", "-"))).unwrap();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("ret = new OGRealScalar(-(arg->getValue()));"));
        assert!(texts[1].contains("newData[i] = -data[i];"));
        assert!(texts[1].contains("const real8* data = arg->getData();"));
    }

    #[test]
    fn tan_applies_function_to_every_shape() {
        let texts = bodies(&spec(OperationRecord::function("TAN", "TAN_ENUM", "tan"))).unwrap();
        assert_eq!(texts.len(), 3);
        assert!(texts[0].contains("ret = new OGRealScalar(std::tan(arg->getValue()));"));
        assert!(texts[1].contains("newData[i] = std::tan(data[i]);"));
        assert!(texts[1].contains("new OGRealDenseMatrix(newData, arg->getRows(), arg->getCols())"));
        assert!(texts[2].contains("new OGComplexDenseMatrix(newData, arg->getRows(), arg->getCols())"));
    }

    #[test]
    fn placeholder_is_declaration_only() {
        let abs = spec(OperationRecord::placeholder_unary("ABS"));
        let text = declaration(&abs).unwrap();
        assert_eq!(
            text,
            "class ABSRunner: public DispatchVoidUnaryOp, private Uncopyable\n{\n  public:\n    using DispatchVoidUnaryOp::run;\n};\n\n"
        );
        assert!(matches!(
            bodies(&abs),
            Err(SynthesisError::UnsupportedOperation { unit: "body", .. })
        ));
    }

    #[test]
    fn external_declares_eval() {
        let norm2 = spec(OperationRecord::external_unary("NORM2", "NORM2_ENUM"));
        let text = declaration(&norm2).unwrap();
        assert!(text.contains("virtual void * eval(RegContainer* reg, const OGTerminal* arg) const override;"));
        assert!(!text.contains("virtual void * run("));

        let select = spec(OperationRecord::external_select_result("SELECTRESULT", "SELECTRESULT_ENUM"));
        assert!(declaration(&select).unwrap().contains("public DispatchVoidBinaryOp"));
    }

    #[test]
    fn runner_classes_hold_no_fields() {
        let text = declaration(&spec(OperationRecord::infix("PLUS", "PLUS_ENUM", "+"))).unwrap();
        assert!(!text.contains("private:"));
    }
}

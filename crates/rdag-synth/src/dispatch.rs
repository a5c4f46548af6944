//! Dispatch-registration table.
//!
//! The header declares one `run` entry point per terminal type (unary base)
//! and per ordered terminal pair (binary base); the defaults throw, so any
//! combination a runner does not override fails fast. The source routes on
//! the runtime type tags and maps every operation enum to its runner.

use rdag_catalog::{OperationCatalog, OperationSpec, TerminalCatalog, TerminalSpec};
use rdag_templates::{Unit, UnitKind, render, render_all};

use crate::EmitOptions;
use crate::error::Result;

/// Arguments the dispatcher passes to a runner's `eval`.
fn eval_args(spec: &OperationSpec) -> &'static str {
    if spec.arity() == 1 {
        "args->terminal(0)"
    } else {
        "args->terminal(0), args->terminal(1)"
    }
}

fn terminal_pairs(
    terminals: &TerminalCatalog,
) -> impl Iterator<Item = (&TerminalSpec, &TerminalSpec)> {
    terminals
        .iter()
        .flat_map(move |arg0| terminals.iter().map(move |arg1| (arg0, arg1)))
}

pub(crate) fn header(
    operations: &OperationCatalog,
    terminals: &TerminalCatalog,
    options: &EmitOptions,
) -> Result<String> {
    let forward_decls: Vec<Unit> = terminals
        .iter()
        .map(|t| t.type_name())
        .chain(operations.iter().map(|op| op.runner_name()))
        .map(|name| Unit::new(UnitKind::ForwardDecl).with("name", name))
        .collect();

    let unary_entry_points: Vec<Unit> = terminals
        .iter()
        .map(|t| Unit::new(UnitKind::DispatchUnaryEntry).with("argtype", t.type_name()))
        .collect();

    let binary_entry_points: Vec<Unit> = terminal_pairs(terminals)
        .map(|(arg0, arg1)| {
            Unit::new(UnitKind::DispatchBinaryEntry)
                .with("arg0type", arg0.type_name())
                .with("arg1type", arg1.type_name())
        })
        .collect();

    let runner_members: Vec<Unit> = operations
        .iter()
        .map(|op| Unit::new(UnitKind::RunnerMember).with("nodename", op.name()))
        .collect();

    let unit = Unit::new(UnitKind::DispatchHeader)
        .with("namespace", options.namespace.as_str())
        .with("forward_decls", render_all(&forward_decls)?)
        .with("unary_entry_points", render_all(&unary_entry_points)?)
        .with("binary_entry_points", render_all(&binary_entry_points)?)
        .with("runner_members", render_all(&runner_members)?);
    Ok(render(&unit)?)
}

pub(crate) fn source(
    operations: &OperationCatalog,
    terminals: &TerminalCatalog,
    options: &EmitOptions,
) -> Result<String> {
    let mut unary_eval_cases = Vec::with_capacity(terminals.len());
    let mut unary_defaults = Vec::with_capacity(terminals.len());
    for t in terminals.iter() {
        unary_eval_cases.push(
            Unit::new(UnitKind::DispatchUnaryEvalCase)
                .with("typeenum", t.type_enum())
                .with("argtype", t.type_name()),
        );
        unary_defaults
            .push(Unit::new(UnitKind::DispatchUnaryDefault).with("argtype", t.type_name()));
    }

    let mut binary_eval_cases = Vec::with_capacity(terminals.len());
    for arg0 in terminals.iter() {
        let inner: Vec<Unit> = terminals
            .iter()
            .map(|arg1| {
                Unit::new(UnitKind::DispatchBinaryEvalInnerCase)
                    .with("typeenum", arg1.type_enum())
                    .with("arg0type", arg0.type_name())
                    .with("arg1type", arg1.type_name())
            })
            .collect();
        binary_eval_cases.push(
            Unit::new(UnitKind::DispatchBinaryEvalOuterCase)
                .with("typeenum", arg0.type_enum())
                .with("inner_cases", render_all(&inner)?),
        );
    }

    let binary_defaults: Vec<Unit> = terminal_pairs(terminals)
        .map(|(arg0, arg1)| {
            Unit::new(UnitKind::DispatchBinaryDefault)
                .with("arg0type", arg0.type_name())
                .with("arg1type", arg1.type_name())
        })
        .collect();

    let mut constructions = Vec::with_capacity(operations.len());
    let mut destructions = Vec::with_capacity(operations.len());
    let mut dispatch_cases = Vec::with_capacity(operations.len());
    for op in operations {
        constructions.push(Unit::new(UnitKind::RunnerConstruction).with("nodename", op.name()));
        destructions.push(Unit::new(UnitKind::RunnerDestruction).with("nodename", op.name()));
        dispatch_cases.push(
            Unit::new(UnitKind::DispatchCase)
                .with("enumname", op.enum_name())
                .with("nodename", op.name())
                .with("eval_args", eval_args(op)),
        );
    }

    let unit = Unit::new(UnitKind::DispatchSource)
        .with("namespace", options.namespace.as_str())
        .with("unary_eval_cases", render_all(&unary_eval_cases)?)
        .with("unary_defaults", render_all(&unary_defaults)?)
        .with("binary_eval_cases", render_all(&binary_eval_cases)?)
        .with("binary_defaults", render_all(&binary_defaults)?)
        .with("runner_constructions", render_all(&constructions)?)
        .with("runner_destructions", render_all(&destructions)?)
        .with("dispatch_cases", render_all(&dispatch_cases)?);
    Ok(render(&unit)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdag_catalog::reference_operations;

    fn reference() -> (OperationCatalog, TerminalCatalog) {
        (reference_operations().unwrap(), TerminalCatalog::reference())
    }

    #[test]
    fn header_has_entry_point_per_terminal_and_pair() {
        let (ops, terms) = reference();
        let text = header(&ops, &terms, &EmitOptions::default()).unwrap();
        assert_eq!(text.matches("virtual void * run(RegContainer* reg, const OG").count(), 10 + 100);
        assert!(text.contains("class OGRealSparseMatrix;\n"));
        assert!(text.contains("class NORM2Runner;\n"));
        assert!(text.contains("    const SUMROWSRunner* _SUMROWSRunner;\n"));
        assert!(text.contains("namespace librdag {"));
    }

    #[test]
    fn source_routes_every_operation() {
        let (ops, terms) = reference();
        let text = source(&ops, &terms, &EmitOptions::default()).unwrap();
        for op in &ops {
            assert!(
                text.contains(&format!("    case {}:\n", op.enum_name())),
                "no dispatch case for {}",
                op.name()
            );
        }
        assert!(text.contains("      _PLUSRunner->eval(reg, args->terminal(0), args->terminal(1));\n"));
        assert!(text.contains("      _ABSRunner->eval(reg, args->terminal(0));\n"));
        assert!(text.contains("  delete _TANRunner;\n"));
    }

    #[test]
    fn source_routes_every_terminal_pair() {
        let (ops, terms) = reference();
        let text = source(&ops, &terms, &EmitOptions::default()).unwrap();
        assert!(text.contains("      return run(reg, arg->asOGIntegerScalar());\n"));
        assert!(text.contains(
            "          return run(reg, arg0->asOGRealScalar(), arg1->asOGComplexSparseMatrix());\n"
        ));
        assert_eq!(text.matches("throw rdag_error(\"run() is not implemented").count(), 110);
    }
}

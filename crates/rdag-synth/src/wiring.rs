//! `createexpr.cc`: the construction table covering every terminal type and
//! every operation, externally wired ones included.

use rdag_catalog::{OperationCatalog, TerminalCatalog};
use rdag_templates::{Unit, UnitKind, render, render_all};

use crate::EmitOptions;
use crate::error::Result;

pub(crate) fn source(
    operations: &OperationCatalog,
    terminals: &TerminalCatalog,
    options: &EmitOptions,
) -> Result<String> {
    let terminal_cases: Vec<Unit> = terminals
        .iter()
        .map(|t| {
            Unit::new(UnitKind::CreateTerminalCase)
                .with("typeenum", t.type_enum())
                .with("typename", t.type_name())
        })
        .collect();

    let operation_cases: Vec<Unit> = operations
        .iter()
        .map(|spec| {
            let ctor_args = (0..spec.arity())
                .map(|i| format!("args->node({i})"))
                .collect::<Vec<_>>()
                .join(", ");
            Unit::new(UnitKind::CreateExpressionCase)
                .with("enumname", spec.enum_name())
                .with("nodename", spec.name())
                .with("arity", spec.arity().to_string())
                .with("ctor_args", ctor_args)
        })
        .collect();

    let unit = Unit::new(UnitKind::CreateExprSource)
        .with("namespace", options.namespace.as_str())
        .with("terminal_cases", render_all(&terminal_cases)?)
        .with("operation_cases", render_all(&operation_cases)?);
    Ok(render(&unit)?)
}

//! Plain data-holder artifacts: expression node classes and the `OGNumeric`
//! conversion table. One entry per non-external operation; no combination
//! logic is involved.

use rdag_catalog::{OperationCatalog, OperationSpec};
use rdag_templates::{Unit, UnitKind, render, render_all};

use crate::EmitOptions;
use crate::error::Result;

struct HolderShape {
    base: &'static str,
    ctor_params: &'static str,
    ctor_args: &'static str,
    copy_args: &'static str,
}

const UNARY: HolderShape = HolderShape {
    base: "OGUnaryExpr",
    ctor_params: "OGNumeric* arg",
    ctor_args: "arg",
    copy_args: "getArg(0)->copy()",
};

const BINARY: HolderShape = HolderShape {
    base: "OGBinaryExpr",
    ctor_params: "OGNumeric* arg0, OGNumeric* arg1",
    ctor_args: "arg0, arg1",
    copy_args: "getArg(0)->copy(), getArg(1)->copy()",
};

fn shape(spec: &OperationSpec) -> &'static HolderShape {
    if spec.arity() == 1 { &UNARY } else { &BINARY }
}

fn holders(operations: &OperationCatalog) -> impl Iterator<Item = &OperationSpec> {
    operations.iter().filter(|s| !s.category().is_external())
}

pub(crate) fn expression_header(
    operations: &OperationCatalog,
    options: &EmitOptions,
) -> Result<String> {
    let classes: Vec<Unit> = holders(operations)
        .map(|spec| {
            let shape = shape(spec);
            Unit::new(UnitKind::ExpressionClass)
                .with("nodename", spec.name())
                .with("base", shape.base)
                .with("ctor_params", shape.ctor_params)
        })
        .collect();
    let unit = Unit::new(UnitKind::ExpressionHeader)
        .with("namespace", options.namespace.as_str())
        .with("class_definitions", render_all(&classes)?);
    Ok(render(&unit)?)
}

pub(crate) fn expression_source(
    operations: &OperationCatalog,
    options: &EmitOptions,
) -> Result<String> {
    let functions: Vec<Unit> = holders(operations)
        .map(|spec| {
            let shape = shape(spec);
            Unit::new(UnitKind::ExpressionFunctions)
                .with("nodename", spec.name())
                .with("enumname", spec.enum_name())
                .with("base", shape.base)
                .with("ctor_params", shape.ctor_params)
                .with("ctor_args", shape.ctor_args)
                .with("copy_args", shape.copy_args)
        })
        .collect();
    let unit = Unit::new(UnitKind::ExpressionSource)
        .with("namespace", options.namespace.as_str())
        .with("function_definitions", render_all(&functions)?);
    Ok(render(&unit)?)
}

pub(crate) fn numeric_header(
    operations: &OperationCatalog,
    options: &EmitOptions,
) -> Result<String> {
    let mut forward_decls = Vec::new();
    let mut conversions = Vec::new();
    for spec in holders(operations) {
        forward_decls.push(Unit::new(UnitKind::ForwardDecl).with("name", spec.name()));
        conversions
            .push(Unit::new(UnitKind::NumericConversionDecl).with("nodename", spec.name()));
    }
    let unit = Unit::new(UnitKind::NumericHeader)
        .with("namespace", options.namespace.as_str())
        .with("forward_decls", render_all(&forward_decls)?)
        .with("conversions", render_all(&conversions)?);
    Ok(render(&unit)?)
}

pub(crate) fn numeric_source(
    operations: &OperationCatalog,
    options: &EmitOptions,
) -> Result<String> {
    let conversions: Vec<Unit> = holders(operations)
        .map(|spec| Unit::new(UnitKind::NumericConversionDef).with("nodename", spec.name()))
        .collect();
    let unit = Unit::new(UnitKind::NumericSource)
        .with("namespace", options.namespace.as_str())
        .with("conversions", render_all(&conversions)?);
    Ok(render(&unit)?)
}

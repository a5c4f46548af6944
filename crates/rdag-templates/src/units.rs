//! Unit kinds and their placeholder sets.
//!
//! A unit is the smallest piece of text the synthesizers ask for: one runner
//! class, one overload body, one switch case. Each kind maps to exactly one
//! embedded template and a fixed list of placeholder names.

use std::collections::BTreeMap;
use std::fmt;

/// Every kind of unit the engine can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitKind {
    // Runners
    RunnersHeader,
    RunnersSource,
    RunnerClass,
    RunnerUsingBase,
    RunnerUnaryEntry,
    RunnerBinaryEntry,
    RunnerEvalEntry,
    UnaryRunnerFunction,
    BinaryRunnerFunction,
    InfixScalarBody,
    InfixMatrixBody,
    PrefixScalarBody,
    PrefixMatrixBody,
    FunctionScalarBody,
    FunctionMatrixBody,
    // Dispatch table
    DispatchHeader,
    DispatchSource,
    ForwardDecl,
    DispatchUnaryEntry,
    DispatchBinaryEntry,
    DispatchUnaryEvalCase,
    DispatchBinaryEvalOuterCase,
    DispatchBinaryEvalInnerCase,
    DispatchUnaryDefault,
    DispatchBinaryDefault,
    RunnerMember,
    RunnerConstruction,
    RunnerDestruction,
    DispatchCase,
    // Data holders
    ExpressionHeader,
    ExpressionSource,
    ExpressionClass,
    ExpressionFunctions,
    NumericHeader,
    NumericSource,
    NumericConversionDecl,
    NumericConversionDef,
    // Enumeration
    ExprEnumHeader,
    ExprEnumHeaderEntry,
    ExprEnumHeaderTag,
    ExprEnumJava,
    ExprEnumJavaEntry,
    // Wiring
    CreateExprSource,
    CreateTerminalCase,
    CreateExpressionCase,
}

impl UnitKind {
    pub const ALL: [UnitKind; 45] = [
        UnitKind::RunnersHeader,
        UnitKind::RunnersSource,
        UnitKind::RunnerClass,
        UnitKind::RunnerUsingBase,
        UnitKind::RunnerUnaryEntry,
        UnitKind::RunnerBinaryEntry,
        UnitKind::RunnerEvalEntry,
        UnitKind::UnaryRunnerFunction,
        UnitKind::BinaryRunnerFunction,
        UnitKind::InfixScalarBody,
        UnitKind::InfixMatrixBody,
        UnitKind::PrefixScalarBody,
        UnitKind::PrefixMatrixBody,
        UnitKind::FunctionScalarBody,
        UnitKind::FunctionMatrixBody,
        UnitKind::DispatchHeader,
        UnitKind::DispatchSource,
        UnitKind::ForwardDecl,
        UnitKind::DispatchUnaryEntry,
        UnitKind::DispatchBinaryEntry,
        UnitKind::DispatchUnaryEvalCase,
        UnitKind::DispatchBinaryEvalOuterCase,
        UnitKind::DispatchBinaryEvalInnerCase,
        UnitKind::DispatchUnaryDefault,
        UnitKind::DispatchBinaryDefault,
        UnitKind::RunnerMember,
        UnitKind::RunnerConstruction,
        UnitKind::RunnerDestruction,
        UnitKind::DispatchCase,
        UnitKind::ExpressionHeader,
        UnitKind::ExpressionSource,
        UnitKind::ExpressionClass,
        UnitKind::ExpressionFunctions,
        UnitKind::NumericHeader,
        UnitKind::NumericSource,
        UnitKind::NumericConversionDecl,
        UnitKind::NumericConversionDef,
        UnitKind::ExprEnumHeader,
        UnitKind::ExprEnumHeaderEntry,
        UnitKind::ExprEnumHeaderTag,
        UnitKind::ExprEnumJava,
        UnitKind::ExprEnumJavaEntry,
        UnitKind::CreateExprSource,
        UnitKind::CreateTerminalCase,
        UnitKind::CreateExpressionCase,
    ];

    /// Logical name of the embedded template for this kind.
    pub fn template_name(&self) -> &'static str {
        match self {
            UnitKind::RunnersHeader => "runners.hh",
            UnitKind::RunnersSource => "runners.cc",
            UnitKind::RunnerClass => "runner_class.hh",
            UnitKind::RunnerUsingBase => "runner_using_base.hh",
            UnitKind::RunnerUnaryEntry => "runner_unary_entry.hh",
            UnitKind::RunnerBinaryEntry => "runner_binary_entry.hh",
            UnitKind::RunnerEvalEntry => "runner_eval_entry.hh",
            UnitKind::UnaryRunnerFunction => "unary_runner_function.cc",
            UnitKind::BinaryRunnerFunction => "binary_runner_function.cc",
            UnitKind::InfixScalarBody => "infix_scalar_body.cc",
            UnitKind::InfixMatrixBody => "infix_matrix_body.cc",
            UnitKind::PrefixScalarBody => "prefix_scalar_body.cc",
            UnitKind::PrefixMatrixBody => "prefix_matrix_body.cc",
            UnitKind::FunctionScalarBody => "function_scalar_body.cc",
            UnitKind::FunctionMatrixBody => "function_matrix_body.cc",
            UnitKind::DispatchHeader => "dispatch.hh",
            UnitKind::DispatchSource => "dispatch.cc",
            UnitKind::ForwardDecl => "forward_decl.hh",
            UnitKind::DispatchUnaryEntry => "dispatch_unary_entry.hh",
            UnitKind::DispatchBinaryEntry => "dispatch_binary_entry.hh",
            UnitKind::DispatchUnaryEvalCase => "dispatch_unary_eval_case.cc",
            UnitKind::DispatchBinaryEvalOuterCase => "dispatch_binary_eval_outer_case.cc",
            UnitKind::DispatchBinaryEvalInnerCase => "dispatch_binary_eval_inner_case.cc",
            UnitKind::DispatchUnaryDefault => "dispatch_unary_default.cc",
            UnitKind::DispatchBinaryDefault => "dispatch_binary_default.cc",
            UnitKind::RunnerMember => "runner_member.hh",
            UnitKind::RunnerConstruction => "runner_construction.cc",
            UnitKind::RunnerDestruction => "runner_destruction.cc",
            UnitKind::DispatchCase => "dispatch_case.cc",
            UnitKind::ExpressionHeader => "expression.hh",
            UnitKind::ExpressionSource => "expression.cc",
            UnitKind::ExpressionClass => "expression_class.hh",
            UnitKind::ExpressionFunctions => "expression_functions.cc",
            UnitKind::NumericHeader => "numeric.hh",
            UnitKind::NumericSource => "numeric.cc",
            UnitKind::NumericConversionDecl => "numeric_conversion_decl.hh",
            UnitKind::NumericConversionDef => "numeric_conversion_def.cc",
            UnitKind::ExprEnumHeader => "exprenum.hh",
            UnitKind::ExprEnumHeaderEntry => "exprenum_entry.hh",
            UnitKind::ExprEnumHeaderTag => "exprenum_tag.hh",
            UnitKind::ExprEnumJava => "ExprTypeEnum.java",
            UnitKind::ExprEnumJavaEntry => "ExprTypeEnum_entry.java",
            UnitKind::CreateExprSource => "createexpr.cc",
            UnitKind::CreateTerminalCase => "createexpr_terminal_case.cc",
            UnitKind::CreateExpressionCase => "createexpr_expression_case.cc",
        }
    }

    /// The exact set of placeholders a unit of this kind must supply.
    pub fn placeholders(&self) -> &'static [&'static str] {
        match self {
            UnitKind::RunnersHeader => &["namespace", "class_definitions"],
            UnitKind::RunnersSource => &["namespace", "function_definitions"],
            UnitKind::RunnerClass => &["nodename", "base", "members"],
            UnitKind::RunnerUsingBase => &["base"],
            UnitKind::RunnerUnaryEntry => &["argtype"],
            UnitKind::RunnerBinaryEntry => &["arg0type", "arg1type"],
            UnitKind::RunnerEvalEntry => &["params"],
            UnitKind::UnaryRunnerFunction => {
                &["nodename", "argtype", "returntype", "implementation"]
            }
            UnitKind::BinaryRunnerFunction => &[
                "nodename",
                "arg0type",
                "arg1type",
                "returntype",
                "implementation",
            ],
            UnitKind::InfixScalarBody | UnitKind::PrefixScalarBody => &["returntype", "symbol"],
            UnitKind::InfixMatrixBody | UnitKind::PrefixMatrixBody => {
                &["datatype", "returntype", "symbol"]
            }
            UnitKind::FunctionScalarBody => &["returntype", "function"],
            UnitKind::FunctionMatrixBody => &["datatype", "returntype", "function"],
            UnitKind::DispatchHeader => &[
                "namespace",
                "forward_decls",
                "unary_entry_points",
                "binary_entry_points",
                "runner_members",
            ],
            UnitKind::DispatchSource => &[
                "namespace",
                "unary_eval_cases",
                "unary_defaults",
                "binary_eval_cases",
                "binary_defaults",
                "runner_constructions",
                "runner_destructions",
                "dispatch_cases",
            ],
            UnitKind::ForwardDecl => &["name"],
            UnitKind::DispatchUnaryEntry | UnitKind::DispatchUnaryDefault => &["argtype"],
            UnitKind::DispatchBinaryEntry | UnitKind::DispatchBinaryDefault => {
                &["arg0type", "arg1type"]
            }
            UnitKind::DispatchUnaryEvalCase => &["typeenum", "argtype"],
            UnitKind::DispatchBinaryEvalOuterCase => &["typeenum", "inner_cases"],
            UnitKind::DispatchBinaryEvalInnerCase => &["typeenum", "arg0type", "arg1type"],
            UnitKind::RunnerMember
            | UnitKind::RunnerConstruction
            | UnitKind::RunnerDestruction => &["nodename"],
            UnitKind::DispatchCase => &["enumname", "nodename", "eval_args"],
            UnitKind::ExpressionHeader => &["namespace", "class_definitions"],
            UnitKind::ExpressionSource => &["namespace", "function_definitions"],
            UnitKind::ExpressionClass => &["nodename", "base", "ctor_params"],
            UnitKind::ExpressionFunctions => &[
                "nodename",
                "enumname",
                "base",
                "ctor_params",
                "ctor_args",
                "copy_args",
            ],
            UnitKind::NumericHeader => &["namespace", "forward_decls", "conversions"],
            UnitKind::NumericSource => &["namespace", "conversions"],
            UnitKind::NumericConversionDecl | UnitKind::NumericConversionDef => &["nodename"],
            UnitKind::ExprEnumHeader => &["namespace", "count", "entries", "function_tags"],
            UnitKind::ExprEnumHeaderEntry => &["enumname", "ordinal"],
            UnitKind::ExprEnumHeaderTag => &["enumname", "tag_literal"],
            UnitKind::ExprEnumJava => &["package", "entries"],
            UnitKind::ExprEnumJavaEntry => &["enumname", "ordinal", "tag_literal"],
            UnitKind::CreateExprSource => &["namespace", "terminal_cases", "operation_cases"],
            UnitKind::CreateTerminalCase => &["typeenum", "typename"],
            UnitKind::CreateExpressionCase => &["enumname", "nodename", "arity", "ctor_args"],
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

/// A unit kind plus its field values, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    fields: BTreeMap<&'static str, String>,
}

impl Unit {
    pub fn new(kind: UnitKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
        }
    }

    /// Set a placeholder value, replacing any earlier value.
    pub fn with(mut self, placeholder: &'static str, value: impl Into<String>) -> Self {
        self.fields.insert(placeholder, value.into());
        self
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn fields(&self) -> &BTreeMap<&'static str, String> {
        &self.fields
    }
}

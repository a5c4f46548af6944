//! Operation definitions.
//!
//! [`OperationRecord`] is the loose, serializable form an author writes (in a
//! catalog file or the reference table). [`OperationSpec`] is the validated
//! form: its category and payload are fused into one [`OperationKind`], so a
//! spec that exists always carries the payload its category needs.

use serde::{Deserialize, Serialize};

use super::category::OperationCategory;
use crate::validation::{CatalogError, require_identifier};

// ============================================================================
// Validated Kind
// ============================================================================

/// Category plus category-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationKind {
    InfixArithmetic { symbol: String },
    PrefixArithmetic { symbol: String },
    UnaryElementwiseFunction { function: String },
    PlaceholderUnary,
    PlaceholderBinary,
    ExternalUnaryExpression,
    ExternalBinaryExpression,
    ExternalSelectResult,
}

impl OperationKind {
    pub fn category(&self) -> OperationCategory {
        match self {
            OperationKind::InfixArithmetic { .. } => OperationCategory::InfixArithmetic,
            OperationKind::PrefixArithmetic { .. } => OperationCategory::PrefixArithmetic,
            OperationKind::UnaryElementwiseFunction { .. } => {
                OperationCategory::UnaryElementwiseFunction
            }
            OperationKind::PlaceholderUnary => OperationCategory::PlaceholderUnary,
            OperationKind::PlaceholderBinary => OperationCategory::PlaceholderBinary,
            OperationKind::ExternalUnaryExpression => OperationCategory::ExternalUnaryExpression,
            OperationKind::ExternalBinaryExpression => {
                OperationCategory::ExternalBinaryExpression
            }
            OperationKind::ExternalSelectResult => OperationCategory::ExternalSelectResult,
        }
    }
}

// ============================================================================
// Authored Record
// ============================================================================

/// One catalog row as written by a maintainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationRecord {
    /// Catalog identifier; the generated runner is `<name>Runner`.
    pub name: String,
    /// Enumeration name. Defaults to `<name>_ENUM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    pub category: OperationCategory,
    /// Operator symbol for infix/prefix arithmetic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Function name for elementwise functions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl OperationRecord {
    fn bare(name: &str, enum_name: Option<&str>, category: OperationCategory) -> Self {
        Self {
            name: name.to_string(),
            enum_name: enum_name.map(str::to_string),
            category,
            symbol: None,
            function: None,
        }
    }

    pub fn infix(name: &str, enum_name: &str, symbol: &str) -> Self {
        Self {
            symbol: Some(symbol.to_string()),
            ..Self::bare(name, Some(enum_name), OperationCategory::InfixArithmetic)
        }
    }

    pub fn prefix(name: &str, enum_name: &str, symbol: &str) -> Self {
        Self {
            symbol: Some(symbol.to_string()),
            ..Self::bare(name, Some(enum_name), OperationCategory::PrefixArithmetic)
        }
    }

    pub fn function(name: &str, enum_name: &str, function: &str) -> Self {
        Self {
            function: Some(function.to_string()),
            ..Self::bare(
                name,
                Some(enum_name),
                OperationCategory::UnaryElementwiseFunction,
            )
        }
    }

    pub fn placeholder_unary(name: &str) -> Self {
        Self::bare(name, None, OperationCategory::PlaceholderUnary)
    }

    pub fn placeholder_binary(name: &str) -> Self {
        Self::bare(name, None, OperationCategory::PlaceholderBinary)
    }

    pub fn external_unary(name: &str, enum_name: &str) -> Self {
        Self::bare(
            name,
            Some(enum_name),
            OperationCategory::ExternalUnaryExpression,
        )
    }

    pub fn external_binary(name: &str, enum_name: &str) -> Self {
        Self::bare(
            name,
            Some(enum_name),
            OperationCategory::ExternalBinaryExpression,
        )
    }

    pub fn external_select_result(name: &str, enum_name: &str) -> Self {
        Self::bare(name, Some(enum_name), OperationCategory::ExternalSelectResult)
    }
}

// ============================================================================
// Validated Operation
// ============================================================================

/// A validated catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationSpec {
    name: String,
    enum_name: String,
    kind: OperationKind,
}

impl OperationSpec {
    /// Validate a record.
    ///
    /// Fails with [`CatalogError`] when the category's payload is missing,
    /// when a payload the category does not take is present, or when a name
    /// is unusable as a generated identifier.
    pub fn from_record(record: OperationRecord) -> Result<Self, CatalogError> {
        let OperationRecord {
            name,
            enum_name,
            category,
            symbol,
            function,
        } = record;

        require_identifier(&name, "name", &name)?;
        let enum_name = enum_name.unwrap_or_else(|| format!("{name}_ENUM"));
        require_identifier(&name, "enum name", &enum_name)?;
        if enum_name == name {
            return Err(CatalogError::EnumNameEqualsName { operation: name });
        }

        let missing = |field| CatalogError::MissingField {
            operation: name.clone(),
            category,
            field,
        };
        let unexpected = |field| CatalogError::UnexpectedField {
            operation: name.clone(),
            category,
            field,
        };

        let takes = category.payload_field();
        for (field, present) in [("symbol", symbol.is_some()), ("function", function.is_some())] {
            if present && takes != Some(field) {
                return Err(unexpected(field));
            }
        }
        let payload = |value: Option<String>| match takes {
            Some(field) => value.filter(|v| !v.is_empty()).ok_or_else(|| missing(field)),
            None => Ok(String::new()),
        };

        let kind = match category {
            OperationCategory::InfixArithmetic | OperationCategory::PrefixArithmetic => {
                let symbol = payload(symbol)?;
                if symbol.chars().any(char::is_whitespace) {
                    return Err(CatalogError::InvalidIdentifier {
                        operation: name.clone(),
                        what: "symbol",
                        value: symbol,
                        reason: "must not contain whitespace",
                    });
                }
                if category == OperationCategory::InfixArithmetic {
                    OperationKind::InfixArithmetic { symbol }
                } else {
                    OperationKind::PrefixArithmetic { symbol }
                }
            }
            OperationCategory::UnaryElementwiseFunction => {
                let function = payload(function)?;
                require_identifier(&name, "function", &function)?;
                OperationKind::UnaryElementwiseFunction { function }
            }
            OperationCategory::PlaceholderUnary => OperationKind::PlaceholderUnary,
            OperationCategory::PlaceholderBinary => OperationKind::PlaceholderBinary,
            OperationCategory::ExternalUnaryExpression => OperationKind::ExternalUnaryExpression,
            OperationCategory::ExternalBinaryExpression => OperationKind::ExternalBinaryExpression,
            OperationCategory::ExternalSelectResult => OperationKind::ExternalSelectResult,
        };

        Ok(Self {
            name,
            enum_name,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    pub fn kind(&self) -> &OperationKind {
        &self.kind
    }

    pub fn category(&self) -> OperationCategory {
        self.kind.category()
    }

    pub fn arity(&self) -> usize {
        self.category().arity()
    }

    /// Name of the generated visitor type.
    pub fn runner_name(&self) -> String {
        format!("{}Runner", self.name)
    }

    /// Elementwise function tag routed through the enumeration metadata.
    pub fn function_tag(&self) -> Option<&str> {
        match &self.kind {
            OperationKind::UnaryElementwiseFunction { function } => Some(function),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Operation categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generation category of an operation. The category alone decides which
/// terminal combinations get an overload and which artifacts an entry
/// contributes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationCategory {
    /// Binary operator written between its operands: PLUS, MINUS, TIMES, RDIVIDE
    InfixArithmetic,
    /// Unary operator written before its operand: NEGATE
    PrefixArithmetic,
    /// Named function applied to every element: SIN, EXP, TAN, ...
    UnaryElementwiseFunction,
    /// Unary entry with no generated implementation
    PlaceholderUnary,
    /// Binary entry with no generated implementation
    PlaceholderBinary,
    /// Unary entry implemented by hand outside the generator
    ExternalUnaryExpression,
    /// Binary entry implemented by hand outside the generator
    ExternalBinaryExpression,
    /// Selection of one result out of a multi-result node
    ExternalSelectResult,
}

impl OperationCategory {
    /// Every category, in declaration order.
    pub const ALL: [OperationCategory; 8] = [
        OperationCategory::InfixArithmetic,
        OperationCategory::PrefixArithmetic,
        OperationCategory::UnaryElementwiseFunction,
        OperationCategory::PlaceholderUnary,
        OperationCategory::PlaceholderBinary,
        OperationCategory::ExternalUnaryExpression,
        OperationCategory::ExternalBinaryExpression,
        OperationCategory::ExternalSelectResult,
    ];

    /// Number of operands taken by operations in this category.
    ///
    /// A select-result node takes the multi-result expression and the index
    /// of the result to extract.
    pub fn arity(&self) -> usize {
        match self {
            OperationCategory::PrefixArithmetic
            | OperationCategory::UnaryElementwiseFunction
            | OperationCategory::PlaceholderUnary
            | OperationCategory::ExternalUnaryExpression => 1,
            OperationCategory::InfixArithmetic
            | OperationCategory::PlaceholderBinary
            | OperationCategory::ExternalBinaryExpression
            | OperationCategory::ExternalSelectResult => 2,
        }
    }

    /// Returns true if the generator writes runner bodies for this category.
    pub fn has_bodies(&self) -> bool {
        matches!(
            self,
            OperationCategory::InfixArithmetic
                | OperationCategory::PrefixArithmetic
                | OperationCategory::UnaryElementwiseFunction
        )
    }

    /// Returns true if the implementation is supplied outside the generator.
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            OperationCategory::ExternalUnaryExpression
                | OperationCategory::ExternalBinaryExpression
                | OperationCategory::ExternalSelectResult
        )
    }

    /// Name of the payload field this category requires, if any.
    pub fn payload_field(&self) -> Option<&'static str> {
        match self {
            OperationCategory::InfixArithmetic | OperationCategory::PrefixArithmetic => {
                Some("symbol")
            }
            OperationCategory::UnaryElementwiseFunction => Some("function"),
            _ => None,
        }
    }

    /// The snake_case spelling used in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationCategory::InfixArithmetic => "infix_arithmetic",
            OperationCategory::PrefixArithmetic => "prefix_arithmetic",
            OperationCategory::UnaryElementwiseFunction => "unary_elementwise_function",
            OperationCategory::PlaceholderUnary => "placeholder_unary",
            OperationCategory::PlaceholderBinary => "placeholder_binary",
            OperationCategory::ExternalUnaryExpression => "external_unary_expression",
            OperationCategory::ExternalBinaryExpression => "external_binary_expression",
            OperationCategory::ExternalSelectResult => "external_select_result",
        }
    }
}

impl fmt::Display for OperationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_matches_operand_count() {
        assert_eq!(OperationCategory::InfixArithmetic.arity(), 2);
        assert_eq!(OperationCategory::PrefixArithmetic.arity(), 1);
        assert_eq!(OperationCategory::PlaceholderBinary.arity(), 2);
        assert_eq!(OperationCategory::ExternalSelectResult.arity(), 2);
    }

    #[test]
    fn only_implemented_categories_have_bodies() {
        let with_bodies: Vec<_> = OperationCategory::ALL
            .iter()
            .filter(|c| c.has_bodies())
            .collect();
        assert_eq!(with_bodies.len(), 3);
        for category in OperationCategory::ALL {
            assert!(
                !(category.has_bodies() && category.is_external()),
                "{category} cannot both have bodies and be external"
            );
        }
    }

    #[test]
    fn payload_fields() {
        assert_eq!(
            OperationCategory::InfixArithmetic.payload_field(),
            Some("symbol")
        );
        assert_eq!(
            OperationCategory::UnaryElementwiseFunction.payload_field(),
            Some("function")
        );
        assert_eq!(OperationCategory::ExternalUnaryExpression.payload_field(), None);
    }
}

//! Reference operation catalog.
//!
//! The order below is the ordinal order shared with the Java expression
//! enumeration. New operations go at the end of the relevant group only if
//! no artifact compiled against the old numbering is still in use; in
//! practice that means at the very end.

use super::catalog::OperationCatalog;
use super::definitions::OperationRecord;
use crate::validation::CatalogError;

/// Records of the reference catalog, in ordinal order.
pub fn reference_records() -> Vec<OperationRecord> {
    use OperationRecord as R;
    vec![
        // ========== Fully generated and placeholder nodes ==========
        R::placeholder_unary("ABS"),
        R::function("ACOS", "ACOS_ENUM", "acos"),
        R::placeholder_unary("ACOSH"),
        R::placeholder_unary("ANGLE"),
        R::placeholder_unary("ASIN"),
        R::function("ASINH", "ASINH_ENUM", "asinh"),
        R::function("ATAN", "ATAN_ENUM", "atan"),
        R::placeholder_unary("ATANH"),
        R::placeholder_unary("CONJ"),
        R::function("COS", "COS_ENUM", "cos"),
        R::placeholder_unary("COSH"),
        R::placeholder_unary("DIAG"),
        R::placeholder_binary("DOT"),
        R::placeholder_unary("EIG"),
        R::placeholder_unary("ERF"),
        R::placeholder_unary("ERFC"),
        R::function("EXP", "EXP_ENUM", "exp"),
        R::placeholder_unary("EYE"),
        R::placeholder_unary("FLIPLR"),
        R::placeholder_unary("FLIPUD"),
        R::placeholder_unary("HILB"),
        R::placeholder_binary("HORZCAT"),
        R::placeholder_unary("IMAG"),
        R::placeholder_unary("INVHILB"),
        R::placeholder_unary("LOG"),
        R::infix("MINUS", "MINUS_ENUM", "-"),
        R::prefix("NEGATE", "NEGATE_ENUM", "-"),
        R::placeholder_unary("NORMCDF"),
        R::placeholder_binary("POWER"),
        R::infix("PLUS", "PLUS_ENUM", "+"),
        R::infix("RDIVIDE", "RDIVIDE_ENUM", "/"),
        R::placeholder_unary("REAL"),
        R::placeholder_unary("ROUND"),
        R::function("SIN", "SIN_ENUM", "sin"),
        R::function("SINH", "SINH_ENUM", "sinh"),
        R::placeholder_unary("SQRT"),
        R::function("TAN", "TAN_ENUM", "tan"),
        R::function("TANH", "TANH_ENUM", "tanh"),
        R::infix("TIMES", "TIMES_ENUM", "*"),
        R::placeholder_binary("VERTCAT"),
        R::placeholder_unary("WILKINSON"),
        // ========== Externally implemented nodes ==========
        R::external_unary("NORM2", "NORM2_ENUM"),
        R::external_unary("PINV", "PINV_ENUM"),
        R::external_unary("INV", "INV_ENUM"),
        R::external_unary("SVD", "SVD_ENUM"),
        R::external_select_result("SELECTRESULT", "SELECTRESULT_ENUM"),
        R::external_binary("MTIMES", "MTIMES_ENUM"),
        R::external_unary("TRANSPOSE", "TRANSPOSE_ENUM"),
        R::external_unary("CTRANSPOSE", "CTRANSPOSE_ENUM"),
        R::external_unary("LU", "LU_ENUM"),
        R::external_binary("MLDIVIDE", "MLDIVIDE_ENUM"),
        R::external_unary("QR", "QR_ENUM"),
        R::external_unary("SUMCOLS", "SUMCOLS_ENUM"),
        R::external_unary("SUMROWS", "SUMROWS_ENUM"),
    ]
}

/// The reference operation catalog.
pub fn reference_operations() -> Result<OperationCatalog, CatalogError> {
    OperationCatalog::from_records(reference_records())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::OperationCategory;

    #[test]
    fn reference_catalog_is_valid() {
        let catalog = reference_operations().unwrap();
        assert_eq!(catalog.len(), 54);
    }

    #[test]
    fn reference_ordinals_are_pinned() {
        let catalog = reference_operations().unwrap();
        assert_eq!(catalog.ordinal_of("ABS_ENUM"), Some(0));
        assert_eq!(catalog.ordinal_of("PLUS_ENUM"), Some(29));
        assert_eq!(catalog.ordinal_of("TAN_ENUM"), Some(36));
        assert_eq!(catalog.ordinal_of("WILKINSON_ENUM"), Some(40));
        assert_eq!(catalog.ordinal_of("NORM2_ENUM"), Some(41));
        assert_eq!(catalog.ordinal_of("SUMROWS_ENUM"), Some(53));
    }

    #[test]
    fn reference_category_counts() {
        let catalog = reference_operations().unwrap();
        let count = |category: OperationCategory| catalog.iter().filter(|s| s.category() == category).count();
        assert_eq!(count(OperationCategory::InfixArithmetic), 4);
        assert_eq!(count(OperationCategory::PrefixArithmetic), 1);
        assert_eq!(count(OperationCategory::UnaryElementwiseFunction), 9);
        assert_eq!(count(OperationCategory::PlaceholderBinary), 4);
        assert_eq!(count(OperationCategory::PlaceholderUnary), 23);
        assert_eq!(count(OperationCategory::ExternalUnaryExpression), 10);
        assert_eq!(count(OperationCategory::ExternalBinaryExpression), 2);
        assert_eq!(count(OperationCategory::ExternalSelectResult), 1);
    }
}

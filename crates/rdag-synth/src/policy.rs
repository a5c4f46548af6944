//! Combination-selection policy.
//!
//! Which terminal combinations receive a generated overload is decided by
//! the operation's category alone. The tables below are the only place that
//! decision is made; every artifact that lists overloads reads them through
//! [`select_combinations`].
//!
//! | category                 | combinations                                        |
//! |--------------------------|-----------------------------------------------------|
//! | infix arithmetic         | real scalar pair, real dense pair, complex dense pair |
//! | prefix arithmetic        | real scalar, real dense                             |
//! | elementwise function     | real scalar, real dense, complex dense              |
//! | placeholders, externals  | none                                                |
//!
//! Mixed-domain and mixed-shape pairs are never generated. Operands and
//! result are always the same terminal kind.

use std::iter::{Chain, Once, once};

use rdag_catalog::{
    CatalogError, Domain, OperationCatalog, OperationCategory, Shape, TerminalCatalog,
    TerminalSpec,
};

const REAL_SCALAR: TerminalSpec = TerminalSpec::new(Domain::Real, Shape::Scalar);
const REAL_DENSE: TerminalSpec = TerminalSpec::new(Domain::Real, Shape::DenseMatrix);
const COMPLEX_DENSE: TerminalSpec = TerminalSpec::new(Domain::Complex, Shape::DenseMatrix);

static SAME_KIND_PAIRS: [Combination; 3] = [
    Combination::Binary(REAL_SCALAR, REAL_SCALAR),
    Combination::Binary(REAL_DENSE, REAL_DENSE),
    Combination::Binary(COMPLEX_DENSE, COMPLEX_DENSE),
];

static NEGATABLE: [Combination; 2] = [
    Combination::Unary(REAL_SCALAR),
    Combination::Unary(REAL_DENSE),
];

static ELEMENTWISE: [Combination; 3] = [
    Combination::Unary(REAL_SCALAR),
    Combination::Unary(REAL_DENSE),
    Combination::Unary(COMPLEX_DENSE),
];

/// Operand types of one generated overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combination {
    Unary(TerminalSpec),
    Binary(TerminalSpec, TerminalSpec),
}

impl Combination {
    /// Operand terminals, left to right.
    pub fn operands(self) -> Chain<Once<TerminalSpec>, std::option::IntoIter<TerminalSpec>> {
        match self {
            Combination::Unary(arg) => once(arg).chain(None),
            Combination::Binary(arg0, arg1) => once(arg0).chain(Some(arg1)),
        }
    }

    /// Kind of the value the overload constructs.
    pub fn result(self) -> TerminalSpec {
        match self {
            Combination::Unary(arg) | Combination::Binary(arg, _) => arg,
        }
    }

    pub fn is_scalar(self) -> bool {
        self.result().shape.is_scalar()
    }
}

/// Terminal combinations that receive a generated overload for `category`.
pub fn select_combinations(category: OperationCategory) -> &'static [Combination] {
    match category {
        OperationCategory::InfixArithmetic => &SAME_KIND_PAIRS,
        OperationCategory::PrefixArithmetic => &NEGATABLE,
        OperationCategory::UnaryElementwiseFunction => &ELEMENTWISE,
        OperationCategory::PlaceholderUnary
        | OperationCategory::PlaceholderBinary
        | OperationCategory::ExternalUnaryExpression
        | OperationCategory::ExternalBinaryExpression
        | OperationCategory::ExternalSelectResult => &[],
    }
}

/// Check that every terminal the policy selects for `operations` exists in
/// `terminals`. The first offending operation, in catalog order, is reported.
pub fn check_terminals(
    operations: &OperationCatalog,
    terminals: &TerminalCatalog,
) -> Result<(), CatalogError> {
    for spec in operations {
        for combination in select_combinations(spec.category()) {
            if let Some(missing) = combination.operands().find(|t| !terminals.contains(t)) {
                return Err(CatalogError::MissingTerminal {
                    operation: spec.name().to_string(),
                    domain: missing.domain,
                    shape: missing.shape,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdag_catalog::OperationRecord;

    #[test]
    fn infix_pairs_are_same_kind() {
        let pairs = select_combinations(OperationCategory::InfixArithmetic);
        assert_eq!(pairs.len(), 3);
        for pair in pairs {
            let Combination::Binary(arg0, arg1) = *pair else {
                panic!("infix combination {pair:?} is not binary");
            };
            assert_eq!(arg0, arg1);
        }
    }

    #[test]
    fn unary_categories_select_single_operands() {
        assert_eq!(
            select_combinations(OperationCategory::PrefixArithmetic),
            &[Combination::Unary(REAL_SCALAR), Combination::Unary(REAL_DENSE)]
        );
        let elementwise = select_combinations(OperationCategory::UnaryElementwiseFunction);
        assert_eq!(elementwise.len(), 3);
        assert!(elementwise.contains(&Combination::Unary(COMPLEX_DENSE)));
    }

    #[test]
    fn only_body_categories_select_anything() {
        for category in OperationCategory::ALL {
            assert_eq!(
                select_combinations(category).is_empty(),
                !category.has_bodies(),
                "{category}"
            );
        }
    }

    #[test]
    fn arity_matches_combination_shape() {
        for category in OperationCategory::ALL {
            for combination in select_combinations(category) {
                assert_eq!(combination.operands().count(), category.arity(), "{category}");
            }
        }
    }

    #[test]
    fn result_is_operand_kind() {
        assert_eq!(Combination::Binary(REAL_DENSE, REAL_DENSE).result(), REAL_DENSE);
        assert!(Combination::Unary(REAL_SCALAR).is_scalar());
        assert!(!Combination::Unary(COMPLEX_DENSE).is_scalar());
    }

    #[test]
    fn reference_catalogs_are_consistent() {
        let operations = rdag_catalog::reference_operations().unwrap();
        check_terminals(&operations, &TerminalCatalog::reference()).unwrap();
    }

    #[test]
    fn missing_terminal_names_operation() {
        let operations = OperationCatalog::from_records([
            OperationRecord::placeholder_unary("ABS"),
            OperationRecord::infix("PLUS", "PLUS_ENUM", "+"),
        ])
        .unwrap();
        let terminals = TerminalCatalog::new(vec![REAL_SCALAR, REAL_DENSE]).unwrap();

        match check_terminals(&operations, &terminals) {
            Err(CatalogError::MissingTerminal {
                operation,
                domain,
                shape,
            }) => {
                assert_eq!(operation, "PLUS");
                assert_eq!((domain, shape), (Domain::Complex, Shape::DenseMatrix));
            }
            other => panic!("expected MissingTerminal, got {other:?}"),
        }
    }

    #[test]
    fn placeholders_need_no_terminals() {
        let operations =
            OperationCatalog::from_records([OperationRecord::placeholder_binary("DOT")]).unwrap();
        let terminals = TerminalCatalog::new(vec![COMPLEX_DENSE]).unwrap();
        assert!(check_terminals(&operations, &terminals).is_ok());
    }
}

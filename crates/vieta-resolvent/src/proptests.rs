//! Property-based tests for the reduction.

use proptest::prelude::*;
use vieta_integers::Rational;
use vieta_poly::{Monomial, Poly, Symbol};

use crate::{calc_vieta_sum, reduce_expression, CoefficientAssignment, FormulaVariant};

/// Random polynomials in x0, e1, e2, e3 with small integer coefficients.
fn expression() -> impl Strategy<Value = Poly> {
    prop::collection::vec((0u32..7, 0u32..3, 0u32..3, 0u32..2, -5i64..=5), 1..8).prop_map(
        |terms| {
            let mut p = Poly::zero();
            for (k, a, b, c, coeff) in terms {
                let m = Monomial::from_factors([
                    (Symbol::Marker, k),
                    (Symbol::E(1), a),
                    (Symbol::E(2), b),
                    (Symbol::E(3), c),
                ]);
                p.add_term(m, Rational::from(coeff));
            }
            p
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reduction_lowers_degree(expr in expression(), j in 1usize..=4) {
        let part = reduce_expression(&expr, j).unwrap();
        let top = part.leading().map_or(0, |(k, _)| k as usize);
        prop_assert!(top < j);
    }

    #[test]
    fn reduction_is_idempotent(expr in expression(), j in 1usize..=4) {
        let once = reduce_expression(&expr, j).unwrap();
        let twice = reduce_expression(&once.reassemble(Symbol::Marker), j).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reduction_is_linear(f in expression(), g in expression()) {
        let sum = reduce_expression(&(&f + &g), 3).unwrap().reassemble(Symbol::Marker);
        let parts = &reduce_expression(&f, 3).unwrap().reassemble(Symbol::Marker)
            + &reduce_expression(&g, 3).unwrap().reassemble(Symbol::Marker);
        prop_assert_eq!(sum, parts);
    }

    #[test]
    fn halved_matches_canonical_numerically(b in -9i64..=9, c in -9i64..=9, d in -9i64..=9) {
        let assignment = CoefficientAssignment::from_values(
            [1, b, c, d].iter().map(|&v| Rational::from(v)).collect(),
        );
        let canonical = calc_vieta_sum(3, FormulaVariant::Canonical).unwrap();
        let halved = calc_vieta_sum(3, FormulaVariant::Halved).unwrap();
        prop_assert_eq!(
            assignment.evaluate_all(&canonical.terms).unwrap(),
            assignment.evaluate_all(&halved.terms).unwrap()
        );
    }
}

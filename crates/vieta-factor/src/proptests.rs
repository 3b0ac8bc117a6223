//! Property-based tests for integer factorization.

use proptest::prelude::*;
use vieta_integers::{Integer, PrimeField, Rational};
use vieta_poly::{DensePoly, Poly, Symbol};

use crate::{factor, factor_degrees, factor_multivariate, is_irreducible, ModPoly};

fn small_poly(max_degree: usize) -> impl Strategy<Value = DensePoly<Integer>> {
    prop::collection::vec(-6i64..=6, 1..=max_degree)
        .prop_map(|mut c| {
            c.push(1);
            c
        })
        .prop_map(|c| DensePoly::from_i64s(&c))
}

/// `a0 x0 + a1 x1 + a2 x2 + a3` with `a0 != 0`.
fn linear_form() -> impl Strategy<Value = Poly> {
    (1i64..=3, -3i64..=3, -3i64..=3, -3i64..=3).prop_map(|(a0, a1, a2, a3)| {
        let term = |k: u8, a: i64| Poly::var(Symbol::Root(k)).scale(&Rational::from(a));
        &(&term(0, a0) + &term(1, a1)) + &(&term(2, a2) + &Poly::from_i64(a3))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn factorization_expands_to_input(f in small_poly(5), scale in 1i64..=4) {
        let f = f.scale(&Integer::new(scale));
        prop_assert_eq!(factor(&f).expand(), f);
    }

    #[test]
    fn factors_are_irreducible(f in small_poly(5)) {
        for part in factor(&f).factors {
            prop_assert!(is_irreducible(&part.factor));
        }
    }

    #[test]
    fn products_are_reducible(f in small_poly(3), g in small_poly(3)) {
        prop_assert!(!is_irreducible(&f.mul(&g)));
    }

    #[test]
    fn frobenius_degrees_sum_to_degree(f in small_poly(6)) {
        let f_mod = ModPoly::from_integer_poly(&f, PrimeField::new(101));
        prop_assume!(f_mod.gcd(&f_mod.derivative()).degree() == 0);
        prop_assert_eq!(factor_degrees(&f_mod).iter().sum::<usize>(), f.degree());
    }

    #[test]
    fn linear_forms_are_recovered(a in linear_form(), b in linear_form(), c in linear_form()) {
        let p = &(&a * &b) * &c;
        let f = factor_multivariate(&p);
        prop_assert_eq!(f.count(), 3);
        prop_assert!(f.factors.iter().all(|pf| pf.factor.total_degree() == 1));
        prop_assert_eq!(f.expand(), p);
    }
}

//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use vieta_integers::{Integer, Rational};

    use crate::algorithms::{discriminant, gcd, squarefree_decomposition, squarefree_factor};
    use crate::dense::DensePoly;
    use crate::monomial::Monomial;
    use crate::sparse::{Poly, Substitution};
    use crate::symbol::Symbol;
    use crate::text::{format_univariate, parse_univariate};

    // Strategy for sparse polynomials in e1, e2, e3 with up to four terms
    fn sparse_poly() -> impl Strategy<Value = Poly> {
        proptest::collection::vec(((0u32..3, 0u32..3, 0u32..3), -5i64..=5), 0..=4).prop_map(
            |terms| {
                let mut p = Poly::zero();
                for ((a, b, c), coeff) in terms {
                    let m = Monomial::from_factors([
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

    fn nonconstant_poly() -> impl Strategy<Value = Poly> {
        sparse_poly().prop_filter("polynomial must be non-constant", |p| !p.is_constant())
    }

    // Strategy for small dense integer polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = DensePoly<Integer>> {
        proptest::collection::vec(-20i64..20i64, 1..=5).prop_map(|c| DensePoly::from_i64s(&c))
    }

    fn monic_poly() -> impl Strategy<Value = DensePoly<Integer>> {
        proptest::collection::vec(-6i64..=6i64, 1..=4).prop_map(|mut c| {
            c.push(1);
            DensePoly::from_i64s(&c)
        })
    }

    proptest! {
        #[test]
        fn sparse_ring_axioms(a in sparse_poly(), b in sparse_poly(), c in sparse_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn sparse_division_identity(a in sparse_poly(), d in nonconstant_poly()) {
            // a = q d + r, and (q d) / d = q exactly
            let (q, r) = a.div_rem(&d);
            prop_assert_eq!(&(&q * &d) + &r, a);
            prop_assert_eq!((&q * &d).div_exact(&d), Some(q));
        }

        #[test]
        fn collection_round_trip(a in sparse_poly()) {
            let coeffs = a.coefficients_in(Symbol::E(2));
            prop_assert!(coeffs.values().all(|c| !c.contains(Symbol::E(2))));
            prop_assert_eq!(Poly::from_coefficients_in(Symbol::E(2), coeffs), a);
        }

        #[test]
        fn substitution_is_a_homomorphism(a in sparse_poly(), b in sparse_poly(), image in sparse_poly()) {
            let mut subs = Substitution::default();
            subs.insert(Symbol::E(1), image);
            prop_assert_eq!(
                (&a * &b).substitute(&subs),
                &a.substitute(&subs) * &b.substitute(&subs)
            );
        }

        #[test]
        fn gcd_divides_common_factor(a in nonconstant_poly(), b in nonconstant_poly(), c in nonconstant_poly()) {
            let g = gcd(&(&a * &c), &(&b * &c));
            prop_assert!((&a * &c).div_exact(&g).is_some());
            prop_assert!((&b * &c).div_exact(&g).is_some());
            prop_assert!(g.div_exact(&c.primitive_part()).is_some());
        }

        #[test]
        fn factor_expands_to_input(a in sparse_poly(), b in nonconstant_poly()) {
            let p = &a * &b.pow(2);
            let f = squarefree_factor(&p);
            prop_assert_eq!(f.expand(), p);
            prop_assert!(f.factors.iter().all(|pf| !pf.factor.is_constant()));
        }

        #[test]
        fn dense_mul_degree(a in small_poly(), b in small_poly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn dense_eval_mul(a in small_poly(), b in small_poly(), x in -10i64..10i64) {
            let x = Integer::new(x);
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn discriminant_detects_repeated_roots(a in monic_poly(), r in -5i64..=5) {
            let linear = DensePoly::from_i64s(&[-r, 1]);
            let p = a.mul(&linear).mul(&linear);
            prop_assert_eq!(discriminant(&p), Integer::new(0));
        }

        #[test]
        fn squarefree_decomposition_reconstructs(a in monic_poly(), b in monic_poly()) {
            let p = a.mul(&b).mul(&b).to_rational();
            prop_assert_eq!(squarefree_decomposition(&p).to_polynomial(), p);
        }

        #[test]
        fn text_form_parses_back(a in small_poly()) {
            prop_assert_eq!(parse_univariate(&format_univariate(&a)).unwrap(), a);
        }
    }
}

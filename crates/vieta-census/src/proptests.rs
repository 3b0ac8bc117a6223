//! Property-based tests for enumeration and classification.

use proptest::prelude::*;
use vieta_integers::Integer;
use vieta_poly::parse_univariate;

use crate::enumerate::{monic_from_tuple, CoefficientBox};
use crate::outcome::{classify_polynomial, Outcome};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn box_enumerates_distinct_tuples(n in 0u32..3, deg in 1usize..4) {
        let b = CoefficientBox::new(n, deg);
        let tuples: Vec<_> = b.tuples().collect();
        prop_assert_eq!(tuples.len() as u64, b.len());
        prop_assert!(tuples.windows(2).all(|w| w[0] < w[1]));
        let bound = i64::from(n);
        prop_assert!(tuples.iter().flatten().all(|a| (-bound..=bound).contains(a)));
    }

    #[test]
    fn bucket_lines_parse_back(tuple in prop::collection::vec(-6i64..=6, 1..=5)) {
        let f = monic_from_tuple(&tuple, tuple.len());
        prop_assert!(f.is_monic());
        prop_assert_eq!(parse_univariate(&f.to_string()).unwrap(), f);
    }

    #[test]
    fn classified_groups_have_matching_degree(tuple in prop::collection::vec(-4i64..=4, 2..=4)) {
        let f = monic_from_tuple(&tuple, tuple.len());
        match classify_polynomial(&f) {
            Outcome::Classified(c) => {
                prop_assert_eq!(c.group.degree as usize, f.degree());
                // even groups have a square discriminant
                let disc = vieta_poly::discriminant(&f);
                prop_assert_eq!(c.group.even, disc.is_perfect_square());
            }
            Outcome::Reducible => prop_assert!(f.degree() > 1),
            Outcome::Failed { reason } => prop_assert!(false, "failed: {reason}"),
        }
        prop_assert_eq!(f.coeff(f.degree()), Integer::new(1));
    }
}

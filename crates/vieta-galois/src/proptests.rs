//! Property-based tests for classification and labels.

use proptest::prelude::*;
use vieta_integers::Integer;
use vieta_poly::{discriminant, DensePoly};

use crate::{galois_group, normalize_label, GaloisError};

fn monic(max_degree: usize) -> impl Strategy<Value = DensePoly<Integer>> {
    prop::collection::vec(-5i64..=5, 1..=max_degree).prop_map(|mut c| {
        c.push(1);
        DensePoly::from_i64s(&c)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normalize_is_idempotent(label in "[A-Z]\\(?[0-9]\\)?( ?= ?[0-9:\\[\\]x]+)?") {
        let once = normalize_label(&label);
        prop_assert_eq!(normalize_label(once), once);
        prop_assert!(!once.contains('='));
    }

    #[test]
    fn parity_matches_discriminant(f in monic(5)) {
        match galois_group(&f) {
            Ok(group) if f.degree() >= 2 => {
                prop_assert_eq!(group.even, discriminant(&f).is_perfect_square());
                prop_assert_eq!(group.degree as usize, f.degree());
            }
            Ok(_) => {}
            Err(e) => prop_assert_eq!(e, GaloisError::Reducible),
        }
    }
}

//! Frobenius cycle types.
//!
//! For a prime p not dividing the discriminant, the degrees of the
//! irreducible factors of f mod p form the cycle type of the Frobenius
//! element at p. By Chebotarev every cycle type of the Galois group
//! appears with positive density, so a few dozen primes expose the
//! distinguishing types with overwhelming probability.

use std::collections::BTreeMap;

use tracing::trace;
use vieta_factor::{factor_degrees, ModPoly};
use vieta_integers::{primes_from, Integer, PrimeField};
use vieta_poly::DensePoly;

/// Default number of unramified primes sampled.
pub const FROBENIUS_PRIMES: usize = 96;

/// Cycle types of Frobenius at a run of unramified primes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrobeniusSample {
    /// Cycle type (descending part sizes) to number of primes showing it.
    pub counts: BTreeMap<Vec<usize>, usize>,
    /// The primes sampled, ascending.
    pub primes: Vec<u64>,
}

impl FrobeniusSample {
    /// Whether some prime had the given cycle type (descending order).
    #[must_use]
    pub fn contains(&self, cycle_type: &[usize]) -> bool {
        self.counts.contains_key(cycle_type)
    }

    /// Whether some prime had a cycle of length `len`.
    #[must_use]
    pub fn has_cycle(&self, len: usize) -> bool {
        self.counts.keys().any(|t| t.contains(&len))
    }

    /// Fraction of sampled primes at which f has a root.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn root_density(&self) -> f64 {
        if self.primes.is_empty() {
            return 0.0;
        }
        let with_root: usize = self
            .counts
            .iter()
            .filter(|(t, _)| t.contains(&1))
            .map(|(_, n)| n)
            .sum();
        with_root as f64 / self.primes.len() as f64
    }
}

/// Samples Frobenius cycle types of a squarefree monic polynomial.
///
/// `discriminant` must be the (nonzero) discriminant of `f`; primes
/// dividing it are skipped.
#[must_use]
pub fn frobenius_sample(
    f: &DensePoly<Integer>,
    discriminant: &Integer,
    count: usize,
) -> FrobeniusSample {
    let mut sample = FrobeniusSample::default();

    for p in primes_from(3)
        .filter(|&p| discriminant.residue(p) != 0)
        .take(count)
    {
        let f_mod = ModPoly::from_integer_poly(f, PrimeField::new(p));
        let mut cycle_type = factor_degrees(&f_mod);
        cycle_type.reverse();
        trace!(prime = p, ?cycle_type, "frobenius");

        *sample.counts.entry(cycle_type).or_insert(0) += 1;
        sample.primes.push(p);
    }

    sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use vieta_poly::discriminant;

    #[test]
    fn test_cyclic_quartic_types() {
        // Galois group C4: Frobenius is 1^4, 2^2 or a 4-cycle
        let f = DensePoly::from_i64s(&[1, 1, 1, 1, 1]);
        let sample = frobenius_sample(&f, &discriminant(&f), 40);
        assert_eq!(sample.primes.len(), 40);
        for cycle_type in sample.counts.keys() {
            assert!(
                [vec![1, 1, 1, 1], vec![2, 2], vec![4]].contains(cycle_type),
                "unexpected {cycle_type:?}"
            );
        }
        assert!(sample.contains(&[4]));
    }

    #[test]
    fn test_ramified_primes_skipped() {
        // disc(x^2 - 3) = 12
        let f = DensePoly::from_i64s(&[-3, 0, 1]);
        let sample = frobenius_sample(&f, &discriminant(&f), 10);
        assert!(!sample.primes.contains(&3));
    }

    #[test]
    fn test_root_density_of_cubic() {
        // x^3 - 2 has a root mod p for p = 2 mod 3 and for a third of the rest
        let f = DensePoly::from_i64s(&[-2, 0, 0, 1]);
        let sample = frobenius_sample(&f, &discriminant(&f), FROBENIUS_PRIMES);
        let density = sample.root_density();
        assert!(density > 0.4 && density < 0.9, "density {density}");
        assert!(sample.has_cycle(3));
    }
}

//! Arithmetic in prime fields F_p with a runtime modulus.
//!
//! Factoring and Frobenius statistics walk through many small primes, so
//! the modulus cannot be a const generic. Residues are plain `u64` values
//! in `[0, p)`; `PrimeField` carries the modulus and does the arithmetic.

use crate::Integer;

/// The prime field F_p for a prime `p < 2^32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Creates the field of residues modulo `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not a prime below 2^32.
    #[must_use]
    pub fn new(p: u64) -> Self {
        assert!(p < (1 << 32) && is_prime(p), "{p} is not a small prime");
        Self { p }
    }

    /// Returns the characteristic.
    #[must_use]
    pub const fn modulus(self) -> u64 {
        self.p
    }

    /// Reduces a signed machine integer.
    #[must_use]
    pub fn from_signed(self, value: i64) -> u64 {
        let p = i128::from(self.p);
        // The result lies in [0, p), which fits in u64.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let r = i128::from(value).rem_euclid(p) as u64;
        r
    }

    /// Reduces an arbitrary precision integer.
    #[must_use]
    pub fn reduce(self, value: &Integer) -> u64 {
        value.residue(self.p)
    }

    /// Lifts a residue to the symmetric range `(-p/2, p/2]`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn lift_symmetric(self, a: u64) -> i64 {
        if a > self.p / 2 {
            a as i64 - self.p as i64
        } else {
            a as i64
        }
    }

    /// a + b.
    #[must_use]
    pub fn add(self, a: u64, b: u64) -> u64 {
        let s = a + b;
        if s >= self.p {
            s - self.p
        } else {
            s
        }
    }

    /// a - b.
    #[must_use]
    pub fn sub(self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.p - b
        }
    }

    /// -a.
    #[must_use]
    pub fn neg(self, a: u64) -> u64 {
        if a == 0 {
            0
        } else {
            self.p - a
        }
    }

    /// a * b.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn mul(self, a: u64, b: u64) -> u64 {
        ((u128::from(a) * u128::from(b)) % u128::from(self.p)) as u64
    }

    /// a^exp by binary exponentiation.
    #[must_use]
    pub fn pow(self, a: u64, mut exp: u128) -> u64 {
        let mut base = a % self.p;
        let mut result = 1 % self.p;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }
        result
    }

    /// Multiplicative inverse, `None` for zero.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn inv(self, a: u64) -> Option<u64> {
        let a = a % self.p;
        if a == 0 {
            return None;
        }

        // Extended Euclid on (p, a); only the coefficient of a is tracked.
        let mut t = 0i64;
        let mut new_t = 1i64;
        let mut r = self.p as i64;
        let mut new_r = a as i64;

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        debug_assert_eq!(r, 1);
        Some(self.from_signed(t))
    }
}

/// Deterministic primality test for machine words by trial division.
///
/// Only used on moduli below 2^32, where `sqrt(p)` trial divisions are cheap.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Iterator over the primes starting at `from` (inclusive).
pub fn primes_from(from: u64) -> impl Iterator<Item = u64> {
    (from.max(2)..).filter(|&n| is_prime(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let f = PrimeField::new(7);

        assert_eq!(f.add(5, 4), 2);
        assert_eq!(f.sub(4, 5), 6);
        assert_eq!(f.mul(5, 4), 6);
        assert_eq!(f.neg(3), 4);
        assert_eq!(f.neg(0), 0);
    }

    #[test]
    fn test_inverse() {
        let f = PrimeField::new(7);
        assert_eq!(f.inv(3), Some(5));
        assert_eq!(f.inv(0), None);

        let g = PrimeField::new(1_000_003);
        for a in [2u64, 17, 999_999, 123_456] {
            let inv = g.inv(a).unwrap();
            assert_eq!(g.mul(a, inv), 1);
        }
    }

    #[test]
    fn test_pow_fermat() {
        let f = PrimeField::new(13);
        for a in 1..13 {
            assert_eq!(f.pow(a, 12), 1);
        }
        assert_eq!(f.pow(0, 0), 1);
    }

    #[test]
    fn test_signed_and_symmetric() {
        let f = PrimeField::new(11);
        assert_eq!(f.from_signed(-3), 8);
        assert_eq!(f.lift_symmetric(8), -3);
        assert_eq!(f.lift_symmetric(5), 5);
        assert_eq!(f.reduce(&Integer::new(-23)), 10);
    }

    #[test]
    fn test_primes() {
        let first: Vec<u64> = primes_from(0).take(6).collect();
        assert_eq!(first, vec![2, 3, 5, 7, 11, 13]);
        assert!(is_prime(1_000_003));
        assert!(!is_prime(1_000_001));
    }
}

//! Arbitrary precision integers.
//!
//! `Integer` wraps `dashu::IBig` and adds the handful of number-theoretic
//! helpers the factoring and classification code leans on: Euclidean
//! residues, residues modulo machine-word primes, and exact square roots
//! for discriminant tests.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the number of bits of the absolute value.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Computes the non-negative greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Computes the non-negative least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Remainder in `[0, |m|)`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    #[must_use]
    pub fn rem_euclid(&self, m: &Self) -> Self {
        let r = &self.0 % &m.0;
        if DashuSigned::is_negative(&r) {
            Self(r + m.0.clone().abs())
        } else {
            Self(r)
        }
    }

    /// Residue modulo a machine-word modulus, in `[0, m)`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    #[must_use]
    pub fn residue(&self, m: u64) -> u64 {
        let r = self.rem_euclid(&Self::from(m));
        u64::try_from(r.0).unwrap_or_default()
    }

    /// Maps a residue in `[0, m)` to the symmetric range `(-m/2, m/2]`.
    #[must_use]
    pub fn symmetric_residue(&self, m: &Self) -> Self {
        let r = self.rem_euclid(m);
        let half = m.abs() / Self::new(2);
        if r > half {
            r - m.abs()
        } else {
            r
        }
    }

    /// Floor of the square root of a non-negative integer.
    ///
    /// Returns `None` for negative input.
    #[must_use]
    pub fn isqrt(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        if self.0 < IBig::from(2) {
            return Some(self.clone());
        }

        // Newton iteration from an overestimate converges monotonically.
        let shift = u32::try_from(self.bit_len().div_ceil(2)).unwrap_or(u32::MAX);
        let mut x = Self::new(2).pow(shift);
        loop {
            let y = (&x + &(self / &x)) / Self::new(2);
            if y >= x {
                return Some(x);
            }
            x = y;
        }
    }

    /// Returns the exact square root if this is a perfect square.
    #[must_use]
    pub fn sqrt_exact(&self) -> Option<Self> {
        let r = self.isqrt()?;
        if &r * &r == *self {
            Some(r)
        } else {
            None
        }
    }

    /// Returns true if this is the square of an integer (zero included).
    #[must_use]
    pub fn is_perfect_square(&self) -> bool {
        self.sqrt_exact().is_some()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Nearest floating point value; huge magnitudes saturate to infinity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        match self.to_i64() {
            Some(v) => v as f64,
            None => self.0.to_string().parse().unwrap_or(f64::NAN),
        }
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s.trim(), 10)
    }
}

/// Implements a binary operator for every owned/borrowed operand pairing.
macro_rules! integer_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0 $op rhs.0)
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(self.0 $op &rhs.0)
            }
        }

        impl $trait<Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(&self.0 $op rhs.0)
            }
        }

        impl $trait<&Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(&self.0 $op &rhs.0)
            }
        }
    };
}

integer_binop!(Add, add, +);
integer_binop!(Sub, sub, -);
integer_binop!(Mul, mul, *);
// Truncating division and remainder, as in dashu.
integer_binop!(Div, div, /);
integer_binop!(Rem, rem, %);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl std::iter::Sum for Integer {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<usize> for Integer {
    fn from(value: usize) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert_eq!((&a + &b).to_i64(), Some(13));
        assert_eq!((&a - &b).to_i64(), Some(7));
        assert_eq!((&a * &b).to_i64(), Some(30));
        assert_eq!((&a / &b).to_i64(), Some(3));
        assert_eq!((a % b).to_i64(), Some(1));
    }

    #[test]
    fn test_rem_euclid_is_non_negative() {
        let m = Integer::new(7);
        assert_eq!(Integer::new(-3).rem_euclid(&m), Integer::new(4));
        assert_eq!(Integer::new(-14).rem_euclid(&m), Integer::new(0));
        assert_eq!(Integer::new(-3).residue(7), 4);
        assert_eq!(Integer::new(5).symmetric_residue(&m), Integer::new(-2));
        assert_eq!(Integer::new(3).symmetric_residue(&m), Integer::new(3));
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(Integer::new(0).isqrt(), Some(Integer::new(0)));
        assert_eq!(Integer::new(15).isqrt(), Some(Integer::new(3)));
        assert_eq!(Integer::new(16).isqrt(), Some(Integer::new(4)));
        assert_eq!(Integer::new(-4).isqrt(), None);
        assert!(Integer::new(625).is_perfect_square());
        assert!(!Integer::new(-108).is_perfect_square());
        assert!(!Integer::new(50_000).is_perfect_square());
    }

    #[test]
    fn test_isqrt_large() {
        let big: Integer = "123456789012345678901234567890".parse().unwrap();
        let square = &big * &big;
        assert_eq!(square.sqrt_exact(), Some(big.clone()));
        assert_eq!((square + Integer::new(1)).sqrt_exact(), None);
    }

    #[test]
    fn test_gcd_lcm() {
        let a = Integer::new(48);
        let b = Integer::new(-18);
        assert_eq!(a.gcd(&b).to_i64(), Some(6));
        assert_eq!(a.lcm(&b).to_i64(), Some(144));
    }

    #[test]
    fn test_gcd_with_zero() {
        let z = Integer::zero();
        assert_eq!(z.gcd(&z), z);
        assert_eq!(z.gcd(&Integer::new(-5)).to_i64(), Some(5));
        assert_eq!(Integer::new(-7).gcd(&z).to_i64(), Some(7));
    }
}

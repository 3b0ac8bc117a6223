//! Algebraic structure traits.
//!
//! Identities come from `num_traits::{Zero, One}` so that the concrete
//! number types can implement these traits directly without a second,
//! competing `zero()`.

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Computes n * self by repeated doubling.
    #[must_use]
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut result = Self::zero();
        let mut base = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base;
            k >>= 1;
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0 there are q, r with a = b*q + r and r
/// smaller than b in the Euclidean measure.
pub trait EuclideanDomain: Ring {
    /// Computes the quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// May panic if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Quotient of a division known to be exact.
    fn div_exact(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Computes the greatest common divisor.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.div_rem(&b).1;
            a = b;
            b = r;
        }

        a
    }
}

/// A field: every non-zero element is invertible.
pub trait Field: EuclideanDomain {
    /// Computes the multiplicative inverse, `None` for zero.
    fn inv(&self) -> Option<Self>;
}

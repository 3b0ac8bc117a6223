//! The field of rational numbers Q.

use crate::traits::{EuclideanDomain, Field, Ring};
use num_traits::Zero;
use vieta_integers::Rational;

impl Ring for Rational {
    fn pow(&self, n: u32) -> Self {
        Rational::pow(self, n)
    }
}

impl EuclideanDomain for Rational {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (self / other, Self::zero())
    }
}

impl Field for Rational {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ops() {
        let a = Rational::from_i64(3, 4);
        assert_eq!(a.inv(), Some(Rational::from_i64(4, 3)));
        assert_eq!(Rational::zero().inv(), None);
        assert_eq!(a.div_rem(&Rational::from(3)).0, Rational::from_i64(1, 4));
        assert_eq!(a.mul_by_scalar(4), Rational::from(3));
    }
}

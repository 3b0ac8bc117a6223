//! The ring of integers Z.

use crate::traits::{EuclideanDomain, Ring};
use vieta_integers::Integer;

impl Ring for Integer {
    fn pow(&self, n: u32) -> Self {
        Integer::pow(self, n)
    }
}

impl EuclideanDomain for Integer {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (self / other, self % other)
    }

    fn gcd(&self, other: &Self) -> Self {
        Integer::gcd(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_domain() {
        let (q, r) = Integer::new(17).div_rem(&Integer::new(5));
        assert_eq!(q, Integer::new(3));
        assert_eq!(r, Integer::new(2));
        assert_eq!(Integer::new(-12).div_exact(&Integer::new(4)), Integer::new(-3));
    }

    #[test]
    fn test_scalar_and_pow() {
        let a = Integer::new(7);
        assert_eq!(a.mul_by_scalar(-5), Integer::new(-35));
        assert_eq!(a.mul_by_scalar(0), Integer::new(0));
        assert_eq!(Ring::pow(&a, 3), Integer::new(343));
    }
}

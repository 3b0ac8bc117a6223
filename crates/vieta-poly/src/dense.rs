//! Dense univariate polynomials.
//!
//! The census works with monic integer polynomials of degree at most
//! nine, so multiplication is always schoolbook.

use num_traits::Zero;
use std::fmt;

use vieta_integers::{Integer, Rational};
use vieta_rings::traits::Ring;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order. The zero
/// polynomial is stored as a single zero coefficient.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from ascending coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(R::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }

        Self { coeffs }
    }

    /// Creates a polynomial from coefficients in descending degree order.
    #[must_use]
    pub fn from_descending(mut coeffs: Vec<R>) -> Self {
        coeffs.reverse();
        Self::new(coeffs)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns true if the leading coefficient is 1.
    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_one()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i (zero past the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns the coefficients in ascending order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let result = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_scalar(i as i64))
            .collect();

        Self::new(result)
    }

    /// Multiplies by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![R::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self::new(coeffs)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Maps every coefficient into another ring.
    #[must_use]
    pub fn map<S: Ring, F: Fn(&R) -> S>(&self, f: F) -> DensePoly<S> {
        DensePoly::new(self.coeffs.iter().map(f).collect())
    }
}

impl DensePoly<Integer> {
    /// Builds an integer polynomial from ascending small coefficients.
    #[must_use]
    pub fn from_i64s(coeffs: &[i64]) -> Self {
        Self::new(coeffs.iter().copied().map(Integer::new).collect())
    }

    /// The same polynomial over Q.
    #[must_use]
    pub fn to_rational(&self) -> DensePoly<Rational> {
        self.map(|c| Rational::from(c))
    }

    /// Sum of absolute values of the coefficients.
    #[must_use]
    pub fn l1_norm(&self) -> Integer {
        self.coeffs.iter().map(Integer::abs).sum()
    }
}

impl DensePoly<Rational> {
    /// Clears denominators and content: the primitive integer polynomial
    /// with positive leading coefficient proportional to `self`.
    #[must_use]
    pub fn to_primitive_integer(&self) -> DensePoly<Integer> {
        if self.is_zero() {
            return DensePoly::zero();
        }
        let content = self
            .coeffs
            .iter()
            .fold(Rational::zero(), |acc, c| acc.gcd(c));
        let content = if self.leading_coeff().is_negative() {
            -content
        } else {
            content
        };
        let inv = content.recip();
        // Every coefficient is an integer multiple of the content.
        DensePoly::new(
            self.coeffs
                .iter()
                .map(|c| (c * &inv).numerator())
                .collect(),
        )
    }
}

/// Coefficients that carry a sign, for printing.
pub trait SignedCoefficient: Ring + fmt::Display {
    /// Returns true if the coefficient is negative.
    fn is_negative_coeff(&self) -> bool;

    /// The absolute value.
    #[must_use]
    fn magnitude(&self) -> Self;
}

impl SignedCoefficient for Integer {
    fn is_negative_coeff(&self) -> bool {
        self.is_negative()
    }

    fn magnitude(&self) -> Self {
        self.abs()
    }
}

impl SignedCoefficient for Rational {
    fn is_negative_coeff(&self) -> bool {
        self.is_negative()
    }

    fn magnitude(&self) -> Self {
        self.abs()
    }
}

/// Prints in descending order in the `x^3 + 7*x^2 - 2` style.
impl<R: SignedCoefficient> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let negative = c.is_negative_coeff();
            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            let magnitude = c.magnitude();
            let unit = magnitude.is_one();
            match (i, unit) {
                (0, _) => write!(f, "{magnitude}")?,
                (1, true) => write!(f, "x")?,
                (1, false) => write!(f, "{magnitude}*x")?,
                (_, true) => write!(f, "x^{i}")?,
                (_, false) => write!(f, "{magnitude}*x^{i}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i64]) -> DensePoly<Integer> {
        DensePoly::from_i64s(coeffs)
    }

    #[test]
    fn test_basic_ops() {
        let p = poly(&[1, 2]); // 1 + 2x
        let q = poly(&[3, 4]); // 3 + 4x

        let sum = p.add(&q);
        assert_eq!(sum.coeff(0), Integer::new(4));
        assert_eq!(sum.coeff(1), Integer::new(6));
        assert!(p.sub(&p).is_zero());
    }

    #[test]
    fn test_mul() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        let prod = poly(&[1, 2]).mul(&poly(&[3, 4]));
        assert_eq!(prod, poly(&[3, 10, 8]));
        assert_eq!(poly(&[1, 1]).pow(3), poly(&[1, 3, 3, 1]));
    }

    #[test]
    fn test_eval_and_derivative() {
        // p(x) = 1 + 2x + 3x^2
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.eval(&Integer::new(2)), Integer::new(17));
        assert_eq!(p.derivative(), poly(&[2, 6]));
    }

    #[test]
    fn test_display() {
        assert_eq!(poly(&[-2, 0, 0, 1]).to_string(), "x^3 - 2");
        assert_eq!(poly(&[1, -1, 7, 1]).to_string(), "x^3 + 7*x^2 - x + 1");
        assert_eq!(poly(&[0, -3]).to_string(), "-3*x");
        assert_eq!(DensePoly::<Integer>::zero().to_string(), "0");
    }

    #[test]
    fn test_primitive_integer() {
        let p = DensePoly::new(vec![
            Rational::from_i64(-1, 2),
            Rational::from_i64(3, 4),
            Rational::from_i64(-1, 4),
        ]);
        // -x^2/4 + 3x/4 - 1/2 ~ x^2 - 3x + 2
        assert_eq!(p.to_primitive_integer(), poly(&[2, -3, 1]));
    }
}

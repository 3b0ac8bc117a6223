//! Numeric substitution of concrete polynomials into reduced terms.

use num_traits::Zero;
use vieta_integers::{Integer, Rational};
use vieta_poly::{DensePoly, Poly, Symbol};

use crate::error::ResolventError;

/// Values of the Vieta coefficient symbols for one monic polynomial.
///
/// For `x^n + c_1 x^{n-1} + … + c_n`, symbol `coeff_k` takes the value
/// `c_k` (so `a = 1`, `b` is the coefficient of `x^{n-1}`, and so on);
/// together with `e_k → (-1)^k coeff_k` this is Vieta's formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoefficientAssignment {
    values: Vec<Rational>,
}

impl CoefficientAssignment {
    /// Reads the coefficients of a polynomial, highest degree first.
    #[must_use]
    pub fn from_poly(f: &DensePoly<Integer>) -> Self {
        let values = f.coeffs().iter().rev().map(|c| Rational::from(c)).collect();
        Self { values }
    }

    /// Assigns `coeff_k = values[k]`.
    #[must_use]
    pub fn from_values(values: Vec<Rational>) -> Self {
        Self { values }
    }

    /// Value of `coeff_k`, if assigned.
    #[must_use]
    pub fn get(&self, k: usize) -> Option<&Rational> {
        self.values.get(k)
    }

    /// Evaluates an expression in the coefficient symbols.
    ///
    /// # Errors
    ///
    /// Returns [`ResolventError::UnresolvedSymbol`] naming the first symbol
    /// without a value.
    pub fn evaluate(&self, expr: &Poly) -> Result<Rational, ResolventError> {
        if let Some(missing) = expr.symbols().into_iter().find(|s| self.value(*s).is_none()) {
            return Err(ResolventError::UnresolvedSymbol(missing.to_string()));
        }
        expr.evaluate(|s| self.value(s))
            .ok_or_else(|| ResolventError::UnresolvedSymbol(expr.to_string()))
    }

    /// Evaluates every term.
    ///
    /// # Errors
    ///
    /// Fails like [`CoefficientAssignment::evaluate`].
    pub fn evaluate_all(&self, terms: &[Poly]) -> Result<Vec<Rational>, ResolventError> {
        terms.iter().map(|t| self.evaluate(t)).collect()
    }

    fn value(&self, s: Symbol) -> Option<Rational> {
        match s {
            Symbol::Coeff(k) => self.values.get(usize::from(k)).cloned(),
            _ => None,
        }
    }
}

/// `Σ terms[i] · x^(k-1-i)` for `k` terms.
#[must_use]
pub fn resolvent_polynomial(terms: &[Rational]) -> DensePoly<Rational> {
    DensePoly::from_descending(terms.to_vec())
}

/// Gcd of the nonzero terms; `None` when every term is zero.
#[must_use]
pub fn terms_gcd(terms: &[Rational]) -> Option<Rational> {
    terms
        .iter()
        .filter(|t| !t.is_zero())
        .fold(None, |acc: Option<Rational>, t| {
            Some(match acc {
                None => t.abs(),
                Some(g) => g.gcd(t),
            })
        })
}

/// Number of terms equal to zero.
#[must_use]
pub fn zero_terms(terms: &[Rational]) -> usize {
    terms.iter().filter(|t| t.is_zero()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Rational> {
        values.iter().map(|&v| Rational::from(v)).collect()
    }

    #[test]
    fn test_assignment_from_poly() {
        // x^3 + 7x^2 - 2: a = 1, b = 7, c = 0, d = -2
        let f = DensePoly::from_i64s(&[-2, 0, 7, 1]);
        let assignment = CoefficientAssignment::from_poly(&f);
        assert_eq!(assignment.get(1), Some(&Rational::from(7)));
        assert_eq!(assignment.get(3), Some(&Rational::from(-2)));
        assert_eq!(assignment.get(4), None);

        let b_squared = Poly::var(Symbol::Coeff(1)).pow(2);
        assert_eq!(assignment.evaluate(&b_squared), Ok(Rational::from(49)));
    }

    #[test]
    fn test_unresolved() {
        let assignment = CoefficientAssignment::from_values(ints(&[1, 2]));
        let expr = &Poly::var(Symbol::Coeff(1)) + &Poly::var(Symbol::Coeff(3));
        assert_eq!(
            assignment.evaluate(&expr),
            Err(ResolventError::UnresolvedSymbol("d".into()))
        );
        assert!(assignment.evaluate(&Poly::var(Symbol::E(1))).is_err());
    }

    #[test]
    fn test_gcd_and_zeros() {
        assert_eq!(terms_gcd(&ints(&[-495, 450, 0, -45])), Some(Rational::from(45)));
        assert_eq!(terms_gcd(&ints(&[0, 0])), None);
        assert_eq!(
            terms_gcd(&[Rational::from_i64(1, 2), Rational::from_i64(3, 4)]),
            Some(Rational::from_i64(1, 4))
        );
        assert_eq!(zero_terms(&ints(&[0, 3, 0])), 2);
    }

    #[test]
    fn test_reconstruction() {
        let p = resolvent_polynomial(&ints(&[2, -3, 5]));
        assert_eq!(p.coeffs(), &ints(&[5, -3, 2])[..]);
    }
}

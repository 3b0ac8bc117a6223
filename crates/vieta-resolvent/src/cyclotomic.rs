//! Exact evaluation at roots of unity.
//!
//! Substituting `x_k → ζ^k` with `ζ = exp(2πi/n)` lands in Q(ζ). Values
//! are kept exactly as polynomials in ζ reduced modulo the cyclotomic
//! polynomial Φ_n, which makes the representation canonical; the
//! floating-point approximation is only for display.

use std::f64::consts::TAU;
use std::fmt;

use num_traits::Zero;
use vieta_integers::Rational;
use vieta_poly::algorithms::poly_div_rem;
use vieta_poly::{DensePoly, Poly, Symbol};

use crate::error::ResolventError;

/// An element of the cyclotomic field Q(ζ_n).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CyclotomicValue {
    order: usize,
    /// Coefficients of `1, ζ, ζ^2, …`, reduced modulo Φ_n.
    coeffs: DensePoly<Rational>,
}

impl CyclotomicValue {
    /// The element `Σ coeffs[i] ζ^i` of Q(ζ_order).
    ///
    /// # Panics
    ///
    /// Panics if `order` is zero.
    #[must_use]
    pub fn new(order: usize, coeffs: DensePoly<Rational>) -> Self {
        assert!(order > 0, "roots of unity of order zero");
        let (_, coeffs) = poly_div_rem(&coeffs, &cyclotomic_polynomial(order));
        Self { order, coeffs }
    }

    /// The order n of ζ.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Canonical coefficients in the power basis of ζ.
    #[must_use]
    pub fn coeffs(&self) -> &DensePoly<Rational> {
        &self.coeffs
    }

    /// The value as a rational number, if it is one.
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        (self.coeffs.degree() == 0).then(|| self.coeffs.coeff(0))
    }

    /// Floating-point approximation `(re, im)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn approx(&self) -> (f64, f64) {
        let n = self.order as f64;
        self.coeffs
            .coeffs()
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(re, im), (i, c)| {
                let angle = TAU * i as f64 / n;
                let c = c.to_f64();
                (re + c * angle.cos(), im + c * angle.sin())
            })
    }
}

impl fmt::Display for CyclotomicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(r) = self.to_rational() {
            return write!(f, "{r}");
        }
        let (re, im) = self.approx();
        let exact = self.coeffs.to_string().replace('x', "ζ");
        let sign = if im < 0.0 { '-' } else { '+' };
        write!(f, "{exact} ≈ {re:.6} {sign} {:.6}i", im.abs())
    }
}

/// The n-th cyclotomic polynomial, as `(x^n - 1) / Π_{d | n, d < n} Φ_d`.
#[must_use]
pub fn cyclotomic_polynomial(n: usize) -> DensePoly<Rational> {
    let mut phi = DensePoly::monomial(Rational::from(1), n).sub(&DensePoly::one());
    for d in (1..n).filter(|d| n % d == 0) {
        phi = poly_div_rem(&phi, &cyclotomic_polynomial(d)).0;
    }
    phi
}

/// The substitution `x_k → ζ_deg^k` as exact values, for `k` in `0..deg`.
#[must_use]
pub fn root_unity(deg: usize) -> Vec<CyclotomicValue> {
    (0..deg)
        .map(|k| CyclotomicValue::new(deg, DensePoly::monomial(Rational::from(1), k)))
        .collect()
}

/// Evaluates `expr` at `x_k = ζ_deg^k` for the root variables `x_0..x_{deg-1}`.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeTooSmall`] for `deg = 0` and
/// [`ResolventError::UnresolvedSymbol`] if `expr` mentions any symbol
/// other than those roots.
pub fn evaluate_at_roots_of_unity(
    expr: &Poly,
    deg: usize,
) -> Result<CyclotomicValue, ResolventError> {
    if deg == 0 {
        return Err(ResolventError::DegreeTooSmall(0));
    }

    let mut acc = vec![Rational::zero(); deg];
    for (m, c) in expr.terms() {
        let mut exponent = 0usize;
        for (s, e) in m.factors() {
            match s {
                Symbol::Root(k) if usize::from(k) < deg => {
                    exponent += usize::from(k) * e as usize;
                }
                other => return Err(ResolventError::UnresolvedSymbol(other.to_string())),
            }
        }
        let slot = &mut acc[exponent % deg];
        *slot = &*slot + c;
    }

    Ok(CyclotomicValue::new(deg, DensePoly::new(acc)))
}

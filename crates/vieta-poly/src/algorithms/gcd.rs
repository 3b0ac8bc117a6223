//! Polynomial GCD algorithms.
//!
//! Univariate polynomials over a field use the Euclidean algorithm.
//! Multivariate polynomials over Q use a recursive primitive remainder
//! sequence: the polynomial is viewed in its smallest variable with
//! coefficients in the remaining ones, contents are split off
//! recursively and the primitive parts are reduced by pseudo-division.

use num_traits::One;
use vieta_integers::Rational;
use vieta_rings::traits::{EuclideanDomain, Field};

use crate::dense::DensePoly;
use crate::monomial::Monomial;
use crate::sparse::Poly;
use crate::symbol::Symbol;

/// Computes the monic GCD of two polynomials over a field.
#[must_use]
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q);
        p = q;
        q = r;
    }

    make_monic(&p)
}

/// Divides polynomial a by b, returning (quotient, remainder).
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn poly_div_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> (DensePoly<F>, DensePoly<F>) {
    assert!(!b.is_zero(), "division by zero polynomial");

    if a.degree() < b.degree() {
        return (DensePoly::zero(), a.clone());
    }

    let Some(b_lead_inv) = b.leading_coeff().inv() else {
        unreachable!("non-zero field element without inverse");
    };
    let db = b.degree();
    let mut quotient = vec![F::zero(); a.degree() - db + 1];
    let mut remainder = a.coeffs().to_vec();

    for top in (db..remainder.len()).rev() {
        let lead = remainder[top].clone();
        if lead.is_zero() {
            continue;
        }
        let coeff = lead * b_lead_inv.clone();
        let shift = top - db;

        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - coeff.clone() * bc.clone();
        }
        quotient[shift] = coeff;
    }

    remainder.truncate(db.max(1));
    (DensePoly::new(quotient), DensePoly::new(remainder))
}

/// Makes a polynomial monic (leading coefficient = 1).
#[must_use]
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    match p.leading_coeff().inv() {
        Some(lead_inv) if !p.is_zero() => p.scale(&lead_inv),
        _ => p.clone(),
    }
}

/// Computes the content of a polynomial (GCD of all coefficients).
#[must_use]
pub fn content<R: EuclideanDomain>(p: &DensePoly<R>) -> R {
    p.coeffs()
        .iter()
        .cloned()
        .reduce(|a, b| a.gcd(&b))
        .unwrap_or_else(R::zero)
}

/// Computes the primitive part of a polynomial (divided by content).
#[must_use]
pub fn primitive_part<R: EuclideanDomain>(p: &DensePoly<R>) -> DensePoly<R> {
    let c = content(p);
    if c.is_zero() || c.is_one() {
        return p.clone();
    }

    DensePoly::new(p.coeffs().iter().map(|x| x.div_exact(&c)).collect())
}

/// Multivariate GCD over Q, normalised by [`Poly::primitive_part`].
///
/// `gcd(0, 0)` is zero; otherwise the result has integer coefficients
/// with gcd 1 and a positive leading coefficient.
#[must_use]
pub fn gcd(a: &Poly, b: &Poly) -> Poly {
    if a.is_zero() {
        return b.primitive_part();
    }
    if b.is_zero() {
        return a.primitive_part();
    }
    if a.is_constant() || b.is_constant() {
        return Poly::one();
    }

    let common = a.monomial_content().gcd(&b.monomial_content());
    if !common.is_one() {
        let a = strip_monomial(a, &common);
        let b = strip_monomial(b, &common);
        return gcd(&a, &b).mul_term(&common, &Rational::one());
    }

    let symbols = a.symbols();
    let Some(&v) = symbols.union(&b.symbols()).next() else {
        return Poly::one();
    };

    match (a.contains(v), b.contains(v)) {
        (true, true) => {}
        (true, false) => return gcd(&content_in(a, v), b),
        (false, _) => return gcd(a, &content_in(b, v)),
    }

    let ca = content_in(a, v);
    let cb = content_in(b, v);
    let c = gcd(&ca, &cb);

    let pa = exact_quotient(a, &ca);
    let pb = exact_quotient(b, &cb);
    let g = primitive_gcd(pa, pb, v);

    (&c * &g).primitive_part()
}

/// Content of `p` viewed as a polynomial in `v`: the GCD of its
/// coefficients, which are free of `v`.
#[must_use]
pub fn content_in(p: &Poly, v: Symbol) -> Poly {
    let mut acc = Poly::zero();
    for coeff in p.coefficients_in(v).values() {
        acc = gcd(&acc, coeff);
        if acc.is_constant() {
            break;
        }
    }
    acc
}

/// `p` divided by its content in `v`.
#[must_use]
pub fn primitive_part_in(p: &Poly, v: Symbol) -> Poly {
    if p.is_zero() {
        return Poly::zero();
    }
    exact_quotient(p, &content_in(p, v))
}

/// Pseudo-remainder of `a` by `b` in `v`, up to a rational constant.
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn pseudo_remainder(a: &Poly, b: &Poly, v: Symbol) -> Poly {
    let db = b.degree_in(v);
    let lb = b.leading_coeff_in(v);
    let mut r = a.clone();

    while !r.is_zero() && r.contains(v) && r.degree_in(v) >= db {
        let dr = r.degree_in(v);
        let lr = r.leading_coeff_in(v);
        let shifted = lr.mul_term(&Monomial::var(v, dr - db), &Rational::one());
        r = (&r * &lb) - &(&shifted * b);
        r = r.primitive_part();
    }

    r
}

/// GCD of two polynomials that are primitive in `v`.
fn primitive_gcd(a: Poly, b: Poly, v: Symbol) -> Poly {
    let (mut r0, mut r1) = if a.degree_in(v) >= b.degree_in(v) {
        (a, b)
    } else {
        (b, a)
    };

    loop {
        let r = pseudo_remainder(&r0, &r1, v);
        if r.is_zero() {
            return primitive_part_in(&r1, v);
        }
        if !r.contains(v) {
            return Poly::one();
        }
        r0 = r1;
        r1 = primitive_part_in(&r, v);
    }
}

fn strip_monomial(p: &Poly, m: &Monomial) -> Poly {
    let mut out = Poly::zero();
    for (n, c) in p.terms() {
        if let Some(q) = n.div(m) {
            out.add_term(q, c.clone());
        }
    }
    out
}

fn exact_quotient(a: &Poly, d: &Poly) -> Poly {
    let (q, r) = a.div_rem(d);
    debug_assert!(r.is_zero(), "inexact division in gcd");
    q
}

impl Poly {
    /// Multivariate GCD, see [`gcd`].
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        gcd(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64) -> Rational {
        Rational::from(n)
    }

    fn poly(coeffs: &[i64]) -> DensePoly<Rational> {
        DensePoly::new(coeffs.iter().map(|&n| q(n)).collect())
    }

    fn e(k: u8) -> Poly {
        Poly::var(Symbol::E(k))
    }

    #[test]
    fn test_poly_div_rem() {
        // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
        let (quot, rem) = poly_div_rem(&poly(&[1, 2, 1]), &poly(&[1, 1]));
        assert_eq!(quot, poly(&[1, 1]));
        assert!(rem.is_zero());

        // (x^3 - 2) / (x - 1) = x^2 + x + 1, remainder -1
        let (quot, rem) = poly_div_rem(&poly(&[-2, 0, 0, 1]), &poly(&[-1, 1]));
        assert_eq!(quot, poly(&[1, 1, 1]));
        assert_eq!(rem, poly(&[-1]));
    }

    #[test]
    fn test_poly_gcd() {
        // gcd(x^2 - 1, x^2 - 2x + 1) = x - 1
        let g = poly_gcd(&poly(&[-1, 0, 1]), &poly(&[1, -2, 1]));
        assert_eq!(g, poly(&[-1, 1]));
    }

    #[test]
    fn test_integer_content() {
        use vieta_integers::Integer;
        let p = DensePoly::from_i64s(&[6, -4, 2]);
        assert_eq!(content(&p), Integer::new(2));
        assert_eq!(primitive_part(&p), DensePoly::from_i64s(&[3, -2, 1]));

        // leading zeros in the low coefficients
        let p = DensePoly::from_i64s(&[0, 0, -10, 5]);
        assert_eq!(content(&p), Integer::new(5));
        assert_eq!(primitive_part(&p), DensePoly::from_i64s(&[0, 0, -2, 1]));
    }

    #[test]
    fn test_multivariate_gcd() {
        // gcd((e1 + e2)(e1 - e3), (e1 + e2)(e2 + 1)) = e1 + e2
        let common = &e(1) + &e(2);
        let a = &common * &(&e(1) - &e(3));
        let b = &common * &(&e(2) + &Poly::one());
        assert_eq!(gcd(&a, &b), common);
    }

    #[test]
    fn test_gcd_with_monomial_content() {
        // gcd(2 e1^2 e2, 4 e1 e2^3) = e1 e2
        let a = (&e(1).pow(2) * &e(2)).scale(&q(2));
        let b = (&e(1) * &e(2).pow(3)).scale(&q(4));
        assert_eq!(gcd(&a, &b), &e(1) * &e(2));
    }

    #[test]
    fn test_coprime() {
        let a = &e(1).pow(2) - &e(2).scale(&q(3));
        let b = &e(1) + &e(3);
        assert_eq!(gcd(&a, &b), Poly::one());
        assert_eq!(gcd(&a, &Poly::zero()), a);
    }
}

//! Zassenhaus factorization over Z.
//!
//! For each squarefree part: pick a small prime p that keeps the
//! polynomial squarefree and its degree intact, factor modulo p,
//! Hensel-lift the modular factors past the Mignotte bound and recombine
//! subsets of lifted factors into true integer factors by trial division.

use std::fmt;

use rayon::prelude::*;
use tracing::debug;

use num_traits::Zero;
use vieta_integers::{primes_from, Integer, PrimeField, Rational};
use vieta_poly::algorithms::{poly_div_rem, primitive_part};
use vieta_poly::DensePoly;

use crate::cantor_zassenhaus::{cantor_zassenhaus_factor, factor_degrees};
use crate::hensel::{hensel_lift, reduce};
use crate::modpoly::ModPoly;
use crate::squarefree::squarefree_factorization;

/// Number of admissible primes compared when choosing the lifting prime.
const PRIME_CANDIDATES: usize = 5;

/// An irreducible factor with its multiplicity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerFactor {
    /// Primitive irreducible factor with positive leading coefficient.
    pub factor: DensePoly<Integer>,
    /// Multiplicity.
    pub multiplicity: u32,
}

/// Complete factorization `content · Π factor^multiplicity` over Z.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerFactorization {
    /// Signed integer content.
    pub content: Integer,
    /// Irreducible factors sorted by degree, then coefficients.
    pub factors: Vec<IntegerFactor>,
    /// Statistics about the computation.
    pub stats: FactorStats,
}

/// Statistics from a factorization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactorStats {
    /// Largest prime used for modular factorization.
    pub prime: u64,
    /// Largest Hensel lifting exponent.
    pub precision: u32,
    /// Total number of modular factors.
    pub modular_factors: usize,
}

impl IntegerFactorization {
    /// Multiplies the factorization back out.
    #[must_use]
    pub fn expand(&self) -> DensePoly<Integer> {
        self.factors
            .iter()
            .fold(DensePoly::constant(self.content.clone()), |acc, f| {
                acc.mul(&f.factor.pow(f.multiplicity))
            })
    }

    /// Total number of irreducible factors counted with multiplicity.
    #[must_use]
    pub fn count(&self) -> usize {
        self.factors.iter().map(|f| f.multiplicity as usize).sum()
    }
}

impl fmt::Display for IntegerFactorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "{}", self.content);
        }
        if self.content == Integer::new(-1) {
            write!(f, "-")?;
        } else if self.content != Integer::new(1) {
            write!(f, "{} * ", self.content)?;
        }
        for (i, factor) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            write!(f, "({})", factor.factor)?;
            if factor.multiplicity > 1 {
                write!(f, "^{}", factor.multiplicity)?;
            }
        }
        Ok(())
    }
}

/// Factors an integer polynomial into irreducibles over Z.
#[must_use]
pub fn factor(f: &DensePoly<Integer>) -> IntegerFactorization {
    let sf = squarefree_factorization(f);
    let mut stats = FactorStats::default();
    let mut factors = Vec::new();

    for part in &sf.factors {
        let (irreducibles, part_stats) = factor_squarefree(&part.factor);
        stats.prime = stats.prime.max(part_stats.prime);
        stats.precision = stats.precision.max(part_stats.precision);
        stats.modular_factors += part_stats.modular_factors;

        factors.extend(irreducibles.into_iter().map(|factor| IntegerFactor {
            factor,
            multiplicity: part.multiplicity,
        }));
    }

    factors.sort_by(|a, b| {
        a.factor
            .degree()
            .cmp(&b.factor.degree())
            .then_with(|| a.factor.coeffs().cmp(b.factor.coeffs()))
    });

    IntegerFactorization {
        content: sf.content,
        factors,
        stats,
    }
}

/// Tests irreducibility over Q.
///
/// Constants are not irreducible; the integer content is ignored.
#[must_use]
pub fn is_irreducible(f: &DensePoly<Integer>) -> bool {
    if f.degree() == 0 {
        return false;
    }
    if f.degree() == 1 {
        return true;
    }

    let sf = squarefree_factorization(f);
    match sf.factors.as_slice() {
        [only] if only.multiplicity == 1 => match choose_prime(&only.factor) {
            Some((_, 1)) => true,
            _ => factor_squarefree(&only.factor).0.len() == 1,
        },
        _ => false,
    }
}

/// Factors many polynomials in parallel.
#[must_use]
pub fn factor_batch(polys: &[DensePoly<Integer>]) -> Vec<IntegerFactorization> {
    polys.par_iter().map(factor).collect()
}

/// Factors a primitive squarefree polynomial with positive leading coefficient.
fn factor_squarefree(f: &DensePoly<Integer>) -> (Vec<DensePoly<Integer>>, FactorStats) {
    let n = f.degree();
    if n <= 1 {
        return (vec![f.clone()], FactorStats::default());
    }

    let Some((p, _)) = choose_prime(f) else {
        // Every candidate prime was rejected; cannot happen for squarefree f.
        return (vec![f.clone()], FactorStats::default());
    };
    let field = PrimeField::new(p);

    let lc = f.leading_coeff().clone();
    let f_mod = ModPoly::from_integer_poly(f, field);
    let modular = cantor_zassenhaus_factor(&f_mod).factors;

    if modular.len() == 1 {
        debug!(prime = p, degree = n, "irreducible modulo p");
        return (
            vec![f.clone()],
            FactorStats {
                prime: p,
                precision: 1,
                modular_factors: 1,
            },
        );
    }

    let precision = lifting_precision(p, f);
    let modulus = Integer::from(p).pow(precision);
    let monic = make_monic_mod(f, &modulus);
    let lifted = hensel_lift(&monic, &modular, precision);

    debug!(
        prime = p,
        precision,
        modular_factors = modular.len(),
        steps = lifted.steps,
        "lifted modular factorization"
    );

    let factors = combine_factors(f, &lc, lifted.factors, &modulus);
    (
        factors,
        FactorStats {
            prime: p,
            precision,
            modular_factors: modular.len(),
        },
    )
}

/// Picks the admissible prime with the fewest modular factors.
///
/// Admissible: odd, not dividing the leading coefficient, and keeping
/// `f` squarefree. Returns `(p, number of modular factors)`.
fn choose_prime(f: &DensePoly<Integer>) -> Option<(u64, usize)> {
    let lc = f.leading_coeff();
    let mut best: Option<(u64, usize)> = None;
    let mut seen = 0;

    for p in primes_from(3).filter(|&p| lc.residue(p) != 0).take(64) {
        let f_mod = ModPoly::from_integer_poly(f, PrimeField::new(p));
        if f_mod.gcd(&f_mod.derivative()).degree() > 0 {
            continue;
        }

        let count = factor_degrees(&f_mod).len();
        if count == 1 {
            return Some((p, 1));
        }
        if best.map_or(true, |(_, c)| count < c) {
            best = Some((p, count));
        }
        seen += 1;
        if seen == PRIME_CANDIDATES {
            break;
        }
    }

    best
}

/// Smallest k with p^k > 2 · |lc| · 2^n · ‖f‖₁.
fn lifting_precision(p: u64, f: &DensePoly<Integer>) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    let n = f.degree() as u32;
    let bound = Integer::new(2) * f.leading_coeff().abs() * Integer::new(2).pow(n) * f.l1_norm();

    let p = Integer::from(p);
    let mut k = 1;
    let mut pk = p.clone();
    while pk <= bound {
        pk = &pk * &p;
        k += 1;
    }
    k
}

/// `lc^{-1} · f mod m`, a monic polynomial modulo m.
fn make_monic_mod(f: &DensePoly<Integer>, m: &Integer) -> DensePoly<Integer> {
    let inv = mod_inverse(f.leading_coeff(), m);
    reduce(&f.scale(&inv), m)
}

/// Inverse of `a` modulo `m` (extended Euclid); `a` must be a unit.
fn mod_inverse(a: &Integer, m: &Integer) -> Integer {
    let (mut r0, mut r1) = (a.rem_euclid(m), m.clone());
    let (mut s0, mut s1) = (Integer::new(1), Integer::new(0));
    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r = &r0 - &(&q * &r1);
        let s = &s0 - &(&q * &s1);
        r0 = std::mem::replace(&mut r1, r);
        s0 = std::mem::replace(&mut s1, s);
    }
    s0.rem_euclid(m)
}

/// Recombines lifted factors into integer factors.
///
/// Subsets are tried by increasing size; a subset whose scaled product
/// divides the remaining polynomial is a true factor and its members
/// are removed.
fn combine_factors(
    f: &DensePoly<Integer>,
    lc: &Integer,
    lifted: Vec<DensePoly<Integer>>,
    modulus: &Integer,
) -> Vec<DensePoly<Integer>> {
    let mut remaining = lifted;
    let mut current = f.clone();
    let mut current_lc = lc.clone();
    let mut found = Vec::new();
    let mut size = 1;

    while 2 * size <= remaining.len() {
        let mut hit = None;
        for subset in subsets(remaining.len(), size) {
            let product = subset
                .iter()
                .fold(DensePoly::constant(current_lc.clone()), |acc, &i| {
                    reduce(&acc.mul(&remaining[i]), modulus)
                });
            let candidate = normalize(&primitive_part(&symmetric(&product, modulus)));
            if let Some(quotient) = divide_exact(&current, &candidate) {
                hit = Some((subset, candidate, quotient));
                break;
            }
        }

        match hit {
            Some((subset, candidate, quotient)) => {
                found.push(candidate);
                current = quotient;
                current_lc = current.leading_coeff().clone();
                remaining = remaining
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| !subset.contains(i))
                    .map(|(_, g)| g)
                    .collect();
            }
            None => size += 1,
        }
    }

    if current.degree() > 0 {
        found.push(current);
    }
    found
}

/// Coefficients lifted to the symmetric range `(-m/2, m/2]`.
fn symmetric(a: &DensePoly<Integer>, m: &Integer) -> DensePoly<Integer> {
    DensePoly::new(a.coeffs().iter().map(|c| c.symmetric_residue(m)).collect())
}

/// Exact quotient over Z, if `b` divides `a`.
fn divide_exact(a: &DensePoly<Integer>, b: &DensePoly<Integer>) -> Option<DensePoly<Integer>> {
    if b.degree() == 0 || b.degree() > a.degree() {
        return None;
    }
    let (q, r) = poly_div_rem(&a.to_rational(), &b.to_rational());
    if !r.is_zero() || !q.coeffs().iter().all(Rational::is_integer) {
        return None;
    }
    Some(q.map(Rational::numerator))
}

/// Flips the sign so the leading coefficient is positive.
fn normalize(a: &DensePoly<Integer>) -> DensePoly<Integer> {
    if a.leading_coeff().is_negative() {
        a.neg()
    } else {
        a.clone()
    }
}

/// All `size`-element index subsets of `0..n` in lexicographic order.
pub(crate) fn subsets(n: usize, size: usize) -> Vec<Vec<usize>> {
    fn extend(
        start: usize,
        n: usize,
        size: usize,
        prefix: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if prefix.len() == size {
            out.push(prefix.clone());
            return;
        }
        for i in start..n {
            prefix.push(i);
            extend(i + 1, n, size, prefix, out);
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    extend(0, n, size, &mut Vec::with_capacity(size), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i64]) -> DensePoly<Integer> {
        DensePoly::from_i64s(coeffs)
    }

    #[test]
    fn test_factor_linear() {
        let result = factor(&poly(&[4, 2]));
        assert_eq!(result.content, Integer::new(2));
        assert_eq!(result.factors.len(), 1);
        assert_eq!(result.factors[0].factor, poly(&[2, 1]));
    }

    #[test]
    fn test_factor_two_linears() {
        // x^2 - 1 = (x - 1)(x + 1)
        let result = factor(&poly(&[-1, 0, 1]));
        let factors: Vec<_> = result.factors.iter().map(|f| f.factor.clone()).collect();
        assert_eq!(factors, vec![poly(&[-1, 1]), poly(&[1, 1])]);
    }

    #[test]
    fn test_factor_non_monic() {
        // 6x^2 + x - 2 = (2x - 1)(3x + 2)
        let f = poly(&[-2, 1, 6]);
        let result = factor(&f);
        assert_eq!(result.factors.len(), 2);
        assert_eq!(result.expand(), f);
    }

    #[test]
    fn test_factor_swinnerton_dyer_like() {
        // x^4 + 1 is irreducible over Z but splits modulo every prime
        let f = poly(&[1, 0, 0, 0, 1]);
        let result = factor(&f);
        assert_eq!(result.factors.len(), 1);
        assert!(is_irreducible(&f));
    }

    #[test]
    fn test_factor_with_multiplicity() {
        // (x^2 + 1)^2 (x - 3)
        let f = poly(&[1, 0, 1]).pow(2).mul(&poly(&[-3, 1]));
        let result = factor(&f);
        assert_eq!(result.count(), 3);
        assert_eq!(result.expand(), f);
    }

    #[test]
    fn test_factor_zero_low_coefficients() {
        // x^3 - 5x^2 = x^2 (x - 5)
        let f = poly(&[0, 0, -5, 1]);
        let result = factor(&f);
        assert_eq!(result.count(), 3);
        assert_eq!(result.expand(), f);
        assert!(!is_irreducible(&f));
    }

    #[test]
    fn test_irreducibility() {
        assert!(is_irreducible(&poly(&[-2, 0, 0, 1])));
        assert!(is_irreducible(&poly(&[-1, -1, 0, 0, 0, 1])));
        assert!(!is_irreducible(&poly(&[-1, 0, 0, 1])));
        assert!(!is_irreducible(&poly(&[1, 2, 1])));
        assert!(!is_irreducible(&poly(&[5])));
    }

    #[test]
    fn test_display() {
        assert_eq!(factor(&poly(&[4, 2])).to_string(), "2 * (x + 2)");
        let negated = poly(&[1, 0, 1]).pow(2).scale(&Integer::new(-1));
        assert_eq!(factor(&negated).to_string(), "-(x^2 + 1)^2");
        assert_eq!(factor(&poly(&[6])).to_string(), "6");
    }

    #[test]
    fn test_mod_inverse() {
        let m = Integer::new(125);
        let inv = mod_inverse(&Integer::new(3), &m);
        assert_eq!((inv * Integer::new(3)).rem_euclid(&m), Integer::new(1));
    }

    #[test]
    fn test_subsets() {
        assert_eq!(subsets(4, 2).len(), 6);
        assert_eq!(subsets(3, 1), vec![vec![0], vec![1], vec![2]]);
    }
}

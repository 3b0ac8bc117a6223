//! Cantor-Zassenhaus factorization over F_p for odd p.
//!
//! Distinct-degree factorization splits a squarefree polynomial into
//! products of irreducibles of equal degree; equal-degree factorization
//! then separates those with random splitting polynomials.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::modpoly::ModPoly;

/// Seed of the splitting RNG, fixed so that factor order is reproducible.
const SPLIT_SEED: u64 = 0x5eed_cafe;

/// Result of Cantor-Zassenhaus factorization.
#[derive(Clone, Debug)]
pub struct CantorZassenhausResult {
    /// Monic irreducible factors, by increasing degree.
    pub factors: Vec<ModPoly>,
    /// Number of random splitting attempts made.
    pub attempts: usize,
}

/// Factors a squarefree polynomial over F_p (p odd) into monic irreducibles.
#[must_use]
pub fn cantor_zassenhaus_factor(f: &ModPoly) -> CantorZassenhausResult {
    if f.degree() == 0 {
        return CantorZassenhausResult {
            factors: Vec::new(),
            attempts: 0,
        };
    }

    let mut rng = ChaCha8Rng::seed_from_u64(SPLIT_SEED);
    let mut factors = Vec::new();
    let mut attempts = 0;

    for (degree, poly) in distinct_degree_factor(&f.monic()) {
        let result = equal_degree_factor(&poly, degree, &mut rng);
        attempts += result.attempts;
        factors.extend(result.factors);
    }

    CantorZassenhausResult { factors, attempts }
}

/// Distinct-degree factorization of a monic squarefree polynomial.
///
/// Returns `(d, g_d)` where `g_d` is the product of all irreducible
/// factors of degree `d`; only non-trivial `g_d` are listed.
#[must_use]
pub fn distinct_degree_factor(f: &ModPoly) -> Vec<(usize, ModPoly)> {
    let field = f.field();
    let p = field.modulus();
    let x = ModPoly::x(field);

    let mut result = Vec::new();
    let mut h = f.monic();
    let mut x_pow = x.clone();
    let mut d = 0;

    while h.degree() >= 2 * (d + 1) {
        d += 1;
        x_pow = x_pow.pow_mod(p, &h);

        let g = h.gcd(&x_pow.sub(&x));
        if g.degree() > 0 {
            h = h.div_rem(&g).0;
            x_pow = x_pow.rem(&h);
            result.push((d, g));
        }
    }

    if h.degree() > 0 {
        result.push((h.degree(), h));
    }

    result
}

/// Degrees of the irreducible factors of a squarefree polynomial, sorted.
///
/// For `f` mod an unramified prime this is the cycle type of Frobenius.
#[must_use]
pub fn factor_degrees(f: &ModPoly) -> Vec<usize> {
    let mut degrees = Vec::new();
    for (d, g) in distinct_degree_factor(f) {
        degrees.extend(std::iter::repeat(d).take(g.degree() / d));
    }
    degrees.sort_unstable();
    degrees
}

/// Splits a monic product of distinct irreducibles of degree `d`.
pub fn equal_degree_factor(f: &ModPoly, d: usize, rng: &mut ChaCha8Rng) -> CantorZassenhausResult {
    let mut attempts = 0;
    let mut pending = vec![f.monic()];
    let mut factors = Vec::new();

    while let Some(g) = pending.pop() {
        if g.degree() <= d {
            factors.push(g);
            continue;
        }
        loop {
            attempts += 1;
            if let Some(split) = try_split(&g, d, rng) {
                let other = g.div_rem(&split).0;
                pending.push(split);
                pending.push(other.monic());
                break;
            }
        }
    }

    factors.sort_by(|a, b| a.degree().cmp(&b.degree()).then_with(|| a.coeffs().cmp(b.coeffs())));
    CantorZassenhausResult { factors, attempts }
}

/// One random splitting attempt: gcd(f, a^((p^d - 1)/2) - 1).
///
/// The exponent is applied as `(a · a^p · … · a^(p^(d-1)))^((p-1)/2)`,
/// which keeps every exponent below p.
fn try_split(f: &ModPoly, d: usize, rng: &mut ChaCha8Rng) -> Option<ModPoly> {
    let field = f.field();
    let p = field.modulus();

    let a = ModPoly::random(field, f.degree(), rng);
    if a.degree() == 0 {
        return None;
    }

    let g = f.gcd(&a);
    if g.degree() > 0 && g.degree() < f.degree() {
        return Some(g);
    }

    let mut conjugate = a.clone();
    let mut norm = a;
    for _ in 1..d {
        conjugate = conjugate.pow_mod(p, f);
        norm = norm.mul(&conjugate).rem(f);
    }

    let b = norm.pow_mod((p - 1) / 2, f).sub(&ModPoly::one(field));
    let g = f.gcd(&b);
    (g.degree() > 0 && g.degree() < f.degree()).then_some(g)
}

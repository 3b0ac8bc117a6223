//! Irreducible factorisation of multivariate polynomials over Q.
//!
//! Each squarefree part is split from a single univariate image. A linear
//! change `y ↦ y + c·x` makes the part monic in its main variable `x`, the
//! remaining variables are specialised to a point where the image stays
//! squarefree, and the univariate factors of the image are Hensel-lifted
//! degree by degree in the shifted variables. Monic lifting needs no
//! leading coefficient correction. True factors are products of subsets
//! of the lifted factors and are found by trial division.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use tracing::debug;

use num_traits::{One, Zero};
use vieta_integers::Rational;
use vieta_poly::algorithms::gcd::make_monic;
use vieta_poly::algorithms::{poly_div_rem, poly_gcd};
use vieta_poly::{squarefree_factor, DensePoly, Factorization, Monomial, Poly, PolyFactor};
use vieta_poly::{Substitution, Symbol};

use crate::univariate::{factor, subsets};

/// Seed of the point RNG, fixed so that results are reproducible.
const POINT_SEED: u64 = 0x0b5e_55ed;

/// Admissible evaluation points compared before lifting.
const POINT_CANDIDATES: usize = 4;

/// Random draws before a part is returned unsplit.
const MAX_DRAWS: usize = 256;

/// Factors `p` into irreducibles over Q.
///
/// Factors are primitive with positive leading coefficient; the unit
/// collects the rational constant. The zero polynomial has unit 0.
#[must_use]
pub fn factor_multivariate(p: &Poly) -> Factorization {
    let squarefree = squarefree_factor(p);
    let factors = squarefree
        .factors
        .iter()
        .flat_map(|part| {
            split_squarefree(&part.factor)
                .into_iter()
                .map(move |factor| PolyFactor {
                    multiplicity: part.multiplicity,
                    factor,
                })
        })
        .collect();
    Factorization::from_factors(p, factors)
}

/// Irreducible factors of a squarefree polynomial, each primitive.
///
/// Constants have no factors.
#[must_use]
pub fn split_squarefree(f: &Poly) -> Vec<Poly> {
    if f.is_constant() {
        return Vec::new();
    }
    let f = f.primitive_part();
    if f.total_degree() == 1 {
        return vec![f];
    }

    let symbols: Vec<Symbol> = f.symbols().into_iter().collect();
    match symbols.split_first() {
        Some((&x, [])) => univariate_factors(&f, x),
        Some((&x, others)) => {
            let mut rng = ChaCha8Rng::seed_from_u64(POINT_SEED);
            split_multivariate(&f, x, others, &mut rng)
        }
        None => Vec::new(),
    }
}

/// A univariate image `f(x, a)` with its monic irreducible factors.
struct Image {
    point: Vec<i64>,
    factors: Vec<DensePoly<Rational>>,
}

fn split_multivariate(f: &Poly, x: Symbol, others: &[Symbol], rng: &mut ChaCha8Rng) -> Vec<Poly> {
    let Some(shear) = monic_shear(f, x, others, rng) else {
        return vec![f.clone()];
    };
    let g = f.substitute(&linear_change(x, others, &shear, &[], 1));
    let lc = g.leading_coeff_in(x).constant_value().unwrap_or_else(Rational::one);
    let g = g.scale(&lc.recip());

    let Some(image) = choose_image(&g, x, others, rng) else {
        return vec![f.clone()];
    };
    if image.factors.len() < 2 {
        return vec![f.clone()];
    }

    debug!(
        variables = others.len() + 1,
        degree = f.total_degree(),
        images = image.factors.len(),
        "lifting multivariate factors"
    );

    let h = g.substitute(&linear_change(x, others, &[], &image.point, 1));
    let lifted = lift(&h, x, &image.factors);
    let back = linear_change(x, others, &shear, &image.point, -1);
    recombine(&h, x, lifted)
        .iter()
        .map(|q| q.substitute(&back).primitive_part())
        .collect()
}

/// Shear `c` such that `f(x, y + c·x)` has a constant leading coefficient in `x`.
///
/// The coefficient of `x^d` after the change is the top-degree form of
/// `f` at `(1, c)`.
fn monic_shear(f: &Poly, x: Symbol, others: &[Symbol], rng: &mut ChaCha8Rng) -> Option<Vec<i64>> {
    let d = f.total_degree();
    let mut top = Poly::zero();
    for (m, c) in f.terms() {
        if m.total_degree() == d {
            top.add_term(m.clone(), c.clone());
        }
    }

    (0..MAX_DRAWS)
        .map(|draw| draw_point(others.len(), draw, rng))
        .find(|c| {
            let value = top.evaluate(|s| {
                if s == x {
                    Some(Rational::one())
                } else {
                    others
                        .iter()
                        .position(|&y| y == s)
                        .map(|i| Rational::from(c[i]))
                }
            });
            value.is_some_and(|v| !v.is_zero())
        })
}

/// Picks the evaluation point with the fewest image factors among the
/// first admissible ones.
fn choose_image(g: &Poly, x: Symbol, others: &[Symbol], rng: &mut ChaCha8Rng) -> Option<Image> {
    let mut best: Option<Image> = None;
    let mut admissible = 0;

    for draw in 0..MAX_DRAWS {
        let point = draw_point(others.len(), draw, rng);
        let u = to_dense(&g.substitute(&evaluation(others, &point)), x);
        if poly_gcd(&u, &u.derivative()).degree() > 0 {
            continue;
        }

        let factors = monic_factors(&u);
        admissible += 1;
        if best.as_ref().map_or(true, |b| factors.len() < b.factors.len()) {
            best = Some(Image { point, factors });
        }
        if admissible == POINT_CANDIDATES || best.as_ref().is_some_and(|b| b.factors.len() < 2) {
            break;
        }
    }
    best
}

/// The origin first, then random points in a box that widens with `draw`.
fn draw_point(n: usize, draw: usize, rng: &mut ChaCha8Rng) -> Vec<i64> {
    if draw == 0 {
        return vec![0; n];
    }
    let bound = i64::try_from(1 + draw / 8).unwrap_or(i64::MAX);
    (0..n).map(|_| rng.gen_range(-bound..=bound)).collect()
}

/// `y_i ↦ y_i + sign·(a_i + c_i·x)`; missing entries count as zero.
fn linear_change(x: Symbol, others: &[Symbol], shear: &[i64], point: &[i64], sign: i64) -> Substitution {
    let mut subs = Substitution::default();
    for (i, &y) in others.iter().enumerate() {
        let c = shear.get(i).copied().unwrap_or(0);
        let a = point.get(i).copied().unwrap_or(0);
        if c == 0 && a == 0 {
            continue;
        }
        let offset = &Poly::var(x).scale(&Rational::from(c)) + &Poly::from_i64(a);
        subs.insert(y, &Poly::var(y) + &offset.scale(&Rational::from(sign)));
    }
    subs
}

/// `y_i ↦ a_i`.
fn evaluation(others: &[Symbol], point: &[i64]) -> Substitution {
    others
        .iter()
        .zip(point)
        .map(|(&y, &a)| (y, Poly::from_i64(a)))
        .collect()
}

/// Monic irreducible factors over Q of a squarefree univariate polynomial.
fn monic_factors(u: &DensePoly<Rational>) -> Vec<DensePoly<Rational>> {
    factor(&u.to_primitive_integer())
        .factors
        .iter()
        .flat_map(|pf| {
            let monic = make_monic(&pf.factor.to_rational());
            std::iter::repeat(monic).take(pf.multiplicity as usize)
        })
        .collect()
}

fn univariate_factors(f: &Poly, x: Symbol) -> Vec<Poly> {
    factor(&to_dense(f, x).to_primitive_integer())
        .factors
        .iter()
        .flat_map(|pf| {
            let factor = from_dense(&pf.factor.to_rational(), x);
            std::iter::repeat(factor).take(pf.multiplicity as usize)
        })
        .collect()
}

/// Lifts the monic factors of `h(x, 0)` to factors of `h` modulo
/// `(y)^(D+1)`, where `D` is the degree of `h` in the other variables.
///
/// At step `t` every degree-`t` coefficient `c(x)` of the error is
/// distributed as `Σ σ_i Π_{j≠i} u_j = c` with `deg σ_i < deg u_i`.
fn lift(h: &Poly, x: Symbol, images: &[DensePoly<Rational>]) -> Vec<Poly> {
    let cofactors = cofactor_inverses(images);
    let mut lifted: Vec<Poly> = images.iter().map(|u| from_dense(u, x)).collect();

    for t in 1..=other_degree(h, x) {
        let error = h - &product(lifted.iter());
        if error.is_zero() {
            break;
        }
        for (m, c) in slice(&error, x, t) {
            let c = to_dense(&c, x);
            for ((u, s), target) in images.iter().zip(&cofactors).zip(lifted.iter_mut()) {
                let (_, sigma) = poly_div_rem(&c.mul(s), u);
                *target = &*target + &from_dense(&sigma, x).mul_term(&m, &Rational::one());
            }
        }
    }
    lifted
}

/// `s_i = (Π_{j≠i} u_j)^{-1} mod u_i`, so that `Σ s_i Π_{j≠i} u_j = 1`.
fn cofactor_inverses(images: &[DensePoly<Rational>]) -> Vec<DensePoly<Rational>> {
    images
        .iter()
        .enumerate()
        .map(|(i, u)| {
            let cofactor = images
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(DensePoly::one(), |acc, (_, v)| acc.mul(v));
            inverse_mod(&cofactor, u)
        })
        .collect()
}

/// Inverse of `a` modulo `m` over Q[x], for coprime `a` and `m`.
fn inverse_mod(a: &DensePoly<Rational>, m: &DensePoly<Rational>) -> DensePoly<Rational> {
    let (_, a) = poly_div_rem(a, m);
    let (mut r0, mut r1) = (m.clone(), a);
    let (mut s0, mut s1) = (DensePoly::zero(), DensePoly::one());

    while !r1.is_zero() {
        let (q, r) = poly_div_rem(&r0, &r1);
        let s = s0.sub(&q.mul(&s1));
        r0 = std::mem::replace(&mut r1, r);
        s0 = std::mem::replace(&mut s1, s);
    }
    // r0 is the unit gcd.
    let (_, inverse) = poly_div_rem(&s0.scale(&r0.leading_coeff().recip()), m);
    inverse
}

/// Recombines lifted factors into true factors of `h`.
///
/// Subsets are tried by increasing size; the product of a subset,
/// truncated to the degree of the remaining cofactor, is a true factor
/// exactly when it divides.
fn recombine(h: &Poly, x: Symbol, lifted: Vec<Poly>) -> Vec<Poly> {
    let mut remaining = lifted;
    let mut current = h.clone();
    let mut found = Vec::new();
    let mut size = 1;

    while 2 * size <= remaining.len() {
        let bound = other_degree(&current, x);
        let mut hit = None;
        for subset in subsets(remaining.len(), size) {
            let candidate = truncate(&product(subset.iter().map(|&i| &remaining[i])), x, bound);
            if let Some(quotient) = current.div_exact(&candidate) {
                hit = Some((subset, candidate, quotient));
                break;
            }
        }

        match hit {
            Some((subset, candidate, quotient)) => {
                found.push(candidate);
                current = quotient;
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

    if !current.is_constant() {
        found.push(current);
    }
    found
}

fn product<'a>(factors: impl Iterator<Item = &'a Poly>) -> Poly {
    factors.fold(Poly::one(), |acc, g| &acc * g)
}

/// Total degree of `m` outside `x`.
fn degree_outside(m: &Monomial, x: Symbol) -> u32 {
    m.total_degree() - m.degree_in(x)
}

fn other_degree(p: &Poly, x: Symbol) -> u32 {
    p.terms().map(|(m, _)| degree_outside(m, x)).max().unwrap_or(0)
}

/// Terms of degree at most `bound` outside `x`.
fn truncate(p: &Poly, x: Symbol, bound: u32) -> Poly {
    let mut out = Poly::zero();
    for (m, c) in p.terms() {
        if degree_outside(m, x) <= bound {
            out.add_term(m.clone(), c.clone());
        }
    }
    out
}

/// The degree-`t` part outside `x`, collected by monomial outside `x`.
fn slice(p: &Poly, x: Symbol, t: u32) -> BTreeMap<Monomial, Poly> {
    let mut out: BTreeMap<Monomial, Poly> = BTreeMap::new();
    for (m, c) in p.terms() {
        let (k, rest) = m.split(x);
        if rest.total_degree() == t {
            out.entry(rest)
                .or_default()
                .add_term(Monomial::var(x, k), c.clone());
        }
    }
    out
}

/// Dense form of a polynomial in `x` alone; other symbols are dropped.
fn to_dense(p: &Poly, x: Symbol) -> DensePoly<Rational> {
    let coefficients = p.coefficients_in(x);
    let degree = coefficients.keys().next_back().copied().unwrap_or(0) as usize;
    let mut dense = vec![Rational::zero(); degree + 1];
    for (k, c) in coefficients {
        dense[k as usize] = c.constant_value().unwrap_or_else(Rational::zero);
    }
    DensePoly::new(dense)
}

fn from_dense(u: &DensePoly<Rational>, x: Symbol) -> Poly {
    let mut out = Poly::zero();
    for (k, c) in u.coeffs().iter().enumerate() {
        let k = u32::try_from(k).unwrap_or(u32::MAX);
        out.add_term(Monomial::var(x, k), c.clone());
    }
    out
}

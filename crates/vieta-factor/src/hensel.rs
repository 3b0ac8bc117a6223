//! Hensel lifting for polynomial factorization.
//!
//! Lifts a factorization of a monic polynomial modulo p to one modulo
//! p^k. Lifting is linear (one power of p per step) and multifactor
//! lifts peel off one factor at a time: `F = g_1 · (g_2 ⋯ g_r)`, then the
//! lifted cofactor is split the same way.

use num_traits::Zero;
use vieta_integers::{Integer, PrimeField};
use vieta_poly::DensePoly;

use crate::modpoly::ModPoly;

/// Result of Hensel lifting.
#[derive(Clone, Debug)]
pub struct HenselLiftResult {
    /// The lifted monic factors, coefficients in `[0, modulus)`.
    pub factors: Vec<DensePoly<Integer>>,
    /// The prime used.
    pub prime: u64,
    /// The final modulus (p^k).
    pub modulus: Integer,
    /// Number of lifting steps performed.
    pub steps: usize,
}

/// Lifts `F ≡ Π factors (mod p)` to a factorization modulo p^k.
///
/// `f` must be monic modulo p^k and the modular factors monic, pairwise
/// coprime, with product `f mod p`.
#[must_use]
pub fn hensel_lift(f: &DensePoly<Integer>, factors: &[ModPoly], k: u32) -> HenselLiftResult {
    let Some(first) = factors.first() else {
        return HenselLiftResult {
            factors: Vec::new(),
            prime: 0,
            modulus: Integer::new(1),
            steps: 0,
        };
    };

    let field = first.field();
    let p = field.modulus();
    let modulus = Integer::from(p).pow(k);

    let mut lifted = Vec::with_capacity(factors.len());
    let mut steps = 0;
    let mut cofactor = reduce(f, &modulus);

    for (i, g) in factors.iter().enumerate() {
        if i + 1 == factors.len() {
            lifted.push(cofactor);
            break;
        }

        let h = factors[i + 1..]
            .iter()
            .fold(ModPoly::one(field), |acc, q| acc.mul(q));
        let (lifted_g, lifted_h, n) = hensel_lift_pair(&cofactor, g, &h, k);
        steps += n;
        lifted.push(lifted_g);
        cofactor = lifted_h;
    }

    HenselLiftResult {
        factors: lifted,
        prime: p,
        modulus,
        steps,
    }
}

/// Lifts `F ≡ g·h (mod p)` to `F ≡ G·H (mod p^k)` with G, H monic.
///
/// Each step solves `δg·h + δh·g ≡ e (mod p)` for the error
/// `e = (F - G·H) / p^j` using the Bézout cofactors of g and h.
fn hensel_lift_pair(
    f: &DensePoly<Integer>,
    g: &ModPoly,
    h: &ModPoly,
    k: u32,
) -> (DensePoly<Integer>, DensePoly<Integer>, usize) {
    let field = g.field();
    let p = Integer::from(field.modulus());
    let (_, s, t) = g.ext_gcd(h);

    let mut big_g = g.to_integer_poly();
    let mut big_h = h.to_integer_poly();
    let mut pj = p.clone();
    let mut steps = 0;

    for _ in 1..k {
        let error = f.sub(&big_g.mul(&big_h));
        if error.is_zero() {
            break;
        }
        let e = scaled_residue(&error, &pj, field);

        let delta_g = t.mul(&e).rem(g);
        let delta_h = s.mul(&e).rem(h);

        big_g = big_g.add(&delta_g.to_integer_poly().scale(&pj));
        big_h = big_h.add(&delta_h.to_integer_poly().scale(&pj));
        pj = &pj * &p;
        steps += 1;

        big_g = reduce(&big_g, &pj);
        big_h = reduce(&big_h, &pj);
    }

    (big_g, big_h, steps)
}

/// `(a / m) mod p` for a polynomial divisible by `m`.
fn scaled_residue(a: &DensePoly<Integer>, m: &Integer, field: PrimeField) -> ModPoly {
    let coeffs = a
        .coeffs()
        .iter()
        .map(|c| {
            debug_assert!((c % m).is_zero(), "Hensel error not divisible by p^j");
            field.reduce(&(c / m))
        })
        .collect();
    ModPoly::new(field, coeffs)
}

/// Reduces every coefficient into `[0, m)`.
pub(crate) fn reduce(a: &DensePoly<Integer>, m: &Integer) -> DensePoly<Integer> {
    DensePoly::new(a.coeffs().iter().map(|c| c.rem_euclid(m)).collect())
}

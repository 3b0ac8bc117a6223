//! Galois group classification for degree at most five.
//!
//! - Degree 3: the discriminant decides between A3 and S3.
//! - Degree 4: the integer roots of the cubic resolvent and the
//!   discriminant separate V4, D4, A4 and S4; C4 against D4 uses the
//!   Kappe-Warren criterion.
//! - Degree 5: the discriminant splits the even groups from F20 and S5;
//!   within each side, Frobenius cycle types at unramified primes decide.

use num_traits::Zero;
use tracing::debug;

use vieta_factor::{factor, is_irreducible};
use vieta_integers::Integer;
use vieta_poly::{discriminant, DensePoly};

use crate::error::GaloisError;
use crate::frobenius::{frobenius_sample, FROBENIUS_PRIMES};
use crate::group::GaloisGroup;

/// Computes the Galois group of an irreducible monic integer polynomial.
///
/// # Errors
///
/// Returns [`GaloisError::UnsupportedDegree`] outside degrees 1 to 5,
/// [`GaloisError::NotMonic`] for a leading coefficient other than 1 and
/// [`GaloisError::Reducible`] when `f` factors over Q.
pub fn galois_group(f: &DensePoly<Integer>) -> Result<GaloisGroup, GaloisError> {
    let n = f.degree();
    if n == 0 || n > 5 {
        return Err(GaloisError::UnsupportedDegree(n));
    }
    if *f.leading_coeff() != Integer::new(1) {
        return Err(GaloisError::NotMonic);
    }
    if !is_irreducible(f) {
        return Err(GaloisError::Reducible);
    }

    let group = match n {
        1 => GaloisGroup::S1,
        2 => GaloisGroup::S2,
        3 => cubic_group(f),
        4 => quartic_group(f),
        _ => quintic_group(f),
    };
    debug!(degree = n, group = group.name, "classified");
    Ok(group)
}

fn cubic_group(f: &DensePoly<Integer>) -> GaloisGroup {
    if discriminant(f).is_perfect_square() {
        GaloisGroup::A3
    } else {
        GaloisGroup::S3
    }
}

fn quartic_group(f: &DensePoly<Integer>) -> GaloisGroup {
    let disc = discriminant(f);
    let disc_square = disc.is_perfect_square();
    let roots = integer_roots(&cubic_resolvent(f));

    match roots.as_slice() {
        [] if disc_square => GaloisGroup::A4,
        [] => GaloisGroup::S4,
        [r] => {
            if kappe_warren_cyclic(f, r, &disc) {
                GaloisGroup::C4
            } else {
                GaloisGroup::D4
            }
        }
        _ => GaloisGroup::V4,
    }
}

fn quintic_group(f: &DensePoly<Integer>) -> GaloisGroup {
    let disc = discriminant(f);
    let sample = frobenius_sample(f, &disc, FROBENIUS_PRIMES);

    if disc.is_perfect_square() {
        if sample.has_cycle(3) {
            GaloisGroup::A5
        } else if sample.contains(&[2, 2, 1]) {
            GaloisGroup::D5
        } else {
            GaloisGroup::C5
        }
    } else if sample.contains(&[2, 1, 1, 1])
        || sample.contains(&[3, 1, 1])
        || sample.contains(&[3, 2])
    {
        GaloisGroup::S5
    } else {
        GaloisGroup::F5
    }
}

/// Cubic resolvent of `x^4 + a x^3 + b x^2 + c x + d`, with roots
/// `α1α2 + α3α4` and its conjugates.
///
/// `R(y) = y^3 - b y^2 + (ac - 4d) y - (a^2 d - 4bd + c^2)`.
#[must_use]
pub fn cubic_resolvent(f: &DensePoly<Integer>) -> DensePoly<Integer> {
    let [d, c, b, a] = [0, 1, 2, 3].map(|i| f.coeff(i));
    let four = Integer::new(4);

    let linear = &(&a * &c) - &(&four * &d);
    let constant = &(&(&a * &a) * &d) - &(&(&four * &b) * &d) + &c * &c;

    DensePoly::new(vec![-constant, linear, -b, Integer::new(1)])
}

/// Integer roots of a monic integer polynomial, ascending with multiplicity.
fn integer_roots(f: &DensePoly<Integer>) -> Vec<Integer> {
    let mut roots: Vec<Integer> = factor(f)
        .factors
        .iter()
        .filter(|p| p.factor.degree() == 1)
        .flat_map(|p| std::iter::repeat(-p.factor.coeff(0)).take(p.multiplicity as usize))
        .collect();
    roots.sort();
    roots
}

/// C4 iff `y^2 - r y + d` and `y^2 + a y + (b - r)` both split over Q(√D).
fn kappe_warren_cyclic(f: &DensePoly<Integer>, r: &Integer, disc: &Integer) -> bool {
    let [d, b, a] = [0, 2, 3].map(|i| f.coeff(i));
    let four = Integer::new(4);

    let first = &(r * r) - &(&four * &d);
    let second = &(&a * &a) - &(&four * &(&b - r));
    splits_over_quadratic_field(&first, disc) && splits_over_quadratic_field(&second, disc)
}

/// Whether a quadratic of discriminant `delta` splits over Q(√disc).
fn splits_over_quadratic_field(delta: &Integer, disc: &Integer) -> bool {
    delta.is_zero() || delta.is_perfect_square() || (delta * disc).is_perfect_square()
}

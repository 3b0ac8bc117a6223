//! Squarefree decomposition of univariate polynomials over a field.
//!
//! f = u * f₁ * f₂² * f₃³ * ...
//!
//! where each fᵢ is monic, squarefree and coprime to the others.
//! Uses Yun's algorithm, valid in characteristic 0.

use crate::algorithms::gcd::{poly_div_rem, poly_gcd};
use crate::dense::DensePoly;
use vieta_rings::traits::Field;

/// A factor with its multiplicity in the squarefree decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor<F: Field> {
    /// The squarefree polynomial factor.
    pub factor: DensePoly<F>,
    /// The multiplicity (power) of this factor.
    pub multiplicity: u32,
}

/// Result of squarefree decomposition.
#[derive(Clone, Debug)]
pub struct SquarefreeDecomposition<F: Field> {
    /// The leading coefficient.
    pub unit: F,
    /// The squarefree factors with multiplicities, by increasing multiplicity.
    pub factors: Vec<SquarefreeFactor<F>>,
}

impl<F: Field> SquarefreeDecomposition<F> {
    /// Reconstructs the original polynomial from the decomposition.
    #[must_use]
    pub fn to_polynomial(&self) -> DensePoly<F> {
        self.factors
            .iter()
            .fold(DensePoly::constant(self.unit.clone()), |acc, sf| {
                acc.mul(&sf.factor.pow(sf.multiplicity))
            })
    }

    /// Returns true if every multiplicity is 1.
    #[must_use]
    pub fn is_squarefree(&self) -> bool {
        self.factors.iter().all(|f| f.multiplicity == 1)
    }
}

/// Computes the squarefree decomposition with Yun's algorithm.
///
/// 1. g = gcd(f, f'), a = f/g, b = f'/g
/// 2. c = b - a'; stop when c = 0, emitting a
/// 3. d = gcd(a, c) is the factor of the current multiplicity;
///    a = a/d, b = c/d
#[must_use]
pub fn squarefree_decomposition<F: Field>(f: &DensePoly<F>) -> SquarefreeDecomposition<F> {
    let unit = f.leading_coeff().clone();
    if f.degree() == 0 {
        return SquarefreeDecomposition {
            unit,
            factors: Vec::new(),
        };
    }

    let Some(lead_inv) = unit.inv() else {
        unreachable!("non-zero leading coefficient without inverse");
    };
    let f_monic = f.scale(&lead_inv);
    let f_prime = f_monic.derivative();
    let g = poly_gcd(&f_monic, &f_prime);

    let (mut a, _) = poly_div_rem(&f_monic, &g);
    let (mut b, _) = poly_div_rem(&f_prime, &g);

    let mut factors = Vec::new();
    let mut multiplicity = 1u32;

    loop {
        let c = b.sub(&a.derivative());

        if c.is_zero() {
            if a.degree() > 0 {
                factors.push(SquarefreeFactor {
                    factor: a,
                    multiplicity,
                });
            }
            break;
        }

        let d = poly_gcd(&a, &c);
        if d.degree() > 0 {
            factors.push(SquarefreeFactor {
                factor: d.clone(),
                multiplicity,
            });
        }

        let (new_a, _) = poly_div_rem(&a, &d);
        let (new_b, _) = poly_div_rem(&c, &d);

        if new_a.degree() == 0 {
            break;
        }

        a = new_a;
        b = new_b;
        multiplicity += 1;
    }

    SquarefreeDecomposition { unit, factors }
}

/// Checks whether gcd(f, f') = 1.
#[must_use]
pub fn is_squarefree<F: Field>(f: &DensePoly<F>) -> bool {
    f.degree() == 0 || poly_gcd(f, &f.derivative()).degree() == 0
}

/// Computes f / gcd(f, f').
#[must_use]
pub fn squarefree_part<F: Field>(f: &DensePoly<F>) -> DensePoly<F> {
    if f.degree() == 0 {
        return f.clone();
    }
    poly_div_rem(f, &poly_gcd(f, &f.derivative())).0
}

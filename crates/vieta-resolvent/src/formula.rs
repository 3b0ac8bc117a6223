//! The generic polynomial and the resolvent formula.
//!
//! For degree j, with marker x0 and elementary-symmetric symbols e_k:
//!
//! ```text
//! polexp(j) = Σ_{i=0}^{j}   (-1)^i e_i x0^(j-i)
//! asum(j)   = Σ_{k=0}^{j-2} (-1)^k (j-k-1)(j-k) x0^(j-k-2) e_k
//! bsum(j)   = Σ_{k=1}^{j-1} (-1)^k k(j-k)       x0^(j-k-1) e_k
//! csum(j)   = Σ_{k=2}^{j}   (-1)^k k(k-1)       x0^(j-k)   e_k
//! ```
//!
//! The `a` and `c` weights are products of consecutive integers, so the
//! halved variants stay integral.

use std::fmt;
use std::str::FromStr;

use vieta_integers::Rational;
use vieta_poly::{Monomial, Poly, Symbols};

/// Which weights and combination build the formula.
///
/// `Canonical` and `Halved` define the same expression (the factor 4
/// absorbs the two halvings); both are kept because downstream tables
/// were produced under either name. `UnnormalizedHalved` is `(j-1)^2`
/// times the other two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormulaVariant {
    /// `(bsum^2 - asum*csum) / (j-1)^2` with full weights.
    #[default]
    Canonical,
    /// `(bsum^2 - 4*asum*csum) / (j-1)^2` with halved `a` and `c` weights.
    Halved,
    /// `bsum^2 - 4*asum*csum` with halved weights and no division.
    UnnormalizedHalved,
}

impl FormulaVariant {
    /// All variants, in declaration order.
    pub const ALL: [Self; 3] = [Self::Canonical, Self::Halved, Self::UnnormalizedHalved];

    fn halved(self) -> bool {
        !matches!(self, Self::Canonical)
    }

    fn cross_factor(self) -> i64 {
        if self.halved() {
            4
        } else {
            1
        }
    }

    fn normalized(self) -> bool {
        !matches!(self, Self::UnnormalizedHalved)
    }
}

impl fmt::Display for FormulaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaVariant::Canonical => write!(f, "canonical"),
            FormulaVariant::Halved => write!(f, "halved"),
            FormulaVariant::UnnormalizedHalved => write!(f, "unnormalized"),
        }
    }
}

impl FromStr for FormulaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "halved" => Ok(Self::Halved),
            "unnormalized" | "unnormalized-halved" => Ok(Self::UnnormalizedHalved),
            other => Err(format!(
                "unknown formula variant `{other}` (expected canonical, halved or unnormalized)"
            )),
        }
    }
}

/// `sign · weight · x0^power · e_k`.
fn weighted(symbols: &Symbols, k: usize, power: usize, weight: i64) -> Poly {
    let sign = if k % 2 == 0 { 1 } else { -1 };
    #[allow(clippy::cast_possible_truncation)]
    let m = Monomial::from_factors([(symbols.marker(), power as u32), (symbols.e(k), 1)]);
    Poly::term(m, Rational::from(sign * weight))
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// `Σ (-1)^i e_i x0^(j-i)` with e0 still symbolic.
#[must_use]
pub fn polexp(symbols: &Symbols, j: usize) -> Poly {
    (0..=j).map(|i| weighted(symbols, i, j - i, 1)).sum()
}

/// The generic monic polynomial: [`polexp`] with e0 = 1.
#[must_use]
pub fn polyno(symbols: &Symbols, j: usize) -> Poly {
    polexp(symbols, j).subs(symbols.e(0), &Poly::one())
}

/// The `a` sum.
#[must_use]
pub fn asum(symbols: &Symbols, j: usize, variant: FormulaVariant) -> Poly {
    let divisor = if variant.halved() { 2 } else { 1 };
    (0..=j.saturating_sub(2))
        .map(|k| {
            let n = to_i64(j - k);
            weighted(symbols, k, j - k - 2, (n - 1) * n / divisor)
        })
        .sum()
}

/// The `b` sum.
#[must_use]
pub fn bsum(symbols: &Symbols, j: usize) -> Poly {
    (1..j)
        .map(|k| weighted(symbols, k, j - k - 1, to_i64(k) * to_i64(j - k)))
        .sum()
}

/// The `c` sum.
#[must_use]
pub fn csum(symbols: &Symbols, j: usize, variant: FormulaVariant) -> Poly {
    let divisor = if variant.halved() { 2 } else { 1 };
    (2..=j)
        .map(|k| {
            let k64 = to_i64(k);
            weighted(symbols, k, j - k, k64 * (k64 - 1) / divisor)
        })
        .sum()
}

/// The resolvent formula before collection.
///
/// `j` must be at least 2.
#[must_use]
pub fn formula(symbols: &Symbols, j: usize, variant: FormulaVariant) -> Poly {
    let a = asum(symbols, j, variant);
    let b = bsum(symbols, j);
    let c = csum(symbols, j, variant);

    let cross = (&a * &c).scale(&Rational::from(variant.cross_factor()));
    let numerator = &b.pow(2) - &cross;

    if variant.normalized() {
        let d = to_i64(j - 1);
        numerator.scale(&Rational::from_i64(1, d * d))
    } else {
        numerator
    }
}

/// [`formula`] with e0 = 1, the input of the reduction.
#[must_use]
pub fn grouped_formula(symbols: &Symbols, j: usize, variant: FormulaVariant) -> Poly {
    formula(symbols, j, variant).subs(symbols.e(0), &Poly::one())
}

//! Sparse monomials over typed symbols.
//!
//! A monomial is a short sorted list of `(symbol, exponent)` pairs. Most
//! monomials in a resolvent derivation mention at most four variables,
//! so the list lives inline in a `SmallVec`.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

use crate::symbol::Symbol;

/// A product of symbol powers with positive exponents.
///
/// Invariant: factors are sorted by symbol, without duplicates, and
/// every exponent is positive.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial {
    factors: SmallVec<[(Symbol, u32); 4]>,
}

impl Monomial {
    /// The monomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// The monomial `s^exp` (or 1 when `exp` is zero).
    #[must_use]
    pub fn var(s: Symbol, exp: u32) -> Self {
        let mut factors = SmallVec::new();
        if exp > 0 {
            factors.push((s, exp));
        }
        Self { factors }
    }

    /// Builds a monomial from arbitrary `(symbol, exponent)` pairs.
    #[must_use]
    pub fn from_factors<I: IntoIterator<Item = (Symbol, u32)>>(factors: I) -> Self {
        factors
            .into_iter()
            .fold(Self::one(), |acc, (s, e)| acc.mul(&Self::var(s, e)))
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }

    /// The `(symbol, exponent)` pairs in symbol order.
    pub fn factors(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.factors.iter().copied()
    }

    /// Exponent of `s`.
    #[must_use]
    pub fn degree_in(&self, s: Symbol) -> u32 {
        self.factors
            .binary_search_by(|(t, _)| t.cmp(&s))
            .map_or(0, |i| self.factors[i].1)
    }

    /// Sum of all exponents.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.factors.iter().map(|(_, e)| e).sum()
    }

    /// Splits off the power of `s`: returns `(exp, rest)`.
    #[must_use]
    pub fn split(&self, s: Symbol) -> (u32, Self) {
        let exp = self.degree_in(s);
        let factors = self.factors.iter().copied().filter(|(t, _)| *t != s).collect();
        (exp, Self { factors })
    }

    /// Product of two monomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut factors = SmallVec::with_capacity(self.factors.len() + other.factors.len());
        let (mut i, mut j) = (0, 0);

        while i < self.factors.len() && j < other.factors.len() {
            let (s, a) = self.factors[i];
            let (t, b) = other.factors[j];
            match s.cmp(&t) {
                Ordering::Less => {
                    factors.push((s, a));
                    i += 1;
                }
                Ordering::Greater => {
                    factors.push((t, b));
                    j += 1;
                }
                Ordering::Equal => {
                    factors.push((s, a + b));
                    i += 1;
                    j += 1;
                }
            }
        }
        factors.extend_from_slice(&self.factors[i..]);
        factors.extend_from_slice(&other.factors[j..]);

        Self { factors }
    }

    /// Quotient `self / other` when `other` divides `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        let mut factors = SmallVec::new();
        let mut j = 0;

        for &(s, a) in &self.factors {
            if j < other.factors.len() && other.factors[j].0 < s {
                return None;
            }
            if j < other.factors.len() && other.factors[j].0 == s {
                let b = other.factors[j].1;
                j += 1;
                match a.cmp(&b) {
                    Ordering::Less => return None,
                    Ordering::Equal => {}
                    Ordering::Greater => factors.push((s, a - b)),
                }
            } else {
                factors.push((s, a));
            }
        }

        if j < other.factors.len() {
            return None;
        }
        Some(Self { factors })
    }

    /// Greatest common divisor (componentwise minimum of exponents).
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let factors = self
            .factors
            .iter()
            .filter_map(|&(s, a)| {
                let b = other.degree_in(s);
                (b > 0).then_some((s, a.min(b)))
            })
            .collect();
        Self { factors }
    }

    /// Graded order used for display: higher total degree first, then lex.
    #[must_use]
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        other
            .total_degree()
            .cmp(&self.total_degree())
            .then_with(|| other.cmp(self))
    }
}

/// Lexicographic order with the smallest symbol most significant.
///
/// Compatible with multiplication, so the maximal term of a product is
/// the product of the maximal terms.
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        let (mut i, mut j) = (0, 0);
        loop {
            match (self.factors.get(i), other.factors.get(j)) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some(&(s, a)), Some(&(t, b))) => match s.cmp(&t) {
                    // `self` has a positive power of a more significant symbol.
                    Ordering::Less => return Ordering::Greater,
                    Ordering::Greater => return Ordering::Less,
                    Ordering::Equal => match a.cmp(&b) {
                        Ordering::Equal => {
                            i += 1;
                            j += 1;
                        }
                        unequal => return unequal,
                    },
                },
            }
        }
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        for (i, (s, e)) in self.factors().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if e == 1 {
                write!(f, "{s}")?;
            } else {
                write!(f, "{s}^{e}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(k: u8) -> Symbol {
        Symbol::E(k)
    }

    #[test]
    fn test_mul_and_div() {
        let a = Monomial::from_factors([(e(1), 2), (e(3), 1)]);
        let b = Monomial::from_factors([(e(2), 1), (e(3), 2)]);
        let ab = a.mul(&b);

        assert_eq!(ab.degree_in(e(3)), 3);
        assert_eq!(ab.total_degree(), 6);
        assert_eq!(ab.div(&b), Some(a.clone()));
        assert_eq!(a.div(&b), None);
        assert_eq!(ab.to_string(), "e1^2*e2*e3^3");
    }

    #[test]
    fn test_lex_order() {
        let x = Monomial::var(Symbol::Marker, 1);
        let e1_cubed = Monomial::var(e(1), 3);
        // Any power of the marker outranks every monomial without it.
        assert!(x > e1_cubed);
        assert!(Monomial::var(e(1), 2) > Monomial::from_factors([(e(1), 1), (e(2), 5)]));
        assert!(Monomial::one() < Monomial::var(e(5), 1));
    }

    #[test]
    fn test_order_is_multiplicative() {
        let a = Monomial::from_factors([(e(1), 1), (e(4), 2)]);
        let b = Monomial::from_factors([(e(2), 3)]);
        let c = Monomial::from_factors([(e(1), 1), (e(3), 1)]);
        assert!(a > b);
        assert!(a.mul(&c) > b.mul(&c));
    }

    #[test]
    fn test_split_and_gcd() {
        let m = Monomial::from_factors([(Symbol::Marker, 3), (e(2), 1)]);
        let (exp, rest) = m.split(Symbol::Marker);
        assert_eq!(exp, 3);
        assert_eq!(rest, Monomial::var(e(2), 1));

        let n = Monomial::from_factors([(Symbol::Marker, 1), (e(1), 1)]);
        assert_eq!(m.gcd(&n), Monomial::var(Symbol::Marker, 1));
    }
}

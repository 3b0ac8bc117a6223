//! Sparse multivariate polynomials with rational coefficients.
//!
//! `Poly` is the symbolic expression type of the workspace. It is always
//! kept expanded and collected: a map from monomial to non-zero
//! coefficient, ordered by the lexicographic monomial order. Every
//! operation returns a new value.

use num_traits::{One, Zero};
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use vieta_integers::Rational;

use crate::monomial::Monomial;
use crate::symbol::Symbol;

/// A simultaneous substitution: every key is replaced by its image.
pub type Substitution = FxHashMap<Symbol, Poly>;

/// A multivariate polynomial over Q in canonical (expanded) form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Poly {
    terms: BTreeMap<Monomial, Rational>,
}

impl Poly {
    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The constant 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Rational::one())
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self::term(Monomial::one(), c)
    }

    /// A small integer constant.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self::constant(Rational::from(n))
    }

    /// The polynomial consisting of one variable.
    #[must_use]
    pub fn var(s: Symbol) -> Self {
        Self::term(Monomial::var(s, 1), Rational::one())
    }

    /// The single term `c * m`.
    #[must_use]
    pub fn term(m: Monomial, c: Rational) -> Self {
        let mut terms = BTreeMap::new();
        if !c.is_zero() {
            terms.insert(m, c);
        }
        Self { terms }
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if no variable occurs.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Monomial::is_one)
    }

    /// The value of a constant polynomial.
    #[must_use]
    pub fn constant_value(&self) -> Option<Rational> {
        if self.is_constant() {
            Some(self.terms.get(&Monomial::one()).cloned().unwrap_or_else(Rational::zero))
        } else {
            None
        }
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in increasing monomial order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (&Monomial, &Rational)> {
        self.terms.iter()
    }

    /// The lexicographically largest term.
    #[must_use]
    pub fn leading_term(&self) -> Option<(&Monomial, &Rational)> {
        self.terms.last_key_value()
    }

    /// Coefficient of the leading term (zero for the zero polynomial).
    #[must_use]
    pub fn leading_coeff(&self) -> Rational {
        self.leading_term().map_or_else(Rational::zero, |(_, c)| c.clone())
    }

    /// Adds `c * m` in place.
    pub fn add_term(&mut self, m: Monomial, c: Rational) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(m) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(c);
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                let sum = &*slot.get() + &c;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    /// Adds `c * m * other` in place.
    pub fn add_scaled(&mut self, other: &Self, m: &Monomial, c: &Rational) {
        if c.is_zero() {
            return;
        }
        for (n, d) in &other.terms {
            self.add_term(n.mul(m), d * c);
        }
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let terms = self.terms.iter().map(|(m, d)| (m.clone(), d * c)).collect();
        Self { terms }
    }

    /// Multiplies by the term `c * m`.
    #[must_use]
    pub fn mul_term(&self, m: &Monomial, c: &Rational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let terms = self.terms.iter().map(|(n, d)| (n.mul(m), d * c)).collect();
        Self { terms }
    }

    /// Raises to a power by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// The variables that occur.
    #[must_use]
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        self.terms
            .keys()
            .flat_map(|m| m.factors().map(|(s, _)| s))
            .collect()
    }

    /// Returns true if `s` occurs.
    #[must_use]
    pub fn contains(&self, s: Symbol) -> bool {
        self.terms.keys().any(|m| m.degree_in(s) > 0)
    }

    /// Highest power of `s`.
    #[must_use]
    pub fn degree_in(&self, s: Symbol) -> u32 {
        self.terms.keys().map(|m| m.degree_in(s)).max().unwrap_or(0)
    }

    /// Highest total degree of a term.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms.keys().map(Monomial::total_degree).max().unwrap_or(0)
    }

    /// Collects by powers of `s`: `self = Σ coeff_k * s^k`.
    ///
    /// Only non-zero coefficients appear; none of them mentions `s`.
    #[must_use]
    pub fn coefficients_in(&self, s: Symbol) -> BTreeMap<u32, Poly> {
        let mut out: BTreeMap<u32, Poly> = BTreeMap::new();
        for (m, c) in &self.terms {
            let (k, rest) = m.split(s);
            out.entry(k).or_default().add_term(rest, c.clone());
        }
        out
    }

    /// Inverse of [`Poly::coefficients_in`].
    #[must_use]
    pub fn from_coefficients_in<I>(s: Symbol, coefficients: I) -> Self
    where
        I: IntoIterator<Item = (u32, Poly)>,
    {
        let mut out = Self::zero();
        for (k, c) in coefficients {
            out.add_scaled(&c, &Monomial::var(s, k), &Rational::one());
        }
        out
    }

    /// Coefficient of the highest power of `s`.
    #[must_use]
    pub fn leading_coeff_in(&self, s: Symbol) -> Poly {
        let d = self.degree_in(s);
        let mut out = Self::zero();
        for (m, c) in &self.terms {
            let (k, rest) = m.split(s);
            if k == d {
                out.add_term(rest, c.clone());
            }
        }
        out
    }

    /// Simultaneous substitution of symbols by polynomials.
    #[must_use]
    pub fn substitute(&self, subs: &Substitution) -> Self {
        let mut powers: FxHashMap<(Symbol, u32), Poly> = FxHashMap::default();
        let mut out = Self::zero();

        for (m, c) in &self.terms {
            let mut kept = Monomial::one();
            let mut image = Self::one();
            for (s, e) in m.factors() {
                match subs.get(&s) {
                    Some(value) => {
                        let power = powers.entry((s, e)).or_insert_with(|| value.pow(e));
                        image = &image * &*power;
                    }
                    None => kept = kept.mul(&Monomial::var(s, e)),
                }
            }
            out.add_scaled(&image, &kept, c);
        }

        out
    }

    /// Substitutes a single symbol.
    #[must_use]
    pub fn subs(&self, s: Symbol, value: &Poly) -> Self {
        let mut subs = Substitution::default();
        subs.insert(s, value.clone());
        self.substitute(&subs)
    }

    /// Evaluates every symbol; `None` if `value` leaves one unassigned.
    pub fn evaluate<F>(&self, value: F) -> Option<Rational>
    where
        F: Fn(Symbol) -> Option<Rational>,
    {
        let mut total = Rational::zero();
        for (m, c) in &self.terms {
            let mut term = c.clone();
            for (s, e) in m.factors() {
                term = term * value(s)?.pow(e);
            }
            total = total + term;
        }
        Some(total)
    }

    /// Partial derivative with respect to `s`.
    #[must_use]
    pub fn derivative(&self, s: Symbol) -> Self {
        let mut out = Self::zero();
        for (m, c) in &self.terms {
            let (k, rest) = m.split(s);
            if k > 0 {
                let m = rest.mul(&Monomial::var(s, k - 1));
                out.add_term(m, c * &Rational::from(i64::from(k)));
            }
        }
        out
    }

    /// Multivariate division by one divisor in the lexicographic order.
    ///
    /// Returns `(q, r)` with `self = q * d + r` where no term of `r` is
    /// divisible by the leading monomial of `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[must_use]
    pub fn div_rem(&self, d: &Self) -> (Self, Self) {
        let Some((lm, lc)) = d.leading_term() else {
            panic!("division by zero polynomial");
        };
        let lc_inv = lc.recip();
        let mut p = self.clone();
        let mut q = Self::zero();
        let mut r = Self::zero();

        while let Some((m, c)) = p.terms.pop_last() {
            match m.div(lm) {
                Some(t) => {
                    let coeff = &c * &lc_inv;
                    // The leading term cancels exactly; subtract the rest of d.
                    for (n, e) in d.terms.iter().rev().skip(1) {
                        p.add_term(n.mul(&t), -(e * &coeff));
                    }
                    q.add_term(t, coeff);
                }
                None => r.add_term(m, c),
            }
        }

        (q, r)
    }

    /// Exact quotient, `None` if `d` does not divide `self`.
    #[must_use]
    pub fn div_exact(&self, d: &Self) -> Option<Self> {
        if d.is_zero() {
            return None;
        }
        let (q, r) = self.div_rem(d);
        r.is_zero().then_some(q)
    }

    /// Rational content: gcd of the coefficients, signed like the leading one.
    #[must_use]
    pub fn content(&self) -> Rational {
        let g = self
            .terms
            .values()
            .fold(Rational::zero(), |acc, c| acc.gcd(c));
        if self.leading_coeff().is_negative() {
            -g
        } else {
            g
        }
    }

    /// `self / content`: integer coefficients, gcd 1, positive leading coefficient.
    #[must_use]
    pub fn primitive_part(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        self.scale(&self.content().recip())
    }

    /// Largest monomial dividing every term.
    #[must_use]
    pub fn monomial_content(&self) -> Monomial {
        let mut keys = self.terms.keys();
        match keys.next() {
            None => Monomial::one(),
            Some(first) => keys.fold(first.clone(), |acc, m| acc.gcd(m)),
        }
    }

    fn combine(&self, other: &Self, sign: &Rational) -> Self {
        let mut out = self.clone();
        for (m, c) in &other.terms {
            out.add_term(m.clone(), c * sign);
        }
        out
    }
}

impl From<Symbol> for Poly {
    fn from(s: Symbol) -> Self {
        Self::var(s)
    }
}

impl From<Rational> for Poly {
    fn from(c: Rational) -> Self {
        Self::constant(c)
    }
}

impl From<i64> for Poly {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        self.combine(rhs, &Rational::one())
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        self.combine(rhs, &-Rational::one())
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        let mut out = Poly::zero();
        for (m, c) in &self.terms {
            out.add_scaled(rhs, m, c);
        }
        out
    }
}

macro_rules! owned_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Poly {
            type Output = Poly;

            fn $method(self, rhs: Poly) -> Poly {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Poly> for Poly {
            type Output = Poly;

            fn $method(self, rhs: &Poly) -> Poly {
                (&self).$method(rhs)
            }
        }
    };
}

owned_binop!(Add, add);
owned_binop!(Sub, sub);
owned_binop!(Mul, mul);

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        self.scale(&-Rational::one())
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        -&self
    }
}

impl std::iter::Sum for Poly {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| &acc + &p)
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly({self})")
    }
}

/// Prints in descending graded order, e.g. `e1^2 - 3*e2`.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms: Vec<_> = self.terms.iter().collect();
        terms.sort_by(|a, b| a.0.display_cmp(b.0));

        for (i, (m, c)) in terms.into_iter().enumerate() {
            let negative = c.is_negative();
            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            let magnitude = c.abs();
            if m.is_one() {
                write!(f, "{magnitude}")?;
            } else if magnitude.is_one() {
                write!(f, "{m}")?;
            } else {
                write!(f, "{magnitude}*{m}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(k: u8) -> Poly {
        Poly::var(Symbol::E(k))
    }

    fn x() -> Poly {
        Poly::var(Symbol::Marker)
    }

    #[test]
    fn test_expand_and_display() {
        let p = (&e(1) - &Poly::from_i64(2)).pow(2);
        assert_eq!(p.to_string(), "e1^2 - 4*e1 + 4");
        assert_eq!((&e(1) * &e(2)).scale(&Rational::from_i64(-1, 2)).to_string(), "-1/2*e1*e2");
        assert_eq!(Poly::zero().to_string(), "0");
    }

    #[test]
    fn test_collect_by_marker() {
        // (e1 x0 + e2)^2 = e1^2 x0^2 + 2 e1 e2 x0 + e2^2
        let p = (&(&e(1) * &x()) + &e(2)).pow(2);
        let coeffs = p.coefficients_in(Symbol::Marker);

        assert_eq!(coeffs.len(), 3);
        assert_eq!(coeffs[&2], e(1).pow(2));
        assert_eq!(coeffs[&1], (&e(1) * &e(2)).scale(&Rational::from(2)));
        assert_eq!(coeffs[&0], e(2).pow(2));
        assert_eq!(Poly::from_coefficients_in(Symbol::Marker, coeffs), p);
        assert_eq!(p.leading_coeff_in(Symbol::Marker), e(1).pow(2));
    }

    #[test]
    fn test_substitute_is_simultaneous() {
        // Swapping e1 and e2 in e1 - 2 e2.
        let p = &e(1) - &e(2).scale(&Rational::from(2));
        let mut subs = Substitution::default();
        subs.insert(Symbol::E(1), e(2));
        subs.insert(Symbol::E(2), e(1));
        assert_eq!(p.substitute(&subs), &e(2) - &e(1).scale(&Rational::from(2)));
    }

    #[test]
    fn test_evaluate() {
        let p = &(&e(1) * &e(1)) - &e(2).scale(&Rational::from(3));
        let value = p.evaluate(|s| match s {
            Symbol::E(1) => Some(Rational::from(7)),
            Symbol::E(2) => Some(Rational::from(-6)),
            _ => None,
        });
        assert_eq!(value, Some(Rational::from(67)));
        assert_eq!(p.evaluate(|_| None), None);
    }

    #[test]
    fn test_div_exact() {
        let a = &e(1) + &e(2);
        let b = &e(1) - &e(3);
        let product = &a * &b;
        assert_eq!(product.div_exact(&a), Some(b.clone()));
        assert_eq!(product.div_exact(&b), Some(a));
        assert_eq!((&product + &Poly::one()).div_exact(&b), None);
    }

    #[test]
    fn test_derivative() {
        let p = &e(1).pow(3) + &(&e(1) * &e(2));
        let dp = p.derivative(Symbol::E(1));
        assert_eq!(dp, &e(1).pow(2).scale(&Rational::from(3)) + &e(2));
    }

    #[test]
    fn test_content() {
        let p = (&e(1).scale(&Rational::from_i64(-3, 2))) + &Poly::constant(Rational::from(6));
        assert_eq!(p.content(), Rational::from_i64(-3, 2));
        assert_eq!(p.primitive_part(), &e(1) - &Poly::from_i64(4));
    }
}

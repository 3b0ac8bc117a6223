//! Splitting an expression by powers of the marker.

use std::fmt;

use vieta_poly::{Poly, Symbol};

/// `Σ coefficient · x0^power + residue`, split once.
///
/// Power terms are in strictly descending power order, every power is
/// positive and no coefficient mentions the marker. The residue is the
/// marker-free part; it is always present, possibly zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermPartition {
    /// `(power, coefficient)` pairs, highest power first.
    pub power_terms: Vec<(u32, Poly)>,
    /// The marker-free remainder.
    pub residue: Poly,
}

impl TermPartition {
    /// Splits `expr` by powers of `marker`.
    #[must_use]
    pub fn split(expr: &Poly, marker: Symbol) -> Self {
        let mut coefficients = expr.coefficients_in(marker);
        let residue = coefficients.remove(&0).unwrap_or_default();
        let power_terms = coefficients.into_iter().rev().collect();
        Self {
            power_terms,
            residue,
        }
    }

    /// Highest power term, if any.
    #[must_use]
    pub fn leading(&self) -> Option<(u32, &Poly)> {
        self.power_terms.first().map(|(k, c)| (*k, c))
    }

    /// Rebuilds the partitioned expression.
    #[must_use]
    pub fn reassemble(&self, marker: Symbol) -> Poly {
        let powers = self
            .power_terms
            .iter()
            .map(|(k, c)| (*k, c.clone()))
            .chain(std::iter::once((0, self.residue.clone())));
        Poly::from_coefficients_in(marker, powers)
    }

    /// The reduced term sequence: coefficients at x0 = 1, then the residue.
    #[must_use]
    pub fn terms(&self) -> Vec<Poly> {
        self.power_terms
            .iter()
            .map(|(_, c)| c.clone())
            .chain(std::iter::once(self.residue.clone()))
            .collect()
    }

    /// Powers matching [`TermPartition::terms`]; the residue has power 0.
    #[must_use]
    pub fn powers(&self) -> Vec<u32> {
        self.power_terms
            .iter()
            .map(|(k, _)| *k)
            .chain(std::iter::once(0))
            .collect()
    }

    /// Number of slots, residue included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.power_terms.len() + 1
    }

    /// Always false: the residue slot exists even when zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for TermPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, c) in &self.power_terms {
            write!(f, "({c})*x0^{k}, ")?;
        }
        write!(f, "{}]", self.residue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vieta_integers::Rational;

    #[test]
    fn test_split_and_reassemble() {
        // (e1 + 2) x0^3 - e2 x0 + e3 e1
        let x0 = Poly::var(Symbol::Marker);
        let e1 = Poly::var(Symbol::E(1));
        let e2 = Poly::var(Symbol::E(2));
        let e3 = Poly::var(Symbol::E(3));
        let expr = &(&(&(&e1 + &Poly::from_i64(2)) * &x0.pow(3)) - &(&e2 * &x0)) + &(&e3 * &e1);

        let part = TermPartition::split(&expr, Symbol::Marker);
        assert_eq!(part.powers(), vec![3, 1, 0]);
        assert_eq!(part.leading(), Some((3, &(&e1 + &Poly::from_i64(2)))));
        assert_eq!(part.residue, &e3 * &e1);
        assert_eq!(part.reassemble(Symbol::Marker), expr);
        assert_eq!(part.terms().len(), part.len());
    }

    #[test]
    fn test_marker_free_expression() {
        let expr = Poly::constant(Rational::from_i64(3, 4));
        let part = TermPartition::split(&expr, Symbol::Marker);
        assert!(part.power_terms.is_empty());
        assert_eq!(part.terms(), vec![expr]);
    }

    #[test]
    fn test_zero_residue_is_kept() {
        let x0 = Poly::var(Symbol::Marker);
        let part = TermPartition::split(&x0.pow(2), Symbol::Marker);
        assert_eq!(part.terms(), vec![Poly::one(), Poly::zero()]);
    }
}

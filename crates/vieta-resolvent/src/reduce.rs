//! The reduction loop.
//!
//! Starting from the collected formula, each step cancels the highest
//! power of x0 by subtracting `leading · polyno · x0^(power - j)`, exactly
//! one step of long division by the generic monic polynomial. The loop
//! runs for `q` in `0..=j-4`; for the resolvent formula (x0-degree
//! `2j - 4`) that is precisely the number of steps needed to bring every
//! power below `j`.

use tracing::{debug, trace};

use vieta_integers::Rational;
use vieta_poly::{Monomial, Poly, Symbol, Symbols, MAX_SYMBOL_DEGREE};

use crate::error::ResolventError;
use crate::formula::{grouped_formula, polyno, FormulaVariant};
use crate::partition::TermPartition;

/// A complete derivation for one degree.
#[derive(Clone, Debug)]
pub struct Reduction {
    /// Degree j.
    pub degree: usize,
    /// Formula variant used.
    pub variant: FormulaVariant,
    /// The generic monic polynomial of degree j.
    pub polyno: Poly,
    /// The collected formula with e0 = 1.
    pub grouped_formula: Poly,
    /// Accumulated quotient of the division by `polyno`.
    pub quotient: Poly,
    /// Initial split, then one state per loop iteration.
    pub states: Vec<TermPartition>,
}

impl Reduction {
    /// The split before any reduction step.
    #[must_use]
    pub fn initial(&self) -> &TermPartition {
        &self.states[0]
    }

    /// The final split.
    #[must_use]
    pub fn fixed(&self) -> &TermPartition {
        &self.states[self.states.len() - 1]
    }

    /// Checks `grouped_formula = quotient · polyno + fixed`.
    #[must_use]
    pub fn verify(&self) -> bool {
        let rebuilt = &(&self.quotient * &self.polyno) + &self.fixed().reassemble(Symbol::Marker);
        rebuilt == self.grouped_formula
    }
}

/// Derives the reduced terms of degree `j`.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeTooSmall`] for `j < 2` and
/// [`ResolventError::DegreeOutOfRange`] past [`MAX_SYMBOL_DEGREE`].
pub fn reduce(j: usize, variant: FormulaVariant) -> Result<Reduction, ResolventError> {
    if j < 2 {
        return Err(ResolventError::DegreeTooSmall(j));
    }
    check_symbol_degree(j)?;

    let symbols = Symbols::new(j);
    let marker = symbols.marker();
    let polyno = polyno(&symbols, j);
    let grouped = grouped_formula(&symbols, j, variant);

    let mut diff = grouped.clone();
    let mut quotient = Poly::zero();
    let mut states = vec![TermPartition::split(&diff, marker)];

    if j >= 4 {
        for q in 0..=j - 4 {
            let Some((power, leading)) = current(&states).leading() else {
                break;
            };
            let Some(shift) = shift_for(power, j) else {
                break;
            };
            let factor = Poly::term(Monomial::var(marker, shift), Rational::from(1)) * leading;
            diff = &diff - &(&factor * &polyno);
            quotient = &quotient + &factor;
            trace!(degree = j, step = q, power, "reduction step");
            states.push(TermPartition::split(&diff, marker));
        }
    }

    let final_split = TermPartition::split(&diff, marker);
    if states.last() != Some(&final_split) {
        states.push(final_split);
    }

    debug!(
        degree = j,
        %variant,
        steps = states.len() - 1,
        terms = current(&states).len(),
        "reduced resolvent formula"
    );

    Ok(Reduction {
        degree: j,
        variant,
        polyno,
        grouped_formula: grouped,
        quotient,
        states,
    })
}

/// Reduces an arbitrary expression in x0 modulo the degree-`j` polynomial.
///
/// Every power of the result is below `j`.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeTooSmall`] for `j < 1` and
/// [`ResolventError::DegreeOutOfRange`] past [`MAX_SYMBOL_DEGREE`].
pub fn reduce_expression(expr: &Poly, j: usize) -> Result<TermPartition, ResolventError> {
    if j < 1 {
        return Err(ResolventError::DegreeTooSmall(j));
    }
    check_symbol_degree(j)?;

    let symbols = Symbols::new(j);
    let marker = symbols.marker();
    let polyno = polyno(&symbols, j);

    let mut diff = expr.clone();
    loop {
        let power = diff.degree_in(marker);
        let Some(shift) = shift_for(power, j) else {
            break;
        };
        let leading = diff.leading_coeff_in(marker);
        let factor = Poly::term(Monomial::var(marker, shift), Rational::from(1)) * &leading;
        diff = &diff - &(&factor * &polyno);
    }

    Ok(TermPartition::split(&diff, marker))
}

fn current(states: &[TermPartition]) -> &TermPartition {
    &states[states.len() - 1]
}

/// `power - j` when the leading power can still be cancelled.
fn shift_for(power: u32, j: usize) -> Option<u32> {
    let j = u32::try_from(j).ok()?;
    power.checked_sub(j)
}

fn check_symbol_degree(j: usize) -> Result<(), ResolventError> {
    if j > MAX_SYMBOL_DEGREE {
        return Err(ResolventError::DegreeOutOfRange {
            degree: j,
            max: MAX_SYMBOL_DEGREE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(k: u8) -> Poly {
        Poly::var(Symbol::E(k))
    }

    fn int(n: i64) -> Rational {
        Rational::from(n)
    }

    #[test]
    fn test_cubic_has_no_loop() {
        let r = reduce(3, FormulaVariant::Canonical).unwrap();
        assert_eq!(r.states.len(), 1);
        assert!(r.quotient.is_zero());
        assert_eq!(r.fixed().powers(), vec![2, 1, 0]);
    }

    #[test]
    fn test_quartic_reduction() {
        let r = reduce(4, FormulaVariant::Canonical).unwrap();
        assert!(r.verify());
        assert_eq!(r.states.len(), 2);
        assert_eq!(r.fixed().powers(), vec![3, 2, 1, 0]);

        let terms = r.fixed().terms();
        // e1^3 - 4 e1 e2 + 8 e3
        let t0 = &(&e(1).pow(3) - &(&e(1) * &e(2)).scale(&int(4))) + &e(3).scale(&int(8));
        // e3^2 - e1^2 e4
        let t3 = &e(3).pow(2) - &(&e(1).pow(2) * &e(4));
        assert_eq!(terms[0], t0);
        assert_eq!(terms[3], t3);

        // the quotient is the first leading coefficient, e1^2 - 8/3 e2
        let lead = &e(1).pow(2) - &e(2).scale(&Rational::from_i64(8, 3));
        assert_eq!(r.quotient, lead);
    }

    #[test]
    fn test_reduction_identity_all_variants() {
        for variant in FormulaVariant::ALL {
            for j in 2..=8 {
                let r = reduce(j, variant).unwrap();
                assert!(r.verify(), "identity fails for j = {j}, {variant}");
                let top = r.fixed().leading().map_or(0, |(k, _)| k);
                assert!((top as usize) < j.max(3), "j = {j} leaves power {top}");
            }
        }
    }

    #[test]
    fn test_reduce_expression_is_idempotent() {
        for j in 3..=8 {
            let r = reduce(j, FormulaVariant::Canonical).unwrap();
            let fixed = r.fixed();
            let again = reduce_expression(&fixed.reassemble(Symbol::Marker), j).unwrap();
            assert_eq!(&again, fixed, "j = {j}");
        }
    }

    #[test]
    fn test_fixed_term_count() {
        // one slot per power below j, the residue included
        for j in 3..=8 {
            let r = reduce(j, FormulaVariant::Canonical).unwrap();
            let expected: Vec<u32> = (0..j).rev().map(|k| u32::try_from(k).unwrap()).collect();
            assert_eq!(r.fixed().powers(), expected, "j = {j}");
        }
    }

    #[test]
    fn test_reduce_expression_divides() {
        // x0^4 mod (x0^2 - e1 x0 + e2) = (e1^3 - 2 e1 e2) x0 + (e2^2 - e1^2 e2)
        let x0 = Poly::var(Symbol::Marker);
        let part = reduce_expression(&x0.pow(4), 2).unwrap();
        let linear = &e(1).pow(3) - &(&e(1) * &e(2)).scale(&int(2));
        let constant = &e(2).pow(2) - &(&e(1).pow(2) * &e(2));
        assert_eq!(part.power_terms, vec![(1, linear)]);
        assert_eq!(part.residue, constant);
    }

    #[test]
    fn test_degree_too_small() {
        assert_eq!(
            reduce(1, FormulaVariant::Canonical).unwrap_err(),
            ResolventError::DegreeTooSmall(1)
        );
    }

    #[test]
    fn test_degree_past_symbol_index() {
        assert_eq!(
            reduce(256, FormulaVariant::Canonical).unwrap_err(),
            ResolventError::DegreeOutOfRange {
                degree: 256,
                max: MAX_SYMBOL_DEGREE
            }
        );
        assert!(reduce_expression(&Poly::var(Symbol::Marker), 300).is_err());
    }
}

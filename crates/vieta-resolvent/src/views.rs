//! Views of the reduced terms under the three substitution dictionaries.
//!
//! Every view is a pure function of the degree and variant: the reduction
//! runs once per call and the terms are only re-substituted, never
//! re-derived.

use std::fmt;

use rayon::prelude::*;
use vieta_factor::factor_multivariate;
use vieta_poly::{Factorization, Poly, Symbols, MAX_VIETA_DEGREE};

use crate::cyclotomic::{evaluate_at_roots_of_unity, CyclotomicValue};
use crate::dictionaries::{ele_dict, vieta_dict};
use crate::error::ResolventError;
use crate::formula::FormulaVariant;
use crate::partition::TermPartition;
use crate::reduce::reduce;

/// An ordered sequence of reduced terms for one degree.
///
/// Terms are the power-term coefficients, highest power first, followed
/// by the residue; `powers` records the power each term multiplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReducedTerms {
    /// Degree j of the derivation.
    pub degree: usize,
    /// The terms.
    pub terms: Vec<Poly>,
    /// Marker power of each term (0 for the residue).
    pub powers: Vec<u32>,
}

impl ReducedTerms {
    fn from_partition(degree: usize, partition: &TermPartition) -> Self {
        Self {
            degree,
            terms: partition.terms(),
            powers: partition.powers(),
        }
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Applies a substitution to every term.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Poly) -> Poly) -> Self {
        Self {
            degree: self.degree,
            terms: self.terms.iter().map(f).collect(),
            powers: self.powers.clone(),
        }
    }

    /// `Σ term · x0^power`.
    #[must_use]
    pub fn reassemble(&self) -> Poly {
        let marker = Symbols::new(self.degree).marker();
        Poly::from_coefficients_in(
            marker,
            self.powers.iter().copied().zip(self.terms.iter().cloned()),
        )
    }

    /// Sum of the terms, i.e. the reassembled expression at x0 = 1.
    #[must_use]
    pub fn sum(&self) -> Poly {
        self.terms.iter().cloned().sum()
    }
}

impl fmt::Display for ReducedTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, t) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{t}")?;
        }
        write!(f, "]")
    }
}

/// The reduced terms in elementary-symmetric symbols.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeTooSmall`] for `j < 2`.
pub fn calc_fixed(j: usize, variant: FormulaVariant) -> Result<ReducedTerms, ResolventError> {
    let reduction = reduce(j, variant)?;
    Ok(ReducedTerms::from_partition(j, reduction.fixed()))
}

/// Reduced terms for several degrees, derived in parallel.
#[must_use]
pub fn calc_fixed_batch(
    degrees: &[usize],
    variant: FormulaVariant,
) -> Vec<Result<ReducedTerms, ResolventError>> {
    degrees.par_iter().map(|&j| calc_fixed(j, variant)).collect()
}

/// The reduced terms with `e_k → (-1)^k coeff_k`.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeOutOfRange`] for `j > 8` and
/// [`ResolventError::DegreeTooSmall`] for `j < 2`.
pub fn calc_vieta_sum(j: usize, variant: FormulaVariant) -> Result<ReducedTerms, ResolventError> {
    check_vieta_degree(j)?;
    to_vieta(&calc_fixed(j, variant)?)
}

/// The reduced terms with every `e_k` expanded in the roots `x0..x_{j-1}`.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeTooSmall`] for `j < 2`.
pub fn rootis_expanded(j: usize, variant: FormulaVariant) -> Result<Vec<Poly>, ResolventError> {
    let fixed = calc_fixed(j, variant)?;
    let dict = ele_dict(&Symbols::new(j), j);
    Ok(fixed.terms.iter().map(|t| t.substitute(&dict)).collect())
}

/// [`rootis_expanded`], each term factored into irreducibles over Q.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeTooSmall`] for `j < 2`.
pub fn calc_rootis(
    j: usize,
    variant: FormulaVariant,
) -> Result<Vec<Factorization>, ResolventError> {
    Ok(rootis_expanded(j, variant)?
        .iter()
        .map(factor_multivariate)
        .collect())
}

/// The initial split without any reduction step.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeTooSmall`] for `j < 2`.
pub fn common_calc_original(
    j: usize,
    variant: FormulaVariant,
) -> Result<ReducedTerms, ResolventError> {
    let reduction = reduce(j, variant)?;
    Ok(ReducedTerms::from_partition(j, reduction.initial()))
}

/// [`common_calc_original`] with Vieta coefficient symbols.
///
/// # Errors
///
/// As [`calc_vieta_sum`].
pub fn calc_vieta_sum_original(
    j: usize,
    variant: FormulaVariant,
) -> Result<ReducedTerms, ResolventError> {
    check_vieta_degree(j)?;
    to_vieta(&common_calc_original(j, variant)?)
}

/// Every split state of the reduction: initial, then one per step.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeTooSmall`] for `j < 2`.
pub fn common_calc_intermediates(
    j: usize,
    variant: FormulaVariant,
) -> Result<Vec<ReducedTerms>, ResolventError> {
    let reduction = reduce(j, variant)?;
    Ok(reduction
        .states
        .iter()
        .map(|state| ReducedTerms::from_partition(j, state))
        .collect())
}

/// [`common_calc_intermediates`] with Vieta coefficient symbols.
///
/// # Errors
///
/// As [`calc_vieta_sum`].
pub fn calc_vieta_sum_intermediates(
    j: usize,
    variant: FormulaVariant,
) -> Result<Vec<ReducedTerms>, ResolventError> {
    check_vieta_degree(j)?;
    common_calc_intermediates(j, variant)?
        .iter()
        .map(to_vieta)
        .collect()
}

/// Each root-expanded term evaluated at `x_k = ζ_j^k`.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeTooSmall`] for `j < 2`.
pub fn calc_roots_of_unity(
    j: usize,
    variant: FormulaVariant,
) -> Result<Vec<CyclotomicValue>, ResolventError> {
    rootis_expanded(j, variant)?
        .iter()
        .map(|t| evaluate_at_roots_of_unity(t, j))
        .collect()
}

fn check_vieta_degree(j: usize) -> Result<(), ResolventError> {
    if j > MAX_VIETA_DEGREE {
        return Err(ResolventError::DegreeOutOfRange {
            degree: j,
            max: MAX_VIETA_DEGREE,
        });
    }
    Ok(())
}

fn to_vieta(terms: &ReducedTerms) -> Result<ReducedTerms, ResolventError> {
    let dict = vieta_dict(&Symbols::new(terms.degree), terms.degree)?;
    Ok(terms.map(|t| t.substitute(&dict)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionaries::coeff_to_roots;
    use crate::numeric::CoefficientAssignment;
    use vieta_integers::Rational;
    use vieta_poly::Symbol;

    fn ints(values: &[i64]) -> Vec<Rational> {
        values.iter().map(|&v| Rational::from(v)).collect()
    }

    #[test]
    fn test_cubic_fixed_display() {
        let fixed = calc_fixed(3, FormulaVariant::Canonical).unwrap();
        assert_eq!(
            fixed.to_string(),
            "[e1^2 - 3*e2, -e1*e2 + 9*e3, -3*e1*e3 + e2^2]"
        );
    }

    #[test]
    fn test_quartic_regression_values() {
        // x^4 + 7x^3 - 6x^2 - 2x + 1
        let terms = calc_vieta_sum(4, FormulaVariant::Canonical).unwrap();
        let assignment = CoefficientAssignment::from_values(ints(&[1, 7, -6, -2, 1]));
        let values = assignment.evaluate_all(&terms.terms).unwrap();
        assert_eq!(values, ints(&[-495, 450, 90, -45]));
    }

    #[test]
    fn test_vieta_degree_limit() {
        assert_eq!(
            calc_vieta_sum(9, FormulaVariant::Canonical).unwrap_err(),
            ResolventError::DegreeOutOfRange { degree: 9, max: 8 }
        );
        assert!(calc_fixed(9, FormulaVariant::Canonical).is_ok());
    }

    #[test]
    fn test_vieta_round_trip() {
        for j in 3..=5 {
            let vieta = calc_vieta_sum(j, FormulaVariant::Canonical).unwrap();
            let back = coeff_to_roots(&Symbols::new(j), j).unwrap();
            let via_vieta: Vec<Poly> = vieta.terms.iter().map(|t| t.substitute(&back)).collect();
            assert_eq!(via_vieta, rootis_expanded(j, FormulaVariant::Canonical).unwrap());
        }
    }

    #[test]
    fn test_original_is_first_intermediate() {
        let original = common_calc_original(5, FormulaVariant::Canonical).unwrap();
        let states = common_calc_intermediates(5, FormulaVariant::Canonical).unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0], original);
        assert_eq!(
            states.last(),
            Some(&calc_fixed(5, FormulaVariant::Canonical).unwrap())
        );
        assert_eq!(original.powers[0], 6);
    }

    #[test]
    fn test_rootis_factorization_expands() {
        let expanded = rootis_expanded(3, FormulaVariant::Canonical).unwrap();
        let factored = calc_rootis(3, FormulaVariant::Canonical).unwrap();
        for (p, f) in expanded.iter().zip(&factored) {
            assert_eq!(&f.expand(), p);
            assert!(!p.contains(Symbol::Marker));
        }
    }

    #[test]
    fn test_quartic_root_factors() {
        let expanded = rootis_expanded(4, FormulaVariant::Canonical).unwrap();
        let factored = calc_rootis(4, FormulaVariant::Canonical).unwrap();
        let counts: Vec<usize> = factored.iter().map(|f| f.factors.len()).collect();
        assert_eq!(counts, vec![3, 1, 1, 3]);

        // e1^3 - 4 e1 e2 + 8 e3 splits into three linear forms
        assert!(factored[0].factors.iter().all(|pf| pf.factor.total_degree() == 1));
        for (p, f) in expanded.iter().zip(&factored) {
            assert_eq!(&f.expand(), p);
        }
    }

    #[test]
    fn test_quadratic_discriminant() {
        // j = 2: a single residue term e1^2 - 4 e2 = (x0 - x1)^2
        let fixed = calc_fixed(2, FormulaVariant::Canonical).unwrap();
        assert_eq!(fixed.powers, vec![0]);
        assert_eq!(fixed.to_string(), "[e1^2 - 4*e2]");

        let factored = calc_rootis(2, FormulaVariant::Canonical).unwrap();
        assert_eq!(factored[0].factors.len(), 1);
        assert_eq!(factored[0].factors[0].multiplicity, 2);
    }

    #[test]
    fn test_batch_matches_serial() {
        let batch = calc_fixed_batch(&[2, 3, 4, 5], FormulaVariant::Halved);
        for (j, result) in (2..=5).zip(batch) {
            assert_eq!(result.unwrap(), calc_fixed(j, FormulaVariant::Halved).unwrap());
        }
    }

    #[test]
    fn test_roots_of_unity_view() {
        // at the cube roots of unity e1 = e2 = 0, so only the residue survives
        let values = calc_roots_of_unity(3, FormulaVariant::Canonical).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].to_rational(), Some(Rational::from(0)));
        assert_eq!(values[1].to_rational(), Some(Rational::from(9)));
        assert_eq!(values[2].to_rational(), Some(Rational::from(0)));
    }
}

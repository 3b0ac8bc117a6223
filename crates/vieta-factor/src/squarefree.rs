//! Squarefree factorization over Z.
//!
//! Yun's algorithm runs over Q; each factor is then scaled back to a
//! primitive integer polynomial with positive leading coefficient, and
//! the integer content absorbs the remaining constant (Gauss's lemma).

use vieta_integers::Integer;
use vieta_poly::algorithms::{content, squarefree_decomposition};
use vieta_poly::DensePoly;

/// A squarefree factor with its multiplicity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor {
    /// Primitive squarefree factor with positive leading coefficient.
    pub factor: DensePoly<Integer>,
    /// Multiplicity.
    pub multiplicity: u32,
}

/// `content · Π factor^multiplicity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactorization {
    /// Signed integer content.
    pub content: Integer,
    /// Pairwise coprime squarefree factors by increasing multiplicity.
    pub factors: Vec<SquarefreeFactor>,
}

/// Computes the squarefree factorization of an integer polynomial.
#[must_use]
pub fn squarefree_factorization(f: &DensePoly<Integer>) -> SquarefreeFactorization {
    if f.degree() == 0 {
        return SquarefreeFactorization {
            content: f.coeff(0),
            factors: Vec::new(),
        };
    }

    let decomposition = squarefree_decomposition(&f.to_rational());
    let factors = decomposition
        .factors
        .iter()
        .map(|sf| SquarefreeFactor {
            factor: sf.factor.to_primitive_integer(),
            multiplicity: sf.multiplicity,
        })
        .collect();

    let c = content(f);
    let content = if f.leading_coeff().is_negative() { -c } else { c };

    SquarefreeFactorization { content, factors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squarefree_input() {
        let f = DensePoly::from_i64s(&[-2, 0, 0, 1]);
        let sf = squarefree_factorization(&f);
        assert_eq!(sf.content, Integer::new(1));
        assert_eq!(sf.factors.len(), 1);
        assert_eq!(sf.factors[0].factor, f);
    }

    #[test]
    fn test_repeated_factor_with_content() {
        // -6 (x + 1)^2 (2x - 1)
        let f = DensePoly::from_i64s(&[-6])
            .mul(&DensePoly::from_i64s(&[1, 1]).pow(2))
            .mul(&DensePoly::from_i64s(&[-1, 2]));
        let sf = squarefree_factorization(&f);

        assert_eq!(sf.content, Integer::new(-6));
        assert_eq!(
            sf.factors,
            vec![
                SquarefreeFactor {
                    factor: DensePoly::from_i64s(&[-1, 2]),
                    multiplicity: 1,
                },
                SquarefreeFactor {
                    factor: DensePoly::from_i64s(&[1, 1]),
                    multiplicity: 2,
                },
            ]
        );
    }
}

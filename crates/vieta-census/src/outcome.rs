//! Per-polynomial classification results.

use vieta_factor::is_irreducible;
use vieta_galois::{galois_group, GaloisGroup};
use vieta_integers::Integer;
use vieta_poly::DensePoly;

/// A polynomial together with its Galois group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedPolynomial {
    /// The polynomial.
    pub polynomial: DensePoly<Integer>,
    /// Whether it is irreducible over Q (always true for census output).
    pub irreducible: bool,
    /// Its Galois group.
    pub group: GaloisGroup,
}

impl ClassifiedPolynomial {
    /// The full PARI-style group name, e.g. `C(4) = 4`.
    #[must_use]
    pub fn full_label(&self) -> &'static str {
        self.group.name
    }

    /// The bucket the polynomial belongs to, e.g. `C(4)`.
    #[must_use]
    pub fn bucket(&self) -> &'static str {
        self.group.label()
    }

    /// The line written to the bucket file.
    #[must_use]
    pub fn line(&self) -> String {
        self.polynomial.to_string()
    }
}

/// What became of one enumerated polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Irreducible, with a Galois group.
    Classified(ClassifiedPolynomial),
    /// Factors over Q; filtered out.
    Reducible,
    /// Irreducible, but the group could not be determined.
    Failed {
        /// Why classification failed.
        reason: String,
    },
}

impl Outcome {
    /// The classified polynomial, if any.
    #[must_use]
    pub fn classified(&self) -> Option<&ClassifiedPolynomial> {
        match self {
            Self::Classified(c) => Some(c),
            _ => None,
        }
    }
}

/// Runs the irreducibility filter and the Galois classification.
#[must_use]
pub fn classify_polynomial(f: &DensePoly<Integer>) -> Outcome {
    if !is_irreducible(f) {
        return Outcome::Reducible;
    }
    match galois_group(f) {
        Ok(group) => Outcome::Classified(ClassifiedPolynomial {
            polynomial: f.clone(),
            irreducible: true,
            group,
        }),
        Err(e) => Outcome::Failed {
            reason: e.to_string(),
        },
    }
}

//! Transitive groups of degree at most five and their labels.
//!
//! Names follow PARI's `polgalois` output, including the `=`-qualified
//! forms such as `C(4) = 4`; [`normalize_label`] strips the qualifier.

use std::fmt;

/// A transitive permutation group, as returned by classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GaloisGroup {
    /// Degree of the permutation action.
    pub degree: u32,
    /// Group order.
    pub order: u32,
    /// Whether the group lies in the alternating group.
    pub even: bool,
    /// Index in the transitive group table of its degree (the `T` number).
    pub transitive_id: u32,
    /// PARI-style name.
    pub name: &'static str,
}

const fn group(
    degree: u32,
    order: u32,
    even: bool,
    transitive_id: u32,
    name: &'static str,
) -> GaloisGroup {
    GaloisGroup {
        degree,
        order,
        even,
        transitive_id,
        name,
    }
}

impl GaloisGroup {
    /// Trivial group of a linear polynomial.
    pub const S1: Self = group(1, 1, true, 1, "S1");
    /// Group of an irreducible quadratic.
    pub const S2: Self = group(2, 2, false, 1, "S2");

    /// Cyclic group of order 3.
    pub const A3: Self = group(3, 3, true, 1, "A3");
    /// Symmetric group on 3 letters.
    pub const S3: Self = group(3, 6, false, 2, "S3");

    /// Cyclic group of order 4.
    pub const C4: Self = group(4, 4, false, 1, "C(4) = 4");
    /// Klein four-group.
    pub const V4: Self = group(4, 4, true, 2, "E(4) = 2[x]2");
    /// Dihedral group of order 8.
    pub const D4: Self = group(4, 8, false, 3, "D(4)");
    /// Alternating group on 4 letters.
    pub const A4: Self = group(4, 12, true, 4, "A4");
    /// Symmetric group on 4 letters.
    pub const S4: Self = group(4, 24, false, 5, "S4");

    /// Cyclic group of order 5.
    pub const C5: Self = group(5, 5, true, 1, "C(5) = 5");
    /// Dihedral group of order 10.
    pub const D5: Self = group(5, 10, true, 2, "D(5) = 5:2");
    /// Frobenius group of order 20.
    pub const F5: Self = group(5, 20, false, 3, "F(5) = 5:4");
    /// Alternating group on 5 letters.
    pub const A5: Self = group(5, 60, true, 4, "A5");
    /// Symmetric group on 5 letters.
    pub const S5: Self = group(5, 120, false, 5, "S5");

    /// Every group the classifier can return, by degree then `T` number.
    pub const ALL: [Self; 14] = [
        Self::S1,
        Self::S2,
        Self::A3,
        Self::S3,
        Self::C4,
        Self::V4,
        Self::D4,
        Self::A4,
        Self::S4,
        Self::C5,
        Self::D5,
        Self::F5,
        Self::A5,
        Self::S5,
    ];

    /// The name with any `=` qualifier removed.
    #[must_use]
    pub fn label(&self) -> &'static str {
        normalize_label(self.name)
    }

    /// Looks a group up by full or normalised name.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize_label(label);
        Self::ALL.into_iter().find(|g| g.label() == wanted)
    }

    /// Whether the group is abelian.
    #[must_use]
    pub fn is_abelian(&self) -> bool {
        self.order == self.degree || matches!(self.name, "E(4) = 2[x]2")
    }
}

impl fmt::Display for GaloisGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Bucket name for a group label: everything before the first `=`, trimmed.
///
/// ```
/// use vieta_galois::normalize_label;
/// assert_eq!(normalize_label("C3=3"), "C3");
/// assert_eq!(normalize_label("C(4) = 4"), "C(4)");
/// assert_eq!(normalize_label("S5"), "S5");
/// ```
#[must_use]
pub fn normalize_label(label: &str) -> &str {
    label
        .split_once('=')
        .map_or(label, |(head, _)| head)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("C3=3"), "C3");
        assert_eq!(normalize_label("E(4) = 2[x]2"), "E(4)");
        assert_eq!(normalize_label("  A4 "), "A4");
        assert_eq!(normalize_label("=x"), "");
    }

    #[test]
    fn test_orders_and_parity() {
        for g in GaloisGroup::ALL {
            assert_eq!(g.order % g.degree, 0, "{g} is not transitive");
        }
        assert!(GaloisGroup::A3.even && !GaloisGroup::S3.even);
        assert!(GaloisGroup::D5.even && !GaloisGroup::F5.even);
    }

    #[test]
    fn test_lookup_by_label() {
        assert_eq!(GaloisGroup::from_label("D(5)"), Some(GaloisGroup::D5));
        assert_eq!(GaloisGroup::from_label("C(4) = 4"), Some(GaloisGroup::C4));
        assert_eq!(GaloisGroup::from_label("M11"), None);
    }

    #[test]
    fn test_abelian() {
        assert!(GaloisGroup::V4.is_abelian());
        assert!(GaloisGroup::C5.is_abelian());
        assert!(!GaloisGroup::D4.is_abelian());
    }
}

//! Typed variable handles.
//!
//! Every variable a derivation touches is one of four kinds. The kinds are
//! distinct types of handle, so the reduction marker and the first root
//! variable never compare equal even though both print as `x0`.

use std::fmt;

/// Names of the Vieta coefficient symbols, indexed by `k` in `e_k`.
pub const COEFF_NAMES: [&str; 9] = ["a", "b", "c", "d", "e_coef", "f", "g", "h", "i_coef"];

/// Largest degree whose Vieta coefficients all have names.
pub const MAX_VIETA_DEGREE: usize = COEFF_NAMES.len() - 1;

/// Largest degree whose symbols fit the `u8` index.
pub const MAX_SYMBOL_DEGREE: usize = u8::MAX as usize;

/// A variable of a symbolic expression.
///
/// The derived order (marker, then e's, then coefficients, then roots)
/// is the variable order used by the lexicographic monomial order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// The reduction marker, printed `x0`.
    Marker,
    /// Elementary-symmetric variable `e_k`.
    E(u8),
    /// Vieta coefficient symbol `COEFF_NAMES[k]`.
    Coeff(u8),
    /// Root variable `x_k`.
    Root(u8),
}

impl Symbol {
    /// Index carried by `E`, `Coeff` and `Root`; `None` for the marker.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Symbol::Marker => None,
            Symbol::E(k) | Symbol::Coeff(k) | Symbol::Root(k) => Some(usize::from(k)),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Marker => write!(f, "x0"),
            Symbol::E(k) => write!(f, "e{k}"),
            Symbol::Coeff(k) => match COEFF_NAMES.get(usize::from(*k)) {
                Some(name) => write!(f, "{name}"),
                None => write!(f, "c{k}"),
            },
            Symbol::Root(k) => write!(f, "x{k}"),
        }
    }
}

/// Indexed symbol tables for one maximum degree.
///
/// Built once and indexed directly; symbols are never looked up by name.
#[derive(Clone, Debug)]
pub struct Symbols {
    e: Vec<Symbol>,
    roots: Vec<Symbol>,
    coeffs: Vec<Symbol>,
}

impl Symbols {
    /// Builds `e[0..=max_degree]`, `x[0..max_degree]` and the coefficient table.
    ///
    /// # Panics
    ///
    /// Panics if `max_degree` does not fit the `u8` symbol index.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(max_degree: usize) -> Self {
        assert!(
            max_degree <= MAX_SYMBOL_DEGREE,
            "degree {max_degree} does not fit a symbol index"
        );
        let max = max_degree as u8;
        Self {
            e: (0..=max).map(Symbol::E).collect(),
            roots: (0..max).map(Symbol::Root).collect(),
            coeffs: (0..COEFF_NAMES.len() as u8).map(Symbol::Coeff).collect(),
        }
    }

    /// The reduction marker.
    #[must_use]
    pub fn marker(&self) -> Symbol {
        Symbol::Marker
    }

    /// `e_k`.
    ///
    /// # Panics
    ///
    /// Panics if `k` exceeds the table's maximum degree.
    #[must_use]
    pub fn e(&self, k: usize) -> Symbol {
        self.e[k]
    }

    /// Root variable `x_k`.
    ///
    /// # Panics
    ///
    /// Panics if `k` is not below the table's maximum degree.
    #[must_use]
    pub fn root(&self, k: usize) -> Symbol {
        self.roots[k]
    }

    /// Vieta coefficient symbol for `e_k`, `None` past the name table.
    #[must_use]
    pub fn coeff(&self, k: usize) -> Option<Symbol> {
        self.coeffs.get(k).copied()
    }

    /// All root variables.
    #[must_use]
    pub fn roots(&self) -> &[Symbol] {
        &self.roots
    }

    /// The largest supported `k` in `e_k`.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.e.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_is_not_a_root() {
        let symbols = Symbols::new(3);
        assert_ne!(symbols.marker(), symbols.root(0));
        assert_eq!(symbols.marker().to_string(), symbols.root(0).to_string());
    }

    #[test]
    fn test_tables() {
        let symbols = Symbols::new(4);
        assert_eq!(symbols.max_degree(), 4);
        assert_eq!(symbols.e(4), Symbol::E(4));
        assert_eq!(symbols.roots().len(), 4);
        assert_eq!(symbols.coeff(4).map(|s| s.to_string()), Some("e_coef".into()));
        assert_eq!(symbols.coeff(9), None);
    }
}

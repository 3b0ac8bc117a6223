//! Substitution dictionaries over the indexed symbol tables.

use vieta_integers::Rational;
use vieta_poly::{Poly, Substitution, Symbols, MAX_VIETA_DEGREE};

use crate::error::ResolventError;

/// `e_k → e_k(x0, …, x_{deg-1})` for `k` in `0..=deg`.
#[must_use]
pub fn ele_dict(symbols: &Symbols, deg: usize) -> Substitution {
    elementary_symmetric(symbols, deg)
        .into_iter()
        .enumerate()
        .map(|(k, value)| (symbols.e(k), value))
        .collect()
}

/// The elementary symmetric polynomials `[e_0, …, e_deg]` in the roots.
///
/// Built from the coefficients of `Π (1 + x_i t)`, one root at a time.
#[must_use]
pub fn elementary_symmetric(symbols: &Symbols, deg: usize) -> Vec<Poly> {
    let mut es = vec![Poly::zero(); deg + 1];
    es[0] = Poly::one();
    for i in 0..deg {
        let root = Poly::var(symbols.root(i));
        for k in (1..=i + 1).rev() {
            es[k] = &es[k] + &(&es[k - 1] * &root);
        }
    }
    es
}

/// `e_k → (-1)^k · coeff_k` for `k` in `0..=deg`.
///
/// # Errors
///
/// Returns [`ResolventError::DegreeOutOfRange`] when `deg` exceeds the
/// coefficient name table.
pub fn vieta_dict(symbols: &Symbols, deg: usize) -> Result<Substitution, ResolventError> {
    (0..=deg)
        .map(|k| {
            let coeff = symbols.coeff(k).ok_or(ResolventError::DegreeOutOfRange {
                degree: deg,
                max: MAX_VIETA_DEGREE,
            })?;
            Ok((symbols.e(k), signed(k, Poly::var(coeff))))
        })
        .collect()
}

/// `coeff_k → (-1)^k · e_k(roots)`, the inverse direction of [`vieta_dict`]
/// composed with [`ele_dict`].
///
/// # Errors
///
/// Returns [`ResolventError::DegreeOutOfRange`] when `deg` exceeds the
/// coefficient name table.
pub fn coeff_to_roots(symbols: &Symbols, deg: usize) -> Result<Substitution, ResolventError> {
    let es = elementary_symmetric(symbols, deg);
    es.into_iter()
        .enumerate()
        .map(|(k, value)| {
            let coeff = symbols.coeff(k).ok_or(ResolventError::DegreeOutOfRange {
                degree: deg,
                max: MAX_VIETA_DEGREE,
            })?;
            Ok((coeff, signed(k, value)))
        })
        .collect()
}

fn signed(k: usize, p: Poly) -> Poly {
    if k % 2 == 0 {
        p
    } else {
        p.scale(&Rational::from(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vieta_poly::Symbol;

    #[test]
    fn test_elementary_symmetric_of_three() {
        let symbols = Symbols::new(3);
        let es = elementary_symmetric(&symbols, 3);
        let x = |k: u8| Poly::var(Symbol::Root(k));

        assert_eq!(es[1], &(&x(0) + &x(1)) + &x(2));
        assert_eq!(
            es[2],
            &(&(&x(0) * &x(1)) + &(&x(0) * &x(2))) + &(&x(1) * &x(2))
        );
        assert_eq!(es[3], &(&x(0) * &x(1)) * &x(2));
    }

    #[test]
    fn test_vieta_signs() {
        let symbols = Symbols::new(4);
        let dict = vieta_dict(&symbols, 4).unwrap();
        assert_eq!(dict[&Symbol::E(1)], -Poly::var(Symbol::Coeff(1)));
        assert_eq!(dict[&Symbol::E(4)], Poly::var(Symbol::Coeff(4)));
    }

    #[test]
    fn test_vieta_out_of_range() {
        let symbols = Symbols::new(9);
        assert_eq!(
            vieta_dict(&symbols, 9).unwrap_err(),
            ResolventError::DegreeOutOfRange { degree: 9, max: 8 }
        );
    }

    #[test]
    fn test_vieta_then_roots_is_ele() {
        // e_k → (-1)^k coeff_k → e_k(roots)
        let symbols = Symbols::new(3);
        let vieta = vieta_dict(&symbols, 3).unwrap();
        let back = coeff_to_roots(&symbols, 3).unwrap();
        let ele = ele_dict(&symbols, 3);
        for k in 0..=3 {
            let e = symbols.e(k);
            assert_eq!(vieta[&e].substitute(&back), ele[&e]);
        }
    }
}

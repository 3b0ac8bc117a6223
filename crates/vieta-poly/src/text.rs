//! Text form of univariate integer polynomials.
//!
//! Bucket files hold one polynomial per line in the `x^3 + 7*x^2 - 2`
//! style written by [`DensePoly`]'s `Display`. The parser also accepts
//! `**` for powers, implicit products (`3x^2`) and arbitrary spacing.

use num_traits::Zero;
use std::collections::BTreeMap;
use thiserror::Error;

use vieta_integers::Integer;

use crate::dense::DensePoly;

/// Errors from [`parse_univariate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input had no terms.
    #[error("empty polynomial")]
    Empty,
    /// A term could not be read.
    #[error("malformed term `{term}`")]
    MalformedTerm {
        /// The offending term.
        term: String,
    },
    /// Two different variable names appeared.
    #[error("expected variable `{expected}`, found `{found}`")]
    MixedVariables {
        /// The first variable seen.
        expected: String,
        /// The conflicting variable.
        found: String,
    },
    /// An exponent too large to represent.
    #[error("exponent `{0}` out of range")]
    Exponent(String),
}

/// Formats an integer polynomial in the bucket-file style.
#[must_use]
pub fn format_univariate(p: &DensePoly<Integer>) -> String {
    p.to_string()
}

/// Parses an integer polynomial in one variable.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is empty, a term is malformed,
/// or more than one variable name occurs.
pub fn parse_univariate(text: &str) -> Result<DensePoly<Integer>, ParseError> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace("**", "^");
    if compact.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut variable: Option<String> = None;
    let mut terms: BTreeMap<usize, Integer> = BTreeMap::new();

    for (negative, body) in split_terms(&compact) {
        let (coeff, var, exp) = parse_term(body)?;

        if let Some(name) = var {
            match &variable {
                Some(expected) if *expected != name => {
                    return Err(ParseError::MixedVariables {
                        expected: expected.clone(),
                        found: name,
                    });
                }
                Some(_) => {}
                None => variable = Some(name),
            }
        }

        let coeff = if negative { -coeff } else { coeff };
        let slot = terms.entry(exp).or_insert_with(Integer::zero);
        *slot = &*slot + &coeff;
    }

    let degree = terms.keys().next_back().copied().unwrap_or(0);
    let mut coeffs = vec![Integer::zero(); degree + 1];
    for (exp, c) in terms {
        coeffs[exp] = c;
    }
    Ok(DensePoly::new(coeffs))
}

/// Splits at top-level signs; yields `(negative, body)`.
fn split_terms(s: &str) -> Vec<(bool, &str)> {
    let mut out = Vec::new();
    let mut negative = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        if (c == '+' || c == '-') && i > start {
            // A sign right after `^` belongs to the exponent, which the
            // term parser then rejects.
            if !s[..i].ends_with('^') {
                out.push((negative, &s[start..i]));
                negative = c == '-';
                start = i + 1;
            }
        } else if (c == '+' || c == '-') && i == start {
            negative ^= c == '-';
            start = i + 1;
        }
    }
    out.push((negative, &s[start..]));
    out
}

fn parse_term(term: &str) -> Result<(Integer, Option<String>, usize), ParseError> {
    let malformed = || ParseError::MalformedTerm {
        term: term.to_string(),
    };

    let digits_end = term
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(term.len());
    let (digits, rest) = term.split_at(digits_end);

    let coeff = if digits.is_empty() {
        Integer::new(1)
    } else {
        digits.parse::<Integer>().map_err(|_| malformed())?
    };

    if rest.is_empty() {
        return if digits.is_empty() {
            Err(malformed())
        } else {
            Ok((coeff, None, 0))
        };
    }

    let rest = match rest.strip_prefix('*') {
        Some(r) if !digits.is_empty() => r,
        Some(_) => return Err(malformed()),
        None => rest,
    };

    let name_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let (name, power) = rest.split_at(name_end);
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(malformed());
    }

    let exp = match power.strip_prefix('^') {
        None if power.is_empty() => 1,
        None => return Err(malformed()),
        Some(e) if !e.is_empty() && e.chars().all(|c| c.is_ascii_digit()) => e
            .parse::<usize>()
            .map_err(|_| ParseError::Exponent(e.to_string()))?,
        Some(_) => return Err(malformed()),
    };

    Ok((coeff, Some(name.to_string()), exp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_form() {
        let p = parse_univariate("x^3 + 7*x^2 - x + 1").unwrap();
        assert_eq!(p, DensePoly::from_i64s(&[1, -1, 7, 1]));
        assert_eq!(format_univariate(&p), "x^3 + 7*x^2 - x + 1");
    }

    #[test]
    fn test_parse_variants() {
        let expected = DensePoly::from_i64s(&[-2, 0, 3, 1]);
        assert_eq!(parse_univariate("x**3+3x**2-2").unwrap(), expected);
        assert_eq!(parse_univariate("  -2 + 3*x^2 + x^3 ").unwrap(), expected);
        assert_eq!(parse_univariate("-x").unwrap(), DensePoly::from_i64s(&[0, -1]));
        assert_eq!(parse_univariate("5").unwrap(), DensePoly::from_i64s(&[5]));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_univariate("   "), Err(ParseError::Empty));
        assert!(matches!(
            parse_univariate("x^2 + y"),
            Err(ParseError::MixedVariables { .. })
        ));
        assert!(matches!(
            parse_univariate("x^ + 1"),
            Err(ParseError::MalformedTerm { .. })
        ));
        assert!(parse_univariate("x^-2").is_err());
        assert!(parse_univariate("x + ").is_err());
    }
}

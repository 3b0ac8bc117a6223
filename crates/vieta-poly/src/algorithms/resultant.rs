//! Resultants and discriminants via the Sylvester matrix.
//!
//! The resultant of f and g is zero iff they share a common root. It is
//! the determinant of the Sylvester matrix, evaluated fraction-free with
//! the Bareiss algorithm so that integer inputs stay integral.

use vieta_rings::traits::EuclideanDomain;

use crate::dense::DensePoly;

/// Computes the resultant res(f, g) = lc(f)^deg(g) · Π g(α) over the roots α of f.
///
/// Returns zero if either polynomial is zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn resultant<R: EuclideanDomain>(f: &DensePoly<R>, g: &DensePoly<R>) -> R {
    if f.is_zero() || g.is_zero() {
        return R::zero();
    }

    let deg_f = f.degree();
    let deg_g = g.degree();

    if deg_f == 0 {
        return f.leading_coeff().pow(deg_g as u32);
    }
    if deg_g == 0 {
        return g.leading_coeff().pow(deg_f as u32);
    }

    determinant(sylvester_matrix(f, g))
}

/// Builds the Sylvester matrix with descending coefficients.
///
/// The first deg(g) rows hold shifts of f, the next deg(f) rows shifts of g.
fn sylvester_matrix<R: EuclideanDomain>(f: &DensePoly<R>, g: &DensePoly<R>) -> Vec<Vec<R>> {
    let deg_f = f.degree();
    let deg_g = g.degree();
    let size = deg_f + deg_g;

    let mut matrix = vec![vec![R::zero(); size]; size];

    for i in 0..deg_g {
        for (j, coeff) in f.coeffs().iter().rev().enumerate() {
            matrix[i][i + j] = coeff.clone();
        }
    }
    for i in 0..deg_f {
        for (j, coeff) in g.coeffs().iter().rev().enumerate() {
            matrix[deg_g + i][i + j] = coeff.clone();
        }
    }

    matrix
}

/// Determinant by Bareiss fraction-free elimination.
///
/// Every division performed is exact in an integral domain.
fn determinant<R: EuclideanDomain>(mut m: Vec<Vec<R>>) -> R {
    let n = m.len();
    if n == 0 {
        return R::one();
    }

    let mut negate = false;
    let mut prev_pivot = R::one();

    for k in 0..n - 1 {
        let Some(pivot_row) = (k..n).find(|&i| !m[i][k].is_zero()) else {
            return R::zero();
        };

        if pivot_row != k {
            m.swap(k, pivot_row);
            negate = !negate;
        }

        let pivot = m[k][k].clone();
        for i in k + 1..n {
            for j in k + 1..n {
                let numerator = m[i][j].clone() * pivot.clone() - m[i][k].clone() * m[k][j].clone();
                m[i][j] = numerator.div_exact(&prev_pivot);
            }
            m[i][k] = R::zero();
        }
        prev_pivot = pivot;
    }

    let det = m[n - 1][n - 1].clone();
    if negate {
        -det
    } else {
        det
    }
}

/// Computes the discriminant disc(f) = (-1)^(n(n-1)/2) · res(f, f') / lc(f).
///
/// Zero for constants; 1 for linear polynomials.
#[must_use]
pub fn discriminant<R: EuclideanDomain>(f: &DensePoly<R>) -> R {
    let n = f.degree();
    if n == 0 {
        return R::zero();
    }

    let res = resultant(f, &f.derivative()).div_exact(f.leading_coeff());
    if (n * (n - 1) / 2) % 2 == 0 {
        res
    } else {
        -res
    }
}

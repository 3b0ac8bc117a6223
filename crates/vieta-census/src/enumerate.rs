//! Enumeration of monic polynomials with bounded coefficients.

use vieta_integers::Integer;
use vieta_poly::DensePoly;

/// All monic integer polynomials `x^deg + a_{deg-1} x^{deg-1} + … + a_0`
/// with every `a_i` in `[-n, n]`.
///
/// Tuples `(a_{deg-1}, …, a_0)` are produced in lexicographic order, so
/// the first polynomial is the one with every coefficient `-n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoefficientBox {
    range: i64,
    degree: usize,
    constant_one: bool,
}

impl CoefficientBox {
    /// The full box `[-n, n]^deg`.
    #[must_use]
    pub fn new(n: u32, deg: usize) -> Self {
        Self {
            range: i64::from(n),
            degree: deg,
            constant_one: false,
        }
    }

    /// Restricts to polynomials with constant term 1.
    #[must_use]
    pub fn with_constant_one(mut self, constant_one: bool) -> Self {
        self.constant_one = constant_one;
        self
    }

    /// The polynomial degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of polynomials enumerated, saturating at `u64::MAX`.
    #[must_use]
    pub fn len(&self) -> u64 {
        let width = (2 * self.range + 1).unsigned_abs();
        let free = if self.constant_one && self.degree > 0 {
            self.degree - 1
        } else {
            self.degree
        };
        if self.constant_one && self.degree > 0 && self.range == 0 {
            return 0;
        }
        u32::try_from(free)
            .ok()
            .and_then(|free| width.checked_pow(free))
            .unwrap_or(u64::MAX)
    }

    /// True when the box holds no polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coefficient tuples `(a_{deg-1}, …, a_0)` in lexicographic order.
    #[must_use]
    pub fn tuples(&self) -> Tuples {
        let empty = self.constant_one && self.degree > 0 && self.range == 0;
        Tuples {
            current: (!empty).then(|| self.first()),
            range: self.range,
            constant_one: self.constant_one,
        }
    }

    /// The polynomials of the box, in tuple order.
    pub fn polynomials(&self) -> impl Iterator<Item = DensePoly<Integer>> + Send {
        let degree = self.degree;
        self.tuples().map(move |t| monic_from_tuple(&t, degree))
    }

    fn first(&self) -> Vec<i64> {
        let mut tuple = vec![-self.range; self.degree];
        if self.constant_one {
            if let Some(last) = tuple.last_mut() {
                *last = 1;
            }
        }
        tuple
    }
}

/// Iterator over the coefficient tuples of a [`CoefficientBox`].
#[derive(Clone, Debug)]
pub struct Tuples {
    current: Option<Vec<i64>>,
    range: i64,
    constant_one: bool,
}

impl Iterator for Tuples {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current.take()?;
        let mut next = out.clone();
        // The constant slot is pinned when filtering on constant term 1.
        let free = if self.constant_one {
            next.len().saturating_sub(1)
        } else {
            next.len()
        };
        for slot in next[..free].iter_mut().rev() {
            if *slot < self.range {
                *slot += 1;
                self.current = Some(next);
                return Some(out);
            }
            *slot = -self.range;
        }
        Some(out)
    }
}

/// `x^deg + Σ tuple[i] x^{deg-1-i}`.
#[must_use]
pub fn monic_from_tuple(tuple: &[i64], degree: usize) -> DensePoly<Integer> {
    let mut coeffs: Vec<Integer> = tuple.iter().rev().map(|&a| Integer::new(a)).collect();
    coeffs.resize(degree, Integer::new(0));
    coeffs.push(Integer::new(1));
    DensePoly::new(coeffs)
}

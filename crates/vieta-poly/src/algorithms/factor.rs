//! Factorisations of multivariate polynomials over Q.
//!
//! [`Factorization`] is shared with the irreducible factorisation in
//! `vieta-factor`. [`squarefree_factor`] splits off a rational unit and
//! the monomial content, then applies Yun's algorithm recursively: in the
//! smallest variable first, with the content in that variable factored
//! the same way.

use num_traits::{One, Zero};
use std::fmt;

use vieta_integers::Rational;

use crate::algorithms::gcd::{content_in, gcd, primitive_part_in};
use crate::monomial::Monomial;
use crate::sparse::Poly;
use crate::symbol::Symbol;

/// One factor with its multiplicity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PolyFactor {
    /// Multiplicity of the factor.
    pub multiplicity: u32,
    /// A primitive factor with positive leading coefficient.
    pub factor: Poly,
}

/// `unit * Π factor^multiplicity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization {
    /// Rational unit.
    pub unit: Rational,
    /// Pairwise coprime factors sorted by multiplicity.
    pub factors: Vec<PolyFactor>,
}

impl Factorization {
    /// Normalises `factors` of `p` and derives the unit.
    ///
    /// Each factor is made primitive with positive leading coefficient,
    /// and the list is sorted.
    #[must_use]
    pub fn from_factors(p: &Poly, mut factors: Vec<PolyFactor>) -> Self {
        if p.is_zero() {
            return Self {
                unit: Rational::zero(),
                factors: Vec::new(),
            };
        }
        for pf in &mut factors {
            pf.factor = pf.factor.primitive_part();
        }
        factors.sort();

        let denominator = factors.iter().fold(Rational::one(), |acc, pf| {
            acc * pf.factor.leading_coeff().pow(pf.multiplicity)
        });
        Self {
            unit: p.leading_coeff() / denominator,
            factors,
        }
    }

    /// Total number of factors counted with multiplicity.
    #[must_use]
    pub fn count(&self) -> usize {
        self.factors.iter().map(|pf| pf.multiplicity as usize).sum()
    }

    /// Multiplies the factorisation back out.
    #[must_use]
    pub fn expand(&self) -> Poly {
        self.factors
            .iter()
            .fold(Poly::constant(self.unit.clone()), |acc, f| {
                &acc * &f.factor.pow(f.multiplicity)
            })
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "{}", self.unit);
        }

        let mut first = true;
        if !self.unit.is_one() {
            if (-&self.unit).is_one() {
                write!(f, "-")?;
            } else {
                write!(f, "{} * ", self.unit)?;
            }
        }
        for pf in &self.factors {
            if !first {
                write!(f, " * ")?;
            }
            first = false;
            let single = pf.factor.len() == 1;
            match (single, pf.multiplicity) {
                (true, 1) => write!(f, "{}", pf.factor)?,
                (true, m) => write!(f, "{}^{m}", pf.factor)?,
                (false, 1) => write!(f, "({})", pf.factor)?,
                (false, m) => write!(f, "({})^{m}", pf.factor)?,
            }
        }
        Ok(())
    }
}

/// Squarefree factorisation of `p`.
///
/// The factors are squarefree and pairwise coprime but not necessarily
/// irreducible. The zero polynomial has unit 0 and no factors.
#[must_use]
pub fn squarefree_factor(p: &Poly) -> Factorization {
    if p.is_zero() {
        return Factorization::from_factors(p, Vec::new());
    }

    let mut factors = Vec::new();

    let m = p.monomial_content();
    for (s, e) in m.factors() {
        factors.push(PolyFactor {
            multiplicity: e,
            factor: Poly::var(s),
        });
    }

    let rest = strip(p, &m).primitive_part();
    squarefree_factors(&rest, &mut factors);
    Factorization::from_factors(p, factors)
}

fn squarefree_factors(q: &Poly, out: &mut Vec<PolyFactor>) {
    let Some(&v) = q.symbols().iter().next() else {
        return;
    };

    let cont = content_in(q, v);
    if !cont.is_constant() {
        squarefree_factors(&cont, out);
    }
    yun(&primitive_part_in(q, v), v, out);
}

/// Yun's algorithm in the variable `v` for a polynomial primitive in `v`.
fn yun(f: &Poly, v: Symbol, out: &mut Vec<PolyFactor>) {
    let f_prime = f.derivative(v);
    let g = gcd(f, &f_prime);

    let mut a = exact(f, &g);
    let mut b = exact(&f_prime, &g);
    let mut multiplicity = 1;

    loop {
        let c = &b - &a.derivative(v);

        if c.is_zero() {
            if !a.is_constant() {
                out.push(PolyFactor {
                    multiplicity,
                    factor: a,
                });
            }
            return;
        }

        let d = gcd(&a, &c);
        if !d.is_constant() {
            out.push(PolyFactor {
                multiplicity,
                factor: d.clone(),
            });
        }

        a = exact(&a, &d);
        b = exact(&c, &d);
        if a.is_constant() {
            return;
        }
        multiplicity += 1;
    }
}

fn strip(p: &Poly, m: &Monomial) -> Poly {
    let mut out = Poly::zero();
    for (n, c) in p.terms() {
        if let Some(q) = n.div(m) {
            out.add_term(q, c.clone());
        }
    }
    out
}

fn exact(a: &Poly, d: &Poly) -> Poly {
    let (q, r) = a.div_rem(d);
    debug_assert!(r.is_zero(), "inexact division in squarefree factorisation");
    q
}

impl Poly {
    /// Squarefree factorisation, see [`squarefree_factor`].
    #[must_use]
    pub fn squarefree_factor(&self) -> Factorization {
        squarefree_factor(self)
    }
}

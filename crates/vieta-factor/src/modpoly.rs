//! Dense polynomials over a small prime field.

use rand::Rng;

use vieta_integers::{Integer, PrimeField};
use vieta_poly::DensePoly;

/// A polynomial over F_p with coefficients in ascending order.
///
/// Invariant: no trailing zero coefficients; the zero polynomial has no
/// coefficients at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModPoly {
    field: PrimeField,
    coeffs: Vec<u64>,
}

impl ModPoly {
    /// Creates a polynomial from ascending coefficients, reducing them.
    #[must_use]
    pub fn new(field: PrimeField, coeffs: Vec<u64>) -> Self {
        let p = field.modulus();
        let mut coeffs: Vec<u64> = coeffs.into_iter().map(|c| c % p).collect();
        trim(&mut coeffs);
        Self { field, coeffs }
    }

    /// Reduces an integer polynomial modulo p.
    #[must_use]
    pub fn from_integer_poly(f: &DensePoly<Integer>, field: PrimeField) -> Self {
        let coeffs = f.coeffs().iter().map(|c| field.reduce(c)).collect();
        Self::new(field, coeffs)
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(field: PrimeField) -> Self {
        Self {
            field,
            coeffs: Vec::new(),
        }
    }

    /// The constant 1.
    #[must_use]
    pub fn one(field: PrimeField) -> Self {
        Self::new(field, vec![1])
    }

    /// The polynomial x.
    #[must_use]
    pub fn x(field: PrimeField) -> Self {
        Self::new(field, vec![0, 1])
    }

    /// A uniformly random polynomial of degree below `bound`.
    pub fn random<G: Rng>(field: PrimeField, bound: usize, rng: &mut G) -> Self {
        let p = field.modulus();
        let coeffs = (0..bound).map(|_| rng.gen_range(0..p)).collect();
        Self::new(field, coeffs)
    }

    /// The coefficient field.
    #[must_use]
    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// Coefficients in ascending order.
    #[must_use]
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree; zero for constants and for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Leading coefficient (0 for the zero polynomial).
    #[must_use]
    pub fn leading_coeff(&self) -> u64 {
        self.coeffs.last().copied().unwrap_or(0)
    }

    /// Sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let f = self.field;
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| f.add(self.coeff(i), other.coeff(i)))
            .collect();
        Self::new(f, coeffs)
    }

    /// Difference.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let f = self.field;
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| f.sub(self.coeff(i), other.coeff(i)))
            .collect();
        Self::new(f, coeffs)
    }

    /// Product.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.field);
        }
        let f = self.field;
        let mut coeffs = vec![0u64; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = f.add(coeffs[i + j], f.mul(a, b));
            }
        }
        Self::new(f, coeffs)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: u64) -> Self {
        let f = self.field;
        Self::new(f, self.coeffs.iter().map(|&a| f.mul(a, c)).collect())
    }

    /// Divides by the leading coefficient.
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.field.inv(self.leading_coeff()) {
            Some(inv) => self.scale(inv),
            None => self.clone(),
        }
    }

    /// Formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let f = self.field;
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| f.mul(c, (i as u64) % f.modulus()))
            .collect();
        Self::new(f, coeffs)
    }

    /// Quotient and remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let f = self.field;
        let Some(lead_inv) = f.inv(divisor.leading_coeff()) else {
            panic!("division by zero polynomial");
        };
        if self.coeffs.len() < divisor.coeffs.len() {
            return (Self::zero(f), self.clone());
        }

        let db = divisor.degree();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![0u64; rem.len() - db];

        for top in (db..rem.len()).rev() {
            let c = f.mul(rem[top], lead_inv);
            if c == 0 {
                continue;
            }
            let shift = top - db;
            for (i, &b) in divisor.coeffs.iter().enumerate() {
                rem[shift + i] = f.sub(rem[shift + i], f.mul(c, b));
            }
            quot[shift] = c;
        }

        rem.truncate(db);
        (Self::new(f, quot), Self::new(f, rem))
    }

    /// Remainder.
    #[must_use]
    pub fn rem(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Monic greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        a.monic()
    }

    /// Extended Euclid: returns `(g, s, t)` with `s*self + t*other = g` monic.
    #[must_use]
    pub fn ext_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let f = self.field;
        let (mut r0, mut r1) = (self.clone(), other.clone());
        let (mut s0, mut s1) = (Self::one(f), Self::zero(f));
        let (mut t0, mut t1) = (Self::zero(f), Self::one(f));

        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1);
            let s = s0.sub(&q.mul(&s1));
            let t = t0.sub(&q.mul(&t1));
            r0 = std::mem::replace(&mut r1, r);
            s0 = std::mem::replace(&mut s1, s);
            t0 = std::mem::replace(&mut t1, t);
        }

        match f.inv(r0.leading_coeff()) {
            Some(inv) => (r0.scale(inv), s0.scale(inv), t0.scale(inv)),
            None => (r0, s0, t0),
        }
    }

    /// `self^exp mod modulus` by repeated squaring.
    #[must_use]
    pub fn pow_mod(&self, mut exp: u64, modulus: &Self) -> Self {
        let mut result = Self::one(self.field).rem(modulus);
        let mut base = self.rem(modulus);
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base).rem(modulus);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base).rem(modulus);
            }
        }
        result
    }

    /// Lifts the coefficients to integers in `[0, p)`.
    #[must_use]
    pub fn to_integer_poly(&self) -> DensePoly<Integer> {
        DensePoly::new(self.coeffs.iter().map(|&c| Integer::from(c)).collect())
    }

    fn coeff(&self, i: usize) -> u64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }
}

fn trim(coeffs: &mut Vec<u64>) {
    while coeffs.last() == Some(&0) {
        coeffs.pop();
    }
}

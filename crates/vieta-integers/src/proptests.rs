//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, PrimeField, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_prime() -> impl Strategy<Value = u64> {
        prop::sample::select(vec![2u64, 3, 5, 7, 11, 13, 101, 65_521, 1_000_003])
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        #[test]
        fn gcd_with_zero_is_abs(a in small_int()) {
            let a = Integer::new(a);
            prop_assert_eq!(a.gcd(&Integer::zero()), a.abs());
            prop_assert_eq!(Integer::zero().gcd(&a), a.abs());
        }

        #[test]
        fn rem_euclid_in_range(a in small_int(), m in non_zero_int()) {
            let r = Integer::new(a).rem_euclid(&Integer::new(m));
            prop_assert!(!r.is_negative());
            prop_assert!(r < Integer::new(m).abs());
            prop_assert!(((Integer::new(a) - r) % Integer::new(m)).is_zero());
        }

        #[test]
        fn isqrt_brackets_value(n in 0i64..1_000_000_000i64) {
            let n = Integer::new(n);
            let r = n.isqrt().unwrap();
            prop_assert!(&r * &r <= n);
            let next = &r + &Integer::one();
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn squares_are_detected(a in small_int()) {
            let a = Integer::new(a);
            prop_assert_eq!((&a * &a).sqrt_exact(), Some(a.abs()));
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((&a * &a.recip()).is_one());
        }

        #[test]
        fn rational_gcd_divides_both(
            num_a in non_zero_int(),
            den_a in non_zero_int(),
            num_b in non_zero_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let g = a.gcd(&b);
            prop_assert!((&a / &g).is_integer());
            prop_assert!((&b / &g).is_integer());
        }

        #[test]
        fn field_inverse(p in small_prime(), a in 1u64..1_000_000u64) {
            let f = PrimeField::new(p);
            let a = a % p;
            prop_assume!(a != 0);
            let inv = f.inv(a).unwrap();
            prop_assert_eq!(f.mul(a, inv), 1);
        }

        #[test]
        fn field_fermat_little_theorem(p in small_prime(), a in 1u64..1_000_000u64) {
            let f = PrimeField::new(p);
            let a = a % p;
            prop_assume!(a != 0);
            prop_assert_eq!(f.pow(a, u128::from(p - 1)), 1);
        }

        #[test]
        fn field_reduce_matches_signed(p in small_prime(), a in small_int()) {
            let f = PrimeField::new(p);
            prop_assert_eq!(f.reduce(&Integer::new(a)), f.from_signed(a));
        }
    }
}

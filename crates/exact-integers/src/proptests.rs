//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for generating multi-limb decimal literals
    fn decimal_literal() -> impl Strategy<Value = String> {
        ("[+-]?", "[1-9][0-9]{0,40}").prop_map(|(sign, digits)| format!("{sign}{digits}"))
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn integer_mul_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_matches_native(a in any::<i32>(), b in any::<i32>()) {
            let big_a = Integer::new(i64::from(a));
            let big_b = Integer::new(i64::from(b));
            prop_assert_eq!((big_a.clone() + big_b.clone()).to_i64(), Some(i64::from(a) + i64::from(b)));
            prop_assert_eq!((big_a.clone() - big_b.clone()).to_i64(), Some(i64::from(a) - i64::from(b)));
            prop_assert_eq!((big_a * big_b).to_i64(), Some(i64::from(a) * i64::from(b)));
        }

        #[test]
        fn integer_string_round_trip(s in decimal_literal()) {
            let parsed: Integer = s.parse().expect("strategy emits valid literals");
            let rendered = parsed.to_string();
            let reparsed: Integer = rendered.parse().expect("display emits valid literals");
            prop_assert_eq!(&parsed, &reparsed);
            prop_assert_eq!(rendered, reparsed.to_string());
        }

        // Truncating division law: a == (a / b) * b + (a % b), and the
        // remainder takes the dividend's sign unless it is zero.
        #[test]
        fn integer_division_law(a in any::<i64>(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (q, r) = a.div_rem(&b).expect("divisor is non-zero");
            prop_assert_eq!(q * &b + r.clone(), a.clone());
            if !r.is_zero() {
                prop_assert_eq!(r.signum(), a.signum());
            }
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            // g should divide both a and b
            let rem_a = a % g.clone();
            let rem_b = b % g;
            prop_assert!(rem_a.is_zero());
            prop_assert!(rem_b.is_zero());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Rational field axioms and invariants

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).expect("non-zero denominator");
            let b = Rational::from_i64(num_b, den_b).expect("non-zero denominator");
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).expect("non-zero denominator");
            let b = Rational::from_i64(num_b, den_b).expect("non-zero denominator");
            prop_assert_eq!(a.clone() * b.clone(), b * a);
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
            let a = Rational::from_i64(num_a, den_a).expect("non-zero denominator");
            let b = Rational::from_i64(num_b, den_b).expect("non-zero denominator");
            let c = Rational::from_i64(num_c, den_c).expect("non-zero denominator");
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            use num_traits::One;
            let a = Rational::from_i64(num, den).expect("non-zero denominator");
            let inv = a.recip().expect("value is non-zero");
            prop_assert!((a * inv).is_one());
        }

        // Every observable rational is in lowest terms with a positive
        // denominator.
        #[test]
        fn rational_stays_normalized(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).expect("non-zero denominator");
            let b = Rational::from_i64(num_b, den_b).expect("non-zero denominator");

            let mut results = vec![a.clone() + b.clone(), a.clone() - b.clone(), a.clone() * b.clone()];
            if !b.is_zero() {
                results.push(a / b);
            }
            for r in results {
                prop_assert!(!r.denominator().is_negative());
                prop_assert!(!r.denominator().is_zero());
                let g = r.numerator().gcd(r.denominator());
                prop_assert!(g.to_i64() == Some(1) || r.numerator().is_zero());
            }
        }
    }
}

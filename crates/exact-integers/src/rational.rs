//! Exact rational numbers over [`Integer`].
//!
//! Rationals are always stored in lowest terms with a positive denominator;
//! the numerator carries the sign. Both invariants are restored after
//! construction and after every arithmetic operation, so derived equality
//! and hashing over the fields are sound.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::error::ArithmeticError;
use crate::integer::Integer;

/// An arbitrary precision rational number in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is
    /// zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let mut value = Self {
            numerator,
            denominator,
        };
        value.normalize();
        Ok(value)
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is
    /// zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    /// Returns the numerator; it carries the sign of the fraction.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator; it is always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.numerator.clone())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.numerator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let mut out = self.clone();
        out.numerator *= &rhs.denominator;
        out.denominator *= &rhs.numerator;
        out.normalize();
        Ok(out)
    }

    /// Renders the value as a decimal string with at most `precision`
    /// fractional digits, rounded half-up on the digit after the last one
    /// emitted.
    ///
    /// Fractional digits stop early when the expansion terminates; trailing
    /// zero digits and a bare trailing point are stripped. With
    /// `precision == 0` the value rounds to a whole number and no decimal
    /// point is ever emitted.
    #[must_use]
    pub fn as_decimal(&self, precision: usize) -> String {
        let ten = Integer::new(10);
        let five = Integer::new(5);

        let integer_part = &self.numerator / &self.denominator;
        let mut buf: Vec<u8> = Vec::new();
        if integer_part.is_zero() && self.is_negative() {
            // the integer part renders as an unsigned "0"
            buf.push(b'-');
        }

        let mut rem = self.numerator.abs();
        if precision == 0 {
            rem = rem % &self.denominator * &ten;
            let rounds_up = &rem / &self.denominator >= five;
            let rounded = if !rounds_up {
                integer_part
            } else if self.is_negative() && !integer_part.is_zero() {
                integer_part - Integer::one()
            } else {
                integer_part + Integer::one()
            };
            buf.extend_from_slice(rounded.to_string().as_bytes());
            return finish(buf);
        }

        buf.extend_from_slice(integer_part.to_string().as_bytes());
        buf.push(b'.');
        let mut emitted = 0;
        loop {
            rem %= &self.denominator;
            if rem.is_zero() || emitted == precision {
                break;
            }
            rem *= &ten;
            buf.extend_from_slice((&rem / &self.denominator).to_string().as_bytes());
            emitted += 1;
        }

        // one trial digit decides the half-up rounding
        rem *= &ten;
        if &rem / &self.denominator >= five {
            round_half_up(&mut buf);
        }

        while buf.last() == Some(&b'0') {
            buf.pop();
        }
        if buf.last() == Some(&b'.') {
            buf.pop();
        }
        finish(buf)
    }

    /// Converts to the nearest representable `f64`.
    ///
    /// The value is rendered at `f64::DIGITS` fractional digits and parsed
    /// back, so the conversion is lossy beyond that precision.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.as_decimal(f64::DIGITS as usize)
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Moves any negative sign onto the numerator and reduces by the gcd.
    ///
    /// Callers guarantee a non-zero denominator. A zero numerator reduces
    /// to the canonical 0/1 because `gcd(0, d) == d`.
    fn normalize(&mut self) {
        if self.denominator.is_negative() {
            self.numerator = -self.numerator.clone();
            self.denominator = -self.denominator.clone();
        }
        let divisor = self.numerator.gcd(&self.denominator);
        if !divisor.is_one() {
            self.numerator /= &divisor;
            self.denominator /= &divisor;
        }
    }
}

/// Finalizes a rendered decimal buffer. Zero is sign-canonical, so a value
/// that rounded or truncated away to nothing loses its sign.
fn finish(buf: Vec<u8>) -> String {
    let start = usize::from(buf == b"-0");
    buf[start..].iter().copied().map(char::from).collect()
}

/// Applies a half-up carry to a rendered decimal string, in place.
///
/// Trailing `9`s become `0`s until a digit can be incremented; the decimal
/// point is skipped and the carry keeps propagating through the integer
/// part, inserting a leading `1` when every digit was a `9`.
fn round_half_up(buf: &mut Vec<u8>) {
    for i in (0..buf.len()).rev() {
        match buf[i] {
            b'.' => {}
            b'-' => break,
            b'9' => buf[i] = b'0',
            _ => {
                buf[i] += 1;
                return;
            }
        }
    }
    // every digit was a 9; a sign, if present, stays in front
    let at = usize::from(buf.first() == Some(&b'-'));
    buf.insert(at, b'1');
}

impl Default for Rational {
    /// The zero rational, 0/1. Deriving would produce a zero denominator.
    fn default() -> Self {
        Self::from_integer(Integer::zero())
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl Ord for Rational {
    /// Compares by cross-multiplied numerators; the denominators are
    /// positive, so the orientation is preserved.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            self.numerator.cmp(&other.numerator)
        } else {
            let lhs = &self.numerator * &other.denominator;
            let rhs = &other.numerator * &self.denominator;
            lhs.cmp(&rhs)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn add_values(lhs: &Rational, rhs: &Rational) -> Rational {
    let mut out = if lhs.denominator == rhs.denominator {
        Rational {
            numerator: &lhs.numerator + &rhs.numerator,
            denominator: lhs.denominator.clone(),
        }
    } else {
        Rational {
            numerator: &lhs.numerator * &rhs.denominator + &rhs.numerator * &lhs.denominator,
            denominator: &lhs.denominator * &rhs.denominator,
        }
    };
    out.normalize();
    out
}

fn sub_values(lhs: &Rational, rhs: &Rational) -> Rational {
    let mut out = if lhs.denominator == rhs.denominator {
        Rational {
            numerator: &lhs.numerator - &rhs.numerator,
            denominator: lhs.denominator.clone(),
        }
    } else {
        Rational {
            numerator: &lhs.numerator * &rhs.denominator - &rhs.numerator * &lhs.denominator,
            denominator: &lhs.denominator * &rhs.denominator,
        }
    };
    out.normalize();
    out
}

fn mul_values(lhs: &Rational, rhs: &Rational) -> Rational {
    let mut out = Rational {
        numerator: &lhs.numerator * &rhs.numerator,
        denominator: &lhs.denominator * &rhs.denominator,
    };
    out.normalize();
    out
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_values(&self, &rhs)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        add_values(&self, rhs)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        add_values(self, rhs)
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = add_values(self, &rhs);
    }
}

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        *self = add_values(self, rhs);
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_values(&self, &rhs)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        sub_values(&self, rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_values(self, rhs)
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        *self = sub_values(self, &rhs);
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        *self = sub_values(self, rhs);
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_values(&self, &rhs)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        mul_values(&self, rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_values(self, rhs)
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        *self = mul_values(self, &rhs);
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        *self = mul_values(self, rhs);
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Rational::checked_div`] to report the
    /// error instead.
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: &Rational) -> Self::Output {
        &self / rhs
    }
}

impl Div for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl DivAssign<&Rational> for Rational {
    fn div_assign(&mut self, rhs: &Rational) {
        *self = &*self / rhs;
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.numerator = -self.numerator;
        self
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(i64::from(n)))
    }
}

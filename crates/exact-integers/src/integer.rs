//! Arbitrary precision signed decimal integers.
//!
//! `Integer` stores a sign flag and a little-endian vector of base-10^9
//! limbs. The value zero is always the empty limb vector with a
//! non-negative sign, so equality and hashing can derive from the fields.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::ArithmeticError;
use crate::magnitude;
use crate::magnitude::{BASE, DIGITS_PER_LIMB};

/// An arbitrary precision signed integer with decimal limbs.
///
/// Division and remainder truncate toward zero, matching native fixed-width
/// integers: `23 / -5 == -4` and `23 % -5 == 3`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    negative: bool,
    limbs: Vec<u32>,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        // unsigned_abs keeps i64::MIN representable
        let mut magnitude = value.unsigned_abs();
        let mut limbs = Vec::new();
        while magnitude != 0 {
            limbs.push((magnitude % u64::from(BASE)) as u32);
            magnitude /= u64::from(BASE);
        }
        Self {
            negative: value < 0,
            limbs,
        }
    }

    /// Builds a value from raw parts, forcing the canonical zero sign.
    fn from_parts(negative: bool, limbs: Vec<u32>) -> Self {
        Self {
            negative: negative && !limbs.is_empty(),
            limbs,
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.limbs.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Computes the greatest common divisor of the absolute values.
    ///
    /// `gcd(0, 0)` is zero; `gcd(m, 0)` is `|m|`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut m = self.abs();
        let mut n = other.abs();
        while !m.is_zero() && !n.is_zero() {
            if m > n {
                let (_, r) = magnitude::div_rem(&m.limbs, &n.limbs);
                m.limbs = r;
            } else {
                let (_, r) = magnitude::div_rem(&n.limbs, &m.limbs);
                n.limbs = r;
            }
        }
        m + n
    }

    /// Divides by `rhs`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Computes the remainder; the result takes the dividend's sign.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// Computes quotient and remainder at once, truncating toward zero.
    ///
    /// The quotient's sign is the XOR of the operand signs and the
    /// remainder's sign is the dividend's, except that a zero magnitude is
    /// always canonical non-negative zero. This is the same contract as
    /// `/` and `%` on native integers: `a == (a / b) * b + (a % b)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (quotient, remainder) = magnitude::div_rem(&self.limbs, &rhs.limbs);
        Ok((
            Self::from_parts(self.negative != rhs.negative, quotient),
            Self::from_parts(self.negative, remainder),
        ))
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64; the conversion
    /// never wraps or saturates.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.try_into().ok()
    }
}

impl TryFrom<&Integer> for i64 {
    type Error = ArithmeticError;

    /// Positional reconstruction with checked steps. Accumulating on the
    /// negative side keeps `i64::MIN` convertible.
    fn try_from(value: &Integer) -> Result<Self, Self::Error> {
        let mut out = 0i64;
        for &limb in value.limbs.iter().rev() {
            out = out
                .checked_mul(i64::from(BASE))
                .ok_or(ArithmeticError::Overflow)?;
            out = if value.negative {
                out.checked_sub(i64::from(limb))
            } else {
                out.checked_add(i64::from(limb))
            }
            .ok_or(ArithmeticError::Overflow)?;
        }
        Ok(out)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        !self.negative && self.limbs == [1]
    }
}

impl FromStr for Integer {
    type Err = ArithmeticError;

    /// Parses `[+-]?[0-9]+`. Leading zeros are skipped; an all-zero body
    /// yields canonical zero regardless of the sign character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        let negative = s.starts_with('-');
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArithmeticError::MalformedLiteral);
        }
        let digits = digits.trim_start_matches('0').as_bytes();

        // 9-digit groups counted from the least significant end; a partial
        // leading group becomes the most significant limb.
        let mut limbs = Vec::with_capacity(digits.len() / DIGITS_PER_LIMB + 1);
        for chunk in digits.rchunks(DIGITS_PER_LIMB) {
            limbs.push(chunk.iter().fold(0, |acc, &b| acc * 10 + u32::from(b - b'0')));
        }
        Ok(Self::from_parts(negative, limbs))
    }
}

impl fmt::Display for Integer {
    /// The most significant limb prints unpadded; every limb below it is
    /// zero-padded to the full nine digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(top) = self.limbs.last() else {
            return f.write_str("0");
        };
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{top}")?;
        for limb in self.limbs.iter().rev().skip(1) {
            write!(f, "{limb:09}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude::cmp(&self.limbs, &other.limbs),
            // both negative: the larger magnitude is the smaller value
            (true, true) => magnitude::cmp(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Signed addition over borrowed operands.
///
/// Same-sign operands add magnitudes and keep the sign; opposite signs
/// subtract the smaller magnitude from the larger, and the larger
/// magnitude's original sign wins. Equal magnitudes cancel to zero.
fn add_values(lhs: &Integer, rhs: &Integer) -> Integer {
    if lhs.negative == rhs.negative {
        Integer::from_parts(lhs.negative, magnitude::add(&lhs.limbs, &rhs.limbs))
    } else {
        match magnitude::cmp(&lhs.limbs, &rhs.limbs) {
            Ordering::Equal => Integer::zero(),
            Ordering::Greater => {
                Integer::from_parts(lhs.negative, magnitude::sub(&lhs.limbs, &rhs.limbs))
            }
            Ordering::Less => {
                Integer::from_parts(rhs.negative, magnitude::sub(&rhs.limbs, &lhs.limbs))
            }
        }
    }
}

/// Signed subtraction over borrowed operands.
fn sub_values(lhs: &Integer, rhs: &Integer) -> Integer {
    if lhs.negative != rhs.negative {
        Integer::from_parts(lhs.negative, magnitude::add(&lhs.limbs, &rhs.limbs))
    } else {
        match magnitude::cmp(&lhs.limbs, &rhs.limbs) {
            Ordering::Equal => Integer::zero(),
            Ordering::Greater => {
                Integer::from_parts(lhs.negative, magnitude::sub(&lhs.limbs, &rhs.limbs))
            }
            Ordering::Less => {
                Integer::from_parts(!rhs.negative, magnitude::sub(&rhs.limbs, &lhs.limbs))
            }
        }
    }
}

/// Signed multiplication over borrowed operands.
fn mul_values(lhs: &Integer, rhs: &Integer) -> Integer {
    Integer::from_parts(
        lhs.negative != rhs.negative,
        magnitude::mul(&lhs.limbs, &rhs.limbs),
    )
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_values(&self, &rhs)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        add_values(&self, rhs)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        add_values(self, rhs)
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, rhs: Self) {
        *self = add_values(self, &rhs);
    }
}

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        *self = add_values(self, rhs);
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_values(&self, &rhs)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        sub_values(&self, rhs)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_values(self, rhs)
    }
}

impl SubAssign for Integer {
    fn sub_assign(&mut self, rhs: Self) {
        *self = sub_values(self, &rhs);
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        *self = sub_values(self, rhs);
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_values(&self, &rhs)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        mul_values(&self, rhs)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_values(self, rhs)
    }
}

impl MulAssign for Integer {
    fn mul_assign(&mut self, rhs: Self) {
        *self = mul_values(self, &rhs);
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        *self = mul_values(self, rhs);
    }
}

impl Div for Integer {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Integer::checked_div`] to report the
    /// error instead.
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Integer> for Integer {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: &Integer) -> Self::Output {
        &self / rhs
    }
}

impl Div for &Integer {
    type Output = Integer;

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

impl DivAssign for Integer {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl DivAssign<&Integer> for Integer {
    fn div_assign(&mut self, rhs: &Integer) {
        *self = &*self / rhs;
    }
}

impl Rem for Integer {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Integer::checked_rem`] to report the
    /// error instead.
    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem<&Integer> for Integer {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: &Integer) -> Self::Output {
        &self % rhs
    }
}

impl Rem for &Integer {
    type Output = Integer;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl RemAssign for Integer {
    fn rem_assign(&mut self, rhs: Self) {
        *self = &*self % &rhs;
    }
}

impl RemAssign<&Integer> for Integer {
    fn rem_assign(&mut self, rhs: &Integer) {
        *self = &*self % rhs;
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negative = !self.negative && !self.limbs.is_empty();
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

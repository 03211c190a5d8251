//! # exact-integers
//!
//! Arbitrary precision signed decimal integers and exact rational numbers.
//!
//! - [`Integer`] keeps a sign flag and a little-endian vector of base-10^9
//!   limbs; division and remainder truncate toward zero like native
//!   integers.
//! - [`Rational`] is an `Integer` pair kept in lowest terms with a positive
//!   denominator, with exact decimal rendering via
//!   [`Rational::as_decimal`].
//!
//! All failure cases (zero divisors, malformed literals, narrowing
//! overflow) surface as [`ArithmeticError`]; nothing is silently wrapped
//! or truncated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
mod magnitude;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::Integer;
pub use rational::Rational;

//! Sign-free arithmetic over little-endian limb sequences.
//!
//! A magnitude is a `&[u32]` of base-10^9 digits, least significant first,
//! with no most-significant zero limb. The empty slice is zero. Every
//! function here takes input slices and returns a newly owned, canonical
//! vector, so a value's current limbs can safely be passed back in as an
//! operand of the same operation.

use std::cmp::Ordering;

/// The radix of one limb.
pub(crate) const BASE: u32 = 1_000_000_000;

/// Decimal digits carried by one full limb.
pub(crate) const DIGITS_PER_LIMB: usize = 9;

/// Removes most-significant zero limbs, restoring canonical form.
fn strip_zeros(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// Compares two magnitudes.
///
/// Unequal lengths settle the comparison immediately: canonical form has no
/// most-significant zero limb, so more limbs means a larger value. Equal
/// lengths compare limb by limb from the most significant end.
pub(crate) fn cmp(lhs: &[u32], rhs: &[u32]) -> Ordering {
    if lhs.len() != rhs.len() {
        return lhs.len().cmp(&rhs.len());
    }
    for (l, r) in lhs.iter().rev().zip(rhs.iter().rev()) {
        if l != r {
            return l.cmp(r);
        }
    }
    Ordering::Equal
}

/// Adds two magnitudes.
pub(crate) fn add(lhs: &[u32], rhs: &[u32]) -> Vec<u32> {
    let len = lhs.len().max(rhs.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0;
    for i in 0..len {
        let mut sum = carry;
        if i < lhs.len() {
            sum += lhs[i];
        }
        if i < rhs.len() {
            sum += rhs[i];
        }
        out.push(sum % BASE);
        carry = sum / BASE;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Subtracts `rhs` from `lhs`.
///
/// Requires `lhs >= rhs`; callers compare first and orient the operands.
pub(crate) fn sub(lhs: &[u32], rhs: &[u32]) -> Vec<u32> {
    debug_assert!(cmp(lhs, rhs) != Ordering::Less);
    let mut out = Vec::with_capacity(lhs.len());
    let mut borrow = 0;
    for i in 0..lhs.len() {
        let take = if i < rhs.len() { rhs[i] } else { 0 } + borrow;
        if lhs[i] >= take {
            out.push(lhs[i] - take);
            borrow = 0;
        } else {
            out.push(lhs[i] + BASE - take);
            borrow = 1;
        }
    }
    strip_zeros(&mut out);
    out
}

/// Multiplies two magnitudes, schoolbook O(n·m).
///
/// Each partial product is accumulated in a `u64`: the largest possible
/// term `(10^9 - 1)^2 + 2 * (10^9 - 1)` stays well under `u64::MAX`.
pub(crate) fn mul(lhs: &[u32], rhs: &[u32]) -> Vec<u32> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    let base = u64::from(BASE);
    let mut out = vec![0u32; lhs.len() + rhs.len()];
    for (i, &l) in lhs.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &r) in rhs.iter().enumerate() {
            let term = u64::from(l) * u64::from(r) + u64::from(out[i + j]) + carry;
            out[i + j] = (term % base) as u32;
            carry = term / base;
        }
        // carry < BASE and this slot has not been written yet
        out[i + rhs.len()] = carry as u32;
    }
    strip_zeros(&mut out);
    out
}

/// Divides `lhs` by `rhs`, returning `(quotient, remainder)`.
///
/// Requires a non-zero `rhs`; callers raise `DivisionByZero` beforehand.
///
/// Long division, one base-10^9 quotient digit per dividend limb: the
/// running remainder is shifted up by one limb, the next dividend limb is
/// brought down, and the digit is found by binary search over `[0, BASE)`
/// with a full multiply per probe. Quadratic with a `log BASE` factor,
/// which is fine at the limb counts this crate is used at.
pub(crate) fn div_rem(lhs: &[u32], rhs: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!rhs.is_empty());
    let mut quotient = Vec::with_capacity(lhs.len());
    let mut cur: Vec<u32> = Vec::new();
    for &limb in lhs.iter().rev() {
        // cur = cur * BASE + limb, kept canonical
        if !cur.is_empty() || limb != 0 {
            cur.insert(0, limb);
        }
        // Largest digit with digit * rhs <= cur. The invariants are
        // lo * rhs <= cur and hi * rhs > cur; cur < rhs * BASE because the
        // previous remainder was below rhs.
        let mut lo = 0u32;
        let mut hi = BASE;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if cmp(&mul(rhs, &[mid]), &cur) != Ordering::Greater {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        quotient.push(lo);
        if lo > 0 {
            cur = sub(&cur, &mul(rhs, &[lo]));
        }
    }
    quotient.reverse();
    strip_zeros(&mut quotient);
    (quotient, cur)
}

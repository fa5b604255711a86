//! Subtraction, multiplication and division on raw bit patterns
//!
//! None of these use the native `-`, `*` or `/` on operand values: subtraction
//! is a ripple-borrow loop, multiplication is shift-and-add, and division is
//! restoring long division. Each runs a fixed 32 iterations.

use super::compare::absolute;
use super::{mask_from_bit, nonzero_bit};

/// `a - b` modulo 2^32.
pub fn subtract(a: i32, b: i32) -> i32 {
    let ua = a as u32;
    let ub = b as u32;
    let mut result = 0u32;
    let mut borrow = 0u32;

    for i in 0..32 {
        let ai = (ua >> i) & 1;
        let bi = (ub >> i) & 1;
        result |= (ai ^ bi ^ borrow) << i;
        borrow = ((!ai & bi) | (!(ai ^ bi) & borrow)) & 1;
    }

    result as i32
}

/// Two's-complement negation of `value` when `sign_mask` is all ones.
#[inline]
fn apply_sign(value: u32, sign_mask: u32) -> i32 {
    subtract((value ^ sign_mask) as i32, sign_mask as i32)
}

/// Sign mask of the product or quotient: all ones if exactly one operand is negative.
#[inline]
fn result_sign_mask(a: i32, b: i32) -> u32 {
    ((a ^ b) >> 31) as u32
}

/// Low 32 bits of `a * b`.
pub fn multiply(a: i32, b: i32) -> i32 {
    let ua = absolute(a) as u32;
    let ub = absolute(b) as u32;
    let mut result = 0u32;

    for i in 0..32 {
        let partial = mask_from_bit((ub >> i) & 1) & (ua << i);
        result = result.wrapping_add(partial);
    }

    apply_sign(result, result_sign_mask(a, b))
}

/// `numerator / denominator` for unsigned 32-bit values.
///
/// Returns 0 when `denominator == 0`; callers that need to report division by
/// zero must check before calling.
pub fn unsigned_divide(numerator: u32, denominator: u32) -> u32 {
    let divisor = denominator as u64;
    let mut quotient = 0u32;
    let mut remainder = 0u64;

    // remainder < divisor after every step, so it never exceeds 33 bits
    for i in (0..32).rev() {
        remainder = (remainder << 1) | ((numerator >> i) & 1) as u64;
        let diff = remainder.wrapping_sub(divisor);
        let fits = (((diff >> 63) & 1) ^ 1) as u32;
        remainder = remainder.wrapping_sub(divisor & (fits as u64).wrapping_neg());
        quotient |= fits << i;
    }

    quotient & mask_from_bit(nonzero_bit(denominator))
}

/// `a / b` truncated toward zero; 0 when `b == 0`.
///
/// `i32::MIN / -1` wraps to `i32::MIN`.
pub fn signed_divide(a: i32, b: i32) -> i32 {
    let quotient = unsigned_divide(absolute(a) as u32, absolute(b) as u32);
    apply_sign(quotient, result_sign_mask(a, b))
}

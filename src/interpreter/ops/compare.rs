//! Comparison and selection built on [`subtract`]
//!
//! `greater_than` looks only at the sign and zero-ness of `a - b` computed
//! with wraparound, so it disagrees with mathematical `>` whenever that
//! difference overflows. `max` and `min` inherit this.

use super::binary::subtract;
use super::{mask_from_bit, nonzero_bit};

/// Two's-complement absolute value; `absolute(i32::MIN) == i32::MIN`.
pub fn absolute(a: i32) -> i32 {
    let mask = a >> 31;
    a.wrapping_add(mask) ^ mask
}

pub fn equal(a: i32, b: i32) -> bool {
    let diff = subtract(a, b) as u32;
    (nonzero_bit(diff) ^ 1) != 0
}

/// True when `a - b` (wrapping) is positive.
pub fn greater_than(a: i32, b: i32) -> bool {
    let diff = subtract(a, b) as u32;
    let sign_bit = diff >> 31;
    ((sign_bit ^ 1) & nonzero_bit(diff)) != 0
}

/// `a` when `cond` is nonzero, otherwise `b`, selected by mask.
pub fn ifelse(a: i32, b: i32, cond: i32) -> i32 {
    let mask = mask_from_bit(nonzero_bit(cond as u32)) as i32;
    (a & mask) | (b & !mask)
}

pub fn max(a: i32, b: i32) -> i32 {
    ifelse(a, b, greater_than(a, b) as i32)
}

pub fn min(a: i32, b: i32) -> i32 {
    ifelse(a, b, greater_than(b, a) as i32)
}

//! Branch-free 32-bit integer primitives
//!
//! Everything here works on two's-complement bit patterns and matches the
//! wrapping results of native arithmetic exactly, overflow included.
//! - [`binary`]: subtract, multiply, unsigned and signed division
//! - [`compare`]: absolute, equal, greater_than, ifelse, min, max
//!
//! Selection is done with masks rather than `if`, so the work performed does
//! not depend on the operand values.

pub mod binary;
pub mod compare;

pub use binary::{multiply, signed_divide, subtract, unsigned_divide};
pub use compare::{absolute, equal, greater_than, ifelse, max, min};

/// 1 if `x != 0`, else 0.
#[inline]
pub(crate) fn nonzero_bit(x: u32) -> u32 {
    (x | x.wrapping_neg()) >> 31
}

/// All ones when `bit` is 1, zero when it is 0.
#[inline]
pub(crate) fn mask_from_bit(bit: u32) -> u32 {
    bit.wrapping_neg()
}

/// Values that tend to break bit-level arithmetic
#[cfg(test)]
pub(crate) const EDGE_VALUES: [i32; 16] = [
    i32::MIN,
    i32::MIN + 1,
    -65536,
    -65535,
    -1000,
    -7,
    -2,
    -1,
    0,
    1,
    2,
    7,
    1000,
    65535,
    65536,
    i32::MAX,
];

/// Deterministic xorshift sample on top of [`EDGE_VALUES`]
#[cfg(test)]
pub(crate) fn sample_values() -> Vec<i32> {
    let mut state: u32 = 0x9E37_79B9;
    let mut values = EDGE_VALUES.to_vec();
    for _ in 0..48 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        values.push(state as i32);
        // Small magnitudes too, so products and quotients are not all trivial
        values.push((state as i32) >> 20);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero_bit() {
        assert_eq!(nonzero_bit(0), 0);
        assert_eq!(nonzero_bit(1), 1);
        assert_eq!(nonzero_bit(0x8000_0000), 1);
        assert_eq!(nonzero_bit(u32::MAX), 1);
    }

    #[test]
    fn test_mask_from_bit() {
        assert_eq!(mask_from_bit(0), 0);
        assert_eq!(mask_from_bit(1), u32::MAX);
    }
}

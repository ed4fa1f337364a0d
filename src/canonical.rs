//! Zero-last-trit canonicalization.
//!
//! `3^243` balanced values do not fit in 384 bits, but those with the 243rd
//! trit set to zero do: they span exactly `[-HALF_3, HALF_3]`. Both
//! conversion directions force that trit to zero. This drops information
//! for values outside the range and is the expected behaviour.

use tracing::trace;

use crate::bigint::U384;
use crate::constants::{BYTE_LENGTH, HALF_3, NEG_HALF_3, TRIT_243};

/// Takes a tryte value `a + 3b + 9c` and returns `a + 3b`.
pub fn tryte_zero_last_trit(value: i8) -> i8 {
    if value > 4 {
        return value - 9;
    }
    if value < -4 {
        return value + 9;
    }
    value
}

/// Adjusts the integer so that its ternary form has the 243rd trit set to 0.
pub fn bigint_zero_last_trit(b: &mut U384) {
    if b.is_negative() {
        if *b < NEG_HALF_3 {
            trace!("adding 3^242 to negative value out of the canonical range");
            *b += &TRIT_243;
        }
    } else if *b > HALF_3 {
        trace!("subtracting 3^242 from positive value out of the canonical range");
        *b -= &TRIT_243;
    }
}

/// Canonicalizes a 48-byte Kerl value in place.
pub fn bytes_zero_last_trit(bytes: &mut [u8; BYTE_LENGTH]) {
    let mut b = U384::from_be_bytes(bytes);
    bigint_zero_last_trit(&mut b);
    *bytes = b.to_be_bytes();
}

//! Conversion between a 243-trit hash and its 48-byte Kerl form.
//!
//! The bytes hold the balanced ternary value as a big-endian 384-bit two's
//! complement integer, which is the layout Keccak-384 absorbs and emits.
//! The encoder evaluates the trytes as unbalanced radix-27 digits with
//! Horner's scheme and then subtracts `HALF_3` to get back to balanced
//! form. The decoder adds `HALF_3` and peels off one tryte per division.

use tracing::trace;

use crate::bigint::U384;
use crate::canonical::{bigint_zero_last_trit, tryte_zero_last_trit};
use crate::constants::*;
use crate::error::{Error, Result};
use crate::tables::{
    find_invalid_trit, trits_to_value, tryte_to_value, TRYTE_ALPHABET, TRYTE_VALUE_TO_TRITS,
};

type TryteValues = [i8; TRYTE_LENGTH];

/// Converts 81 trytes into 48 bytes.
pub fn trytes_to_bytes(trytes: &str) -> Result<[u8; BYTE_LENGTH]> {
    if trytes.len() != TRYTE_LENGTH {
        return Err(Error::InvalidTrytesLength {
            expected: TRYTE_LENGTH,
            found: trytes.len(),
        });
    }

    let mut vs = [0; TRYTE_LENGTH];
    for (v, tryte) in vs.iter_mut().zip(trytes.chars()) {
        *v = tryte_to_value(tryte).ok_or(Error::InvalidTryte(tryte))?;
    }

    Ok(tryte_values_to_bytes(&vs))
}

/// Converts 243 trits into 48 bytes.
pub fn trits_to_bytes(trits: &[Trit]) -> Result<[u8; BYTE_LENGTH]> {
    let vs = trits_to_tryte_values(trits)?;
    Ok(tryte_values_to_bytes(&vs))
}

/// Converts 48 bytes into 81 trytes.
pub fn bytes_to_trytes(bytes: &[u8]) -> Result<String> {
    let vs = bytes_to_tryte_values(as_hash_bytes(bytes)?);
    Ok(vs
        .iter()
        .map(|v| TRYTE_ALPHABET[(v - MIN_TRYTE_VALUE) as usize] as char)
        .collect())
}

/// Converts 48 bytes into 243 trits.
pub fn bytes_to_trits(bytes: &[u8]) -> Result<[Trit; TRIT_LENGTH]> {
    let vs = bytes_to_tryte_values(as_hash_bytes(bytes)?);
    Ok(tryte_values_to_trits(&vs))
}

fn as_hash_bytes(bytes: &[u8]) -> Result<&[u8; BYTE_LENGTH]> {
    <&[u8; BYTE_LENGTH]>::try_from(bytes).map_err(|_| Error::InvalidBytesLength {
        expected: BYTE_LENGTH,
        found: bytes.len(),
    })
}

pub(crate) fn trits_to_tryte_values(trits: &[Trit]) -> Result<TryteValues> {
    if trits.len() != TRIT_LENGTH {
        return Err(Error::InvalidTritsLength {
            expected: TRIT_LENGTH,
            found: trits.len(),
        });
    }

    let mut vs = [0; TRYTE_LENGTH];
    for (v, chunk) in vs.iter_mut().zip(trits.chunks_exact(3)) {
        *v = trits_to_value([chunk[0], chunk[1], chunk[2]])
            .ok_or_else(|| Error::InvalidTrit(find_invalid_trit(chunk).unwrap_or_default()))?;
    }

    Ok(vs)
}

pub(crate) fn tryte_values_to_trits(vs: &TryteValues) -> [Trit; TRIT_LENGTH] {
    let mut trits = [0; TRIT_LENGTH];
    for (chunk, v) in trits.chunks_exact_mut(3).zip(vs.iter()) {
        chunk.copy_from_slice(&TRYTE_VALUE_TO_TRITS[(v - MIN_TRYTE_VALUE) as usize]);
    }
    trits
}

pub(crate) fn tryte_values_to_bytes(vs: &TryteValues) -> [u8; BYTE_LENGTH] {
    // Only the two low trits of the top tryte survive.
    let top = tryte_zero_last_trit(vs[TRYTE_LENGTH - 1]);
    if top != vs[TRYTE_LENGTH - 1] {
        trace!(tryte = vs[TRYTE_LENGTH - 1], "dropping the 243rd trit of the top tryte");
    }
    let mut base = U384::from_small((top + HALF_TOP_TRYTE) as u32);

    // Highest word that may be non-zero, so the multiply skips the rest.
    let mut nz_index = 0;
    for v in vs[..TRYTE_LENGTH - 1].iter().rev() {
        nz_index = base.mul_small(TRYTE_RADIX, nz_index);

        let changed = base.add_small((v + HALF_TRYTE) as u32);
        if changed > nz_index {
            nz_index = changed;
        }
    }

    // back to balanced ternary
    base -= &HALF_3;

    base.to_be_bytes()
}

pub(crate) fn bytes_to_tryte_values(bytes: &[u8; BYTE_LENGTH]) -> TryteValues {
    let mut base = U384::from_be_bytes(bytes);
    if base.is_zero() {
        return [0; TRYTE_LENGTH];
    }

    // Two's complement only matches the ternary value when the 243rd trit is 0.
    bigint_zero_last_trit(&mut base);

    // unsigned, i.e. non-balanced ternary
    base += &HALF_3;

    let mut vs = [0; TRYTE_LENGTH];
    let mut nz_index = INT_LENGTH - 1;
    for v in vs[..TRYTE_LENGTH - 1].iter_mut() {
        let rem = base.div_small(TRYTE_RADIX, nz_index);
        *v = rem as i8 - HALF_TRYTE;

        if nz_index > 0 && base.words()[nz_index] == 0 {
            nz_index -= 1;
        }
    }

    // What is left fits in the lowest word.
    vs[TRYTE_LENGTH - 1] = tryte_zero_last_trit(base.words()[0] as i8 - HALF_TRYTE);

    vs
}

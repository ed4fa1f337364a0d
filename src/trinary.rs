//! Helpers for tryte strings of any length.

use crate::constants::Trit;
use crate::error::{Error, Result};
use crate::tables::{
    find_invalid_trit, trits_to_value, tryte_to_value, value_to_trits, value_to_tryte,
};

/// Expands every tryte into three trits, least significant first.
pub fn trytes_to_trits(trytes: &str) -> Result<Vec<Trit>> {
    let mut trits = Vec::with_capacity(trytes.len() * 3);
    for tryte in trytes.chars() {
        let trip = tryte_to_value(tryte)
            .and_then(value_to_trits)
            .ok_or(Error::InvalidTryte(tryte))?;
        trits.extend_from_slice(&trip);
    }
    Ok(trits)
}

/// Packs trits into trytes. The length must be a multiple of 3.
pub fn trits_to_trytes(trits: &[Trit]) -> Result<String> {
    if trits.len() % 3 != 0 {
        return Err(Error::InvalidTritsMultiple { found: trits.len() });
    }

    trits
        .chunks_exact(3)
        .map(|c| {
            trits_to_value([c[0], c[1], c[2]])
                .and_then(value_to_tryte)
                .ok_or_else(|| Error::InvalidTrit(find_invalid_trit(c).unwrap_or_default()))
        })
        .collect()
}

use sha3::{Digest, Keccak384};
use tracing::trace;

use crate::constants::*;
use crate::convert::{
    bytes_to_tryte_values, trits_to_tryte_values, tryte_values_to_bytes, tryte_values_to_trits,
};
use crate::error::{Error, Result};
use crate::trinary::{trits_to_trytes, trytes_to_trits};
use crate::Sponge;

/// Ternary sponge backed by Keccak-384.
#[derive(Clone)]
pub struct Kerl(Keccak384);

impl Default for Kerl {
    fn default() -> Kerl {
        Kerl(Keccak384::new())
    }
}

impl Kerl {
    pub fn new() -> Kerl {
        Kerl::default()
    }

    pub fn absorb_trytes(&mut self, trytes: &str) -> Result<()> {
        check_tryte_length(trytes.chars().count())?;
        let trits = trytes_to_trits(trytes)?;
        self.absorb(&trits)
    }

    /// Squeezes `length` trytes, which must be a multiple of 81.
    pub fn squeeze_trytes(&mut self, length: usize) -> Result<String> {
        check_tryte_length(length)?;
        let mut trits = vec![0; length * 3];
        self.squeeze(&mut trits)?;
        trits_to_trytes(&trits)
    }
}

fn check_length(len: usize) -> Result<()> {
    if len == 0 || len % TRIT_LENGTH != 0 {
        return Err(Error::InvalidSpongeLength { found: len });
    }
    Ok(())
}

fn check_tryte_length(len: usize) -> Result<()> {
    if len == 0 || len % TRYTE_LENGTH != 0 {
        return Err(Error::InvalidSpongeTrytesLength { found: len });
    }
    Ok(())
}

impl Sponge for Kerl
where
    Self: Send + 'static,
{
    type Item = Trit;

    fn absorb(&mut self, trits: &[Self::Item]) -> Result<()> {
        check_length(trits.len())?;

        // Convert everything first so a bad trit leaves the state untouched.
        let chunks = trits
            .chunks(TRIT_LENGTH)
            .map(trits_to_tryte_values)
            .collect::<Result<Vec<_>>>()?;

        trace!(chunks = chunks.len(), "kerl absorb");
        for vs in chunks.iter() {
            self.0.update(tryte_values_to_bytes(vs));
        }

        Ok(())
    }

    fn squeeze(&mut self, out: &mut [Self::Item]) -> Result<()> {
        check_length(out.len())?;

        trace!(chunks = out.len() / TRIT_LENGTH, "kerl squeeze");
        let mut bytes = [0u8; BYTE_LENGTH];
        for chunk in out.chunks_mut(TRIT_LENGTH) {
            bytes.copy_from_slice(&self.0.finalize_reset());
            chunk.copy_from_slice(&tryte_values_to_trits(&bytes_to_tryte_values(&bytes)));

            for b in bytes.iter_mut() {
                *b = !*b;
            }
            self.0.update(bytes);
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.0 = Keccak384::new();
    }
}

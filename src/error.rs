//! Error types for Kerl conversions.

use thiserror::Error;

use crate::constants::{Trit, TRIT_LENGTH, TRYTE_LENGTH};

/// Every failure is detected before any conversion work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid trits length {found}: must be {expected} in size")]
    InvalidTritsLength { expected: usize, found: usize },

    #[error("invalid trits length {found}: must be a multiple of 3")]
    InvalidTritsMultiple { found: usize },

    #[error("invalid trytes length {found}: must be {expected} in size")]
    InvalidTrytesLength { expected: usize, found: usize },

    #[error("invalid bytes length {found}: must be {expected} in size")]
    InvalidBytesLength { expected: usize, found: usize },

    #[error("invalid tryte {0:?}")]
    InvalidTryte(char),

    #[error("invalid trit {0}")]
    InvalidTrit(Trit),

    #[error("invalid sponge length {found}: must be a non-zero multiple of {}", TRIT_LENGTH)]
    InvalidSpongeLength { found: usize },

    #[error("invalid sponge trytes length {found}: must be a non-zero multiple of {}", TRYTE_LENGTH)]
    InvalidSpongeTrytesLength { found: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

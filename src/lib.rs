//! Kerl: the conversion between 243-trit balanced ternary hashes and the
//! 48-byte two's-complement integers consumed by Keccak-384.
//!
//! ```
//! let trytes = "HHPELNTNJIOKLYDUW9NDULWPHCWFRPTDIUWLYUHQWWJVPAKKGKOAZFJPQJBLNDPALCVXGJLRBFSHATF9C";
//! let bytes = kerl::trytes_to_bytes(trytes).unwrap();
//! assert_eq!(kerl::bytes_to_trytes(&bytes).unwrap(), trytes);
//! ```

pub mod bigint;
pub mod canonical;
pub mod constants;
pub mod convert;
pub mod error;
#[cfg(feature = "sponge")]
pub mod kerl;
pub mod tables;
pub mod trinary;

pub use crate::canonical::bytes_zero_last_trit;
pub use crate::constants::Trit;
pub use crate::convert::{bytes_to_trits, bytes_to_trytes, trits_to_bytes, trytes_to_bytes};
pub use crate::error::{Error, Result};
#[cfg(feature = "sponge")]
pub use crate::kerl::Kerl;

/// A sponge function over items such as trits.
///
/// Lengths are validated before any state changes.
pub trait Sponge {
    type Item;

    fn absorb(&mut self, input: &[Self::Item]) -> Result<()>;

    fn squeeze(&mut self, out: &mut [Self::Item]) -> Result<()>;

    fn reset(&mut self);
}

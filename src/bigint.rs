//! Fixed-width 384-bit two's-complement integer.
//!
//! `U384` stores the value as 12 `u32` words, least significant word first.
//! It only offers what the ternary conversion needs: wrapping add and
//! subtract, a small-scalar add that reports how far the carry travelled,
//! bounded multiply/divide by a small radix, signed comparison and the
//! big-endian byte layout exchanged with Keccak.

use core::cmp::Ordering;
use core::ops::{AddAssign, SubAssign};

use crunchy::unroll;

use crate::constants::{BYTE_LENGTH, INT_LENGTH};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct U384([u32; INT_LENGTH]);

impl U384 {
    pub const ZERO: Self = Self([0; INT_LENGTH]);

    pub const fn from_words(words: [u32; INT_LENGTH]) -> Self {
        Self(words)
    }

    pub const fn from_small(value: u32) -> Self {
        let mut words = [0; INT_LENGTH];
        words[0] = value;
        Self(words)
    }

    pub fn words(&self) -> &[u32; INT_LENGTH] {
        &self.0
    }

    /// Reads a big-endian buffer. The last four bytes become word 0.
    pub fn from_be_bytes(bytes: &[u8; BYTE_LENGTH]) -> Self {
        let mut words = [0; INT_LENGTH];
        for (word, chunk) in words.iter_mut().zip(bytes.rchunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }

    /// Writes the value as a big-endian buffer, the inverse of `from_be_bytes`.
    pub fn to_be_bytes(&self) -> [u8; BYTE_LENGTH] {
        let mut bytes = [0; BYTE_LENGTH];
        for (chunk, word) in bytes.rchunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    pub fn is_negative(&self) -> bool {
        self.0[INT_LENGTH - 1] >> 31 == 1
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }

    /// Adds `other` to the lowest word and propagates the carry.
    ///
    /// Returns the index of the highest word that was written.
    pub fn add_small(&mut self, other: u32) -> usize {
        let v = u64::from(self.0[0]) + u64::from(other);
        self.0[0] = v as u32;

        let mut carry = v >> 32 != 0;
        let mut i = 0;
        while carry && i < INT_LENGTH - 1 {
            i += 1;
            let (w, c) = self.0[i].overflowing_add(1);
            self.0[i] = w;
            carry = c;
        }

        i
    }

    /// Multiplies by `factor`, touching only words `0..=nz_index`.
    ///
    /// All words above `nz_index` must be zero. Returns the new index of the
    /// highest non-zero word.
    pub fn mul_small(&mut self, factor: u32, nz_index: usize) -> usize {
        let mut carry = 0u64;
        for w in self.0[..=nz_index].iter_mut() {
            let v = u64::from(*w) * u64::from(factor) + carry;
            *w = v as u32;
            carry = v >> 32;
        }

        if carry > 0 && nz_index < INT_LENGTH - 1 {
            self.0[nz_index + 1] = carry as u32;
            nz_index + 1
        } else {
            nz_index
        }
    }

    /// Divides the unsigned value by `divisor` with long division from word
    /// `nz_index` downward and returns the remainder.
    ///
    /// All words above `nz_index` must be zero.
    pub fn div_small(&mut self, divisor: u32, nz_index: usize) -> u32 {
        debug_assert!(divisor != 0);
        let divisor = u64::from(divisor);

        let mut rem = 0u64;
        for w in self.0[..=nz_index].iter_mut().rev() {
            let v = (rem << 32) | u64::from(*w);
            *w = (v / divisor) as u32;
            rem = v % divisor;
        }

        rem as u32
    }
}

/// Addition modulo `2^384`.
impl AddAssign<&U384> for U384 {
    fn add_assign(&mut self, rhs: &U384) {
        let mut carry = 0u64;
        unroll! {
            for i in 0..12 {
                let v = u64::from(self.0[i]) + u64::from(rhs.0[i]) + carry;
                self.0[i] = v as u32;
                carry = v >> 32;
            }
        }
    }
}

/// Subtraction modulo `2^384`.
impl SubAssign<&U384> for U384 {
    fn sub_assign(&mut self, rhs: &U384) {
        let mut borrow = 0u64;
        unroll! {
            for i in 0..12 {
                let v = u64::from(self.0[i])
                    .wrapping_sub(u64::from(rhs.0[i]))
                    .wrapping_sub(borrow);
                self.0[i] = v as u32;
                borrow = v >> 63;
            }
        }
    }
}

/// Signed two's-complement ordering.
impl Ord for U384 {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.0.iter().rev().cmp(other.0.iter().rev()),
        }
    }
}

impl PartialOrd for U384 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//! Lookup tables between tryte letters, tryte values and trit triples.

use crate::constants::{Trit, MAX_TRYTE_VALUE, MIN_TRYTE_VALUE, RADIX};

/// Tryte letters indexed by `value - MIN_TRYTE_VALUE`.
pub const TRYTE_ALPHABET: &[u8; 27] = b"NOPQRSTUVWXYZ9ABCDEFGHIJKLM";

/// Trit triples indexed by `value - MIN_TRYTE_VALUE`, least significant trit first.
pub(crate) const TRYTE_VALUE_TO_TRITS: [[Trit; 3]; 27] = [
    [-1, -1, -1],
    [0, -1, -1],
    [1, -1, -1],
    [-1, 0, -1],
    [0, 0, -1],
    [1, 0, -1],
    [-1, 1, -1],
    [0, 1, -1],
    [1, 1, -1],
    [-1, -1, 0],
    [0, -1, 0],
    [1, -1, 0],
    [-1, 0, 0],
    [0, 0, 0],
    [1, 0, 0],
    [-1, 1, 0],
    [0, 1, 0],
    [1, 1, 0],
    [-1, -1, 1],
    [0, -1, 1],
    [1, -1, 1],
    [-1, 0, 1],
    [0, 0, 1],
    [1, 0, 1],
    [-1, 1, 1],
    [0, 1, 1],
    [1, 1, 1],
];

fn index(value: i8) -> Option<usize> {
    if (MIN_TRYTE_VALUE..=MAX_TRYTE_VALUE).contains(&value) {
        Some((value - MIN_TRYTE_VALUE) as usize)
    } else {
        None
    }
}

/// `'9'` is 0, `'A'..='M'` are 1..13 and `'N'..='Z'` are -13..-1.
pub fn tryte_to_value(tryte: char) -> Option<i8> {
    match tryte {
        '9' => Some(0),
        'A'..='M' => Some((tryte as u8 - b'A') as i8 + 1),
        'N'..='Z' => Some((tryte as u8 - b'N') as i8 + MIN_TRYTE_VALUE),
        _ => None,
    }
}

pub fn value_to_tryte(value: i8) -> Option<char> {
    index(value).map(|i| TRYTE_ALPHABET[i] as char)
}

pub fn value_to_trits(value: i8) -> Option<[Trit; 3]> {
    index(value).map(|i| TRYTE_VALUE_TO_TRITS[i])
}

/// First trit outside `{-1, 0, 1}`, if any.
pub(crate) fn find_invalid_trit(trits: &[Trit]) -> Option<Trit> {
    trits.iter().copied().find(|t| !(-1..=1).contains(t))
}

/// Combines `t0 + 3 * t1 + 9 * t2`. Returns `None` if a trit is out of range.
pub fn trits_to_value(trits: [Trit; 3]) -> Option<i8> {
    if find_invalid_trit(&trits).is_some() {
        return None;
    }

    let value = trits
        .iter()
        .rev()
        .fold(0i32, |acc, t| acc * RADIX + i32::from(*t));
    Some(value as i8)
}

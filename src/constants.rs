use crate::bigint::U384;

pub type Trit = i8;

pub const RADIX: i32 = 3;
pub const TRYTE_RADIX: u32 = 27;
pub const BYTE_LENGTH: usize = 48;
pub const TRIT_LENGTH: usize = 243;
pub const TRYTE_LENGTH: usize = TRIT_LENGTH / 3;
pub const INT_LENGTH: usize = BYTE_LENGTH / 4;

pub const MIN_TRYTE_VALUE: i8 = -13;
pub const MAX_TRYTE_VALUE: i8 = 13;
/// Middle of the domain of one tryte, `1 + 3 + 9`.
pub const HALF_TRYTE: i8 = 13;
/// Middle of the domain of the top tryte once its last trit is zero, `1 + 3`.
pub const HALF_TOP_TRYTE: i8 = 4;

/// `\sum_{k=0}^{241} 3^k`, i.e. `3**242/2`
pub const HALF_3: U384 = U384::from_words([
    0xa5ce8964,
    0x9f007669,
    0x1484504f,
    0x3ade00d9,
    0x0c24486e,
    0x50979d57,
    0x79a4c702,
    0x48bbae36,
    0xa9f6808b,
    0xaa06a805,
    0xa87fabdf,
    0x5e69ebef,
]);

/// Two's complement of `HALF_3`, i.e. `!HALF_3 + 1`
pub const NEG_HALF_3: U384 = U384::from_words([
    0x5a31769c,
    0x60ff8996,
    0xeb7bafb0,
    0xc521ff26,
    0xf3dbb791,
    0xaf6862a8,
    0x865b38fd,
    0xb74451c9,
    0x56097f74,
    0x55f957fa,
    0x57805420,
    0xa1961410,
]);

/// Weight of the last trit, `3**242`
pub const TRIT_243: U384 = U384::from_words([
    0x4b9d12c9,
    0x3e00ecd3,
    0x2908a09f,
    0x75bc01b2,
    0x184890dc,
    0xa12f3aae,
    0xf3498e04,
    0x91775c6c,
    0x53ed0116,
    0x540d500b,
    0x50ff57bf,
    0xbcd3d7df,
]);

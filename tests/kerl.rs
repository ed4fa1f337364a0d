#![cfg(feature = "sponge")]

use kerl::constants::{TRIT_LENGTH, TRYTE_LENGTH};
use kerl::trinary::{trits_to_trytes, trytes_to_trits};
use kerl::{Error, Kerl, Sponge};
use sha3::{Digest, Keccak384};

const VECTORS: &[(&str, &str)] = &[
    (
        "HHPELNTNJIOKLYDUW9NDULWPHCWFRPTDIUWLYUHQWWJVPAKKGKOAZFJPQJBLNDPALCVXGJLRBFSHATF9C",
        "DMJWZTDJTASXZTHZFXFZXWMNFHRTKWFUPCQJXEBJCLRZOM9LPVJSTCLFLTQTDGMLVUHOVJHBBUYFD9AXX",
    ),
    (
        "QAUGQZQKRAW9GKEFIBUD9BMJQOABXBTFELCT9GVSZCPTZOSFBSHPQRWJLLWURPXKNAOWCSVWUBNDSWMPW",
        "HOVOHFEPCIGTOFEAZVXAHQRFFRTPQEEKANKFKIHUKSGRICVADWDMBINDYKRCCIWBEOPXXIKMLNSOHEAQZ",
    ),
    (
        "MWBLYBSRKEKLDHUSRDSDYZRNV9DDCPN9KENGXIYTLDWPJPKBHQBOALSDH9LEJVACJAKJYPCFTJEROARRW",
        "KXBKXQUZBYZFSYSPDPCNILVUSXOEHQWWWFKZPFCQ9ABGIIQBNLSWLPIMV9LYNQDDYUS9L9GNUIYKYAGVZ",
    ),
    // input with a non-zero 243rd trit
    (
        "EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH",
        "EJEAOOZYSAWFPZQESYDHZCGYNSTWXUMVJOVDWUNZJXDGWCLUFGIMZRMGCAZGKNPLBRLGUNYWKLJTYEAQX",
    ),
    // output longer than one hash
    (
        "9MIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH",
        "G9JYBOMPUXHYHKSNRNMMSSZCSHOFYOYNZRSZMAAYWDYEIMVVOGKPJBVBM9TDPULSFUNMTVXRKFIDOHUXXVYDLFSZYZTWQYTE9SPYYWYTXJYQ9IFGYOLZXWZBKWZN9QOOTBQMWMUBLEWUEEASRHRTNIQWJQNDWRYLCA",
    ),
    // input and output longer than one hash
    (
        "G9JYBOMPUXHYHKSNRNMMSSZCSHOFYOYNZRSZMAAYWDYEIMVVOGKPJBVBM9TDPULSFUNMTVXRKFIDOHUXXVYDLFSZYZTWQYTE9SPYYWYTXJYQ9IFGYOLZXWZBKWZN9QOOTBQMWMUBLEWUEEASRHRTNIQWJQNDWRYLCA",
        "LUCKQVACOGBFYSPPVSSOXJEKNSQQRQKPZC9NXFSMQNRQCGGUL9OHVVKBDSKEQEBKXRNUJSRXYVHJTXBPDWQGNSCDCBAIRHAQCOWZEBSNHIJIGPZQITIBJQ9LNTDIBTCQ9EUWKHFLGFUVGGUWJONK9GBCDUIMAYMMQX",
    ),
];

#[test]
fn hash_trits() {
    for (input, expected) in VECTORS {
        let mut kerl = Kerl::default();
        kerl.absorb(&trytes_to_trits(input).unwrap()).unwrap();

        let mut out = vec![0; expected.len() * TRIT_LENGTH / TRYTE_LENGTH];
        kerl.squeeze(&mut out).unwrap();
        assert_eq!(trits_to_trytes(&out).unwrap(), *expected);
    }
}

#[test]
fn hash_trytes() {
    for (input, expected) in VECTORS {
        let mut kerl = Kerl::new();
        kerl.absorb_trytes(input).unwrap();
        assert_eq!(kerl.squeeze_trytes(expected.len()).unwrap(), *expected);
    }
}

#[test]
fn digest_bytes_match_conversion() {
    // Keccak-384 over the input bytes, decoded, is the first squeezed hash.
    let (input, expected) = VECTORS[0];
    let bytes = kerl::trytes_to_bytes(input).unwrap();
    let digest = kerl::trytes_to_bytes(expected).unwrap();

    let mut keccak = Keccak384::new();
    keccak.update(bytes);
    assert_eq!(keccak.finalize()[..], digest[..]);
}

#[test]
fn invalid_trits() {
    let mut kerl = Kerl::new();
    assert_eq!(kerl.absorb(&[]), Err(Error::InvalidSpongeLength { found: 0 }));
    assert!(kerl.absorb(&[1, 0, 0, 0, 0, -1]).is_err());
}

#[test]
fn invalid_trytes() {
    let mut kerl = Kerl::new();
    assert!(kerl.absorb_trytes("").is_err());
    assert!(kerl.absorb_trytes("AR").is_err());
}

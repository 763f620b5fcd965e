//! Bech32 alphabet, 8-bit/5-bit packing and the BCH checksum over GF(32).
//!
//! The checksum is the classic BIP-173 construction: the human-readable
//! prefix is expanded into 5-bit values, followed by the payload symbols and
//! six zero placeholders, and reduced with the five generator polynomials.
//! Unlike BIP-173 there is no `1` separator in the text form; the prefix has a
//! fixed length and the payload follows it directly.

use crate::constants::CHECKSUM_LENGTH;
use thiserror::Error;

/// Bech32 alphabet. Excludes `1`, `b`, `i` and `o`.
const ALPHABET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Generator polynomials for the 30-bit residue.
const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Constant XORed into the residue (classic Bech32, not Bech32m).
const CHECKSUM_CONSTANT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bech32Error {
    #[error("invalid character human-readable part (0x{0:02x} at position {1})")]
    InvalidHrpCharacter(u8, usize),

    #[error("non alphanumeric character (0x{0:02x} at position {1})")]
    NonAlphanumericCharacter(u8, usize),

    #[error("invalid character '{0}' at position {1}")]
    InvalidCharacter(char, usize),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("invalid padding")]
    InvalidPadding,
}

/// Build reverse alphabet lookup table at compile time.
const fn build_reverse_alphabet() -> [u8; 128] {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static REVERSE_ALPHABET: [u8; 128] = build_reverse_alphabet();

/// Map a 5-bit value to its alphabet character.
pub fn symbol_to_char(symbol: u8) -> char {
    ALPHABET[(symbol & 0x1f) as usize] as char
}

/// Map a lowercase alphabet character back to its 5-bit value.
///
/// `position` is only used for error reporting.
pub fn char_to_symbol(ch: u8, position: usize) -> Result<u8, Bech32Error> {
    if !ch.is_ascii_alphanumeric() {
        return Err(Bech32Error::NonAlphanumericCharacter(ch, position));
    }
    match REVERSE_ALPHABET[ch as usize] {
        0xFF => Err(Bech32Error::InvalidCharacter(ch as char, position)),
        symbol => Ok(symbol),
    }
}

/// Check that every prefix byte is printable ASCII (33..=126).
pub fn validate_hrp(hrp: &[u8]) -> Result<(), Bech32Error> {
    match hrp.iter().position(|&c| !(33..=126).contains(&c)) {
        Some(i) => Err(Bech32Error::InvalidHrpCharacter(hrp[i], i)),
        None => Ok(()),
    }
}

/// Repack bytes into 5-bit symbols, zero-padding the final group.
pub fn to_5bit(data: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::with_capacity((data.len() * 8).div_ceil(5));

    for &byte in data {
        acc = ((acc << 8) | byte as u32) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            result.push(((acc >> bits) & 0x1f) as u8);
        }
    }

    if bits > 0 {
        result.push(((acc << (5 - bits)) & 0x1f) as u8);
    }

    result
}

/// Repack 5-bit symbols into bytes.
///
/// Leftover bits must be fewer than five and all zero; anything else means
/// the symbols were not produced by [`to_5bit`].
pub fn from_5bit(symbols: &[u8]) -> Result<Vec<u8>, Bech32Error> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::with_capacity(symbols.len() * 5 / 8);

    for &symbol in symbols {
        acc = ((acc << 5) | (symbol & 0x1f) as u32) & 0xfff;
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            result.push(((acc >> bits) & 0xff) as u8);
        }
    }

    if bits >= 5 || (acc & ((1 << bits) - 1)) != 0 {
        return Err(Bech32Error::InvalidPadding);
    }

    Ok(result)
}

/// Expand the prefix: high 3 bits of each byte, a zero, then the low 5 bits.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() * 2 + 1);
    result.extend(bytes.iter().map(|b| b >> 5));
    result.push(0);
    result.extend(bytes.iter().map(|b| b & 0x1f));
    result
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ v as u32;
        for (i, g) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Compute the six checksum symbols for `hrp` and the 5-bit `data`.
pub fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);

    let residue = polymod(&values) ^ CHECKSUM_CONSTANT;

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((residue >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Verify 5-bit `data` whose last six symbols are the checksum.
pub fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == CHECKSUM_CONSTANT
}

/// Encode `hrp` followed by the 5-bit `data` and its checksum.
pub fn encode(hrp: &str, data: &[u8]) -> String {
    let checksum = create_checksum(hrp, data);
    let mut result = String::with_capacity(hrp.len() + data.len() + CHECKSUM_LENGTH);
    result.push_str(hrp);
    result.extend(data.iter().chain(checksum.iter()).map(|&s| symbol_to_char(s)));
    result
}

/// Crockford Base32 encoding and decoding for TSID
///
/// A TSID is written as exactly 13 symbols. The first 12 symbols carry five
/// bits each, starting at the most significant bit; the 13th carries the last
/// four bits. When decoding, only the low four bits of the 13th symbol count.
use once_cell::sync::Lazy;

use crate::error::{Result, TsidError};

/// Character set for encoding (Crockford: no I, L, O, U)
const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Length of every encoded TSID
pub const ENCODED_LEN: usize = 13;

const BITS_PER_SYMBOL: u32 = 5;
const LAST_SYMBOL_BITS: u32 = 4;
const LAST_SYMBOL_MASK: u64 = (1 << LAST_SYMBOL_BITS) - 1;

/// Lookup table for decoding ASCII bytes to symbol values, -1 when invalid
static DECODE_MAP: Lazy<[i8; 128]> = Lazy::new(|| {
    let mut map = [-1i8; 128];
    for (i, &c) in ALPHABET.iter().enumerate() {
        map[c as usize] = i as i8;
        map[c.to_ascii_lowercase() as usize] = i as i8;
    }
    for (alias, value) in [(b'O', 0), (b'I', 1), (b'L', 1)] {
        map[alias as usize] = value;
        map[alias.to_ascii_lowercase() as usize] = value;
    }
    map
});

/// Encode a value into its 13 ASCII symbols without allocating
pub fn encode_array(value: u64) -> [u8; ENCODED_LEN] {
    let mut buffer = [0u8; ENCODED_LEN];
    let mut current = value;
    for slot in buffer.iter_mut().take(ENCODED_LEN - 1) {
        *slot = ALPHABET[(current >> (u64::BITS - BITS_PER_SYMBOL)) as usize];
        current <<= BITS_PER_SYMBOL;
    }
    buffer[ENCODED_LEN - 1] = ALPHABET[(current >> (u64::BITS - LAST_SYMBOL_BITS)) as usize];
    buffer
}

/// Encode a value into a 13-character uppercase string
pub fn encode(value: u64) -> String {
    encode_array(value).iter().map(|&b| b as char).collect()
}

/// Decode a 13-character string back to its value
///
/// Surrounding whitespace is ignored, lowercase is accepted and `I`, `L`, `O`
/// are read as `1`, `1`, `0`.
pub fn decode(encoded: &str) -> Result<u64> {
    let trimmed = encoded.trim();
    let length = trimmed.chars().count();
    if length != ENCODED_LEN {
        return Err(TsidError::InvalidLength { length });
    }

    let mut result: u64 = 0;
    for (index, symbol) in trimmed.chars().enumerate() {
        let value = symbol_value(symbol).ok_or(TsidError::InvalidSymbol { symbol, index })?;
        if index < ENCODED_LEN - 1 {
            let shift = u64::BITS - BITS_PER_SYMBOL * (index as u32 + 1);
            result |= value << shift;
        } else {
            // Only four bits are left for the final symbol.
            result |= value & LAST_SYMBOL_MASK;
        }
    }

    Ok(result)
}

#[inline]
fn symbol_value(symbol: char) -> Option<u64> {
    if !symbol.is_ascii() {
        return None;
    }
    let value = DECODE_MAP[symbol as usize];
    (value >= 0).then_some(value as u64)
}

//! 4B/5B symbol coding.
//!
//! Each data nibble travels as a 5-bit code chosen to bound the run
//! length of identical line levels. Decoding uses a 32-entry reverse
//! array indexed by the integer value of the code; the 16 patterns with
//! no nibble assigned stay marked invalid so they are rejected instead
//! of silently defaulting.

use crate::error::DecodeError;
use crate::utils::consts::{SYMBOL_BITS, SYMBOLS_PER_BYTE};

/// 5-bit line code for each nibble value, indexed by nibble.
const NIBBLE_TO_CODE: [u8; 16] = [
    0b11110, 0b01001, 0b10100, 0b10101, // 0..=3
    0b01010, 0b01011, 0b01110, 0b01111, // 4..=7
    0b10010, 0b10011, 0b10110, 0b10111, // 8..=11
    0b11010, 0b11011, 0b11100, 0b11101, // 12..=15
];

const INVALID: i8 = -1;

/// Immutable symbol table. Built once, never mutated, safe to share
/// read-only across concurrent decode sessions.
pub struct SymbolTable {
    code_to_nibble: [i8; 32],
}

impl SymbolTable {
    pub const fn new() -> Self {
        let mut code_to_nibble = [INVALID; 32];
        let mut nibble = 0;
        while nibble < NIBBLE_TO_CODE.len() {
            code_to_nibble[NIBBLE_TO_CODE[nibble] as usize] = nibble as i8;
            nibble += 1;
        }
        Self { code_to_nibble }
    }

    /// 5-bit transmission code for a data nibble.
    pub fn encode_nibble(&self, nibble: u8) -> u8 {
        NIBBLE_TO_CODE[(nibble & 0x0F) as usize]
    }

    /// Reverse lookup; `None` for the 16 undefined codes.
    pub fn decode_symbol(&self, code: u8) -> Option<u8> {
        match self.code_to_nibble[(code & 0x1F) as usize] {
            INVALID => None,
            nibble => Some(nibble as u8),
        }
    }

    /// Partition `bits` into consecutive 5-bit symbols (MSB first) and
    /// map each to its nibble, in stream order.
    pub fn decode_bits(&self, bits: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut nibbles = Vec::with_capacity(bits.len() / SYMBOL_BITS);
        for (index, chunk) in bits.chunks_exact(SYMBOL_BITS).enumerate() {
            let code = pack_symbol(chunk);
            let nibble = self
                .decode_symbol(code)
                .ok_or(DecodeError::InvalidSymbol { code, index })?;
            nibbles.push(nibble);
        }
        Ok(nibbles)
    }

    /// Expand a byte slice into its transmitted bit sequence, two
    /// symbols per byte, upper nibble first.
    pub fn encode_bytes(&self, data: &[u8]) -> Vec<u8> {
        let mut bits =
            Vec::with_capacity(data.len() * SYMBOLS_PER_BYTE * SYMBOL_BITS);
        for &byte in data {
            push_symbol_bits(&mut bits, self.encode_nibble(byte >> 4));
            push_symbol_bits(&mut bits, self.encode_nibble(byte & 0x0F));
        }
        bits
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide shared table.
pub static SYMBOL_TABLE: SymbolTable = SymbolTable::new();

fn pack_symbol(chunk: &[u8]) -> u8 {
    let mut code = 0u8;
    for (i, &bit) in chunk.iter().enumerate() {
        code |= (bit & 1) << (SYMBOL_BITS - 1 - i);
    }
    code
}

fn push_symbol_bits(bits: &mut Vec<u8>, code: u8) {
    for i in (0..SYMBOL_BITS).rev() {
        bits.push((code >> i) & 1);
    }
}

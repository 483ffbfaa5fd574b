use serde::Serialize;
use tracing::debug;

use crate::channel::Channel;
use crate::error::DecodeError;
use crate::phy::b4b5::SymbolTable;
use crate::phy::{baseline, nrzi, signal};
use crate::utils::consts::SYMBOLS_PER_BYTE;

/// Outcome of one decode session.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    /// Threshold established from the preamble.
    pub baseline: f64,
    /// Recovered payload, in stream order.
    pub payload: Vec<u8>,
}

/// Runs the decode pipeline: baseline estimation, thresholding, NRZI
/// decode, 4B/5B reverse lookup, byte assembly. Each stage consumes the
/// previous stage's complete output; nothing is revisited and no state
/// survives between sessions beyond the shared read-only symbol table.
pub struct SessionDecoder<'a> {
    table: &'a SymbolTable,
}

impl<'a> SessionDecoder<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// Decode one fixed-size payload from the channel. Aborts on the
    /// first error; a partial payload is never returned.
    pub fn decode<C: Channel>(
        &self,
        channel: &mut C,
    ) -> Result<DecodeReport, DecodeError> {
        let baseline = baseline::estimate(channel)?;
        debug!("baseline established: {:.2}", baseline);

        let signals = signal::read_frame(channel, baseline)?;
        let bits = nrzi::decode(&signals);
        let nibbles = self.table.decode_bits(&bits)?;
        let payload = assemble_bytes(&nibbles);
        debug!("decoded {} bytes", payload.len());

        Ok(DecodeReport { baseline, payload })
    }
}

/// One output byte from its upper and lower nibble.
pub fn assemble(upper: u8, lower: u8) -> u8 {
    (upper << 4) | (lower & 0x0F)
}

/// Pair nibbles into bytes in stream order, upper nibble first.
fn assemble_bytes(nibbles: &[u8]) -> Vec<u8> {
    nibbles
        .chunks_exact(SYMBOLS_PER_BYTE)
        .map(|pair| assemble(pair[0], pair[1]))
        .collect()
}

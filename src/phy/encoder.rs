//! Forward pipeline and transmission simulator.
//!
//! The decode path's mirror image: payload bytes to 4B/5B bits to NRZI
//! signal levels to raw samples around a baseline. Drives loopback mode
//! and the offline round-trip tests; a real transmitter sits on the
//! other end of the socket.

use crate::phy::b4b5::SymbolTable;
use crate::phy::nrzi;
use crate::phy::signal::Signal;
use crate::utils::consts::PREAMBLE_LEN;

/// Encode a payload into the signal levels a transmitter would drive.
pub fn encode_payload(table: &SymbolTable, payload: &[u8]) -> Vec<Signal> {
    nrzi::encode(&table.encode_bytes(payload))
}

/// Render a full session transmission as raw samples: the preamble held
/// at `baseline`, then one sample per level at `baseline ± swing`.
pub fn simulate_transmission(
    table: &SymbolTable,
    payload: &[u8],
    baseline: u8,
    swing: u8,
) -> Vec<u8> {
    let mut samples = vec![baseline; PREAMBLE_LEN];
    for level in encode_payload(table, payload) {
        samples.push(match level {
            Signal::High => baseline.saturating_add(swing),
            Signal::Low => baseline.saturating_sub(swing),
        });
    }
    samples
}

//! NRZI line coding: a 1 is signaled by a level transition, a 0 by
//! holding the previous level.

use super::signal::Signal;

/// Differential decode of a signal sequence into bits.
///
/// The line idles Low before the frame, so the first element maps
/// directly (Low -> 0, High -> 1) and every later bit reports whether
/// the level changed from its predecessor. Pure function, same length
/// out as in.
pub fn decode(signals: &[Signal]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(signals.len());
    let mut prev = Signal::Low;
    for &signal in signals {
        bits.push(u8::from(signal != prev));
        prev = signal;
    }
    bits
}

/// Forward encode, the inverse of [`decode`] from the same idle-Low
/// starting level.
pub fn encode(bits: &[u8]) -> Vec<Signal> {
    let mut signals = Vec::with_capacity(bits.len());
    let mut level = Signal::Low;
    for &bit in bits {
        if bit != 0 {
            level = toggle(level);
        }
        signals.push(level);
    }
    signals
}

fn toggle(level: Signal) -> Signal {
    match level {
        Signal::High => Signal::Low,
        Signal::Low => Signal::High,
    }
}

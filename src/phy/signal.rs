use crate::channel::Channel;
use crate::error::DecodeError;
use crate::utils::consts::FRAME_SIGNALS;

/// Binary line level of one raw sample relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    High,
    Low,
}

/// Strict-greater rule: a sample equal to the baseline reads Low.
/// This matches the transmitter's framing of the threshold and is part
/// of the contract, not an accident of comparison direction.
pub fn classify(sample: u8, baseline: f64) -> Signal {
    if f64::from(sample) > baseline {
        Signal::High
    } else {
        Signal::Low
    }
}

/// Read the full signal frame and binarize each sample against the
/// session baseline.
pub fn read_frame<C: Channel>(
    channel: &mut C,
    baseline: f64,
) -> Result<Vec<Signal>, DecodeError> {
    let mut signals = Vec::with_capacity(FRAME_SIGNALS);
    for got in 0..FRAME_SIGNALS {
        match channel.read_sample()? {
            Some(sample) => signals.push(classify(sample, baseline)),
            None => return Err(DecodeError::PrematureStreamEnd { got }),
        }
    }
    Ok(signals)
}

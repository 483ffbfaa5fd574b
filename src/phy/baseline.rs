use crate::channel::Channel;
use crate::error::DecodeError;
use crate::utils::consts::PREAMBLE_LEN;

/// Average the fixed-length preamble into the session baseline.
///
/// Consumes exactly `PREAMBLE_LEN` samples; the result is immutable for
/// the rest of the session.
pub fn estimate<C: Channel>(channel: &mut C) -> Result<f64, DecodeError> {
    let mut sum = 0.0;
    for got in 0..PREAMBLE_LEN {
        match channel.read_sample()? {
            Some(sample) => sum += f64::from(sample),
            None => return Err(DecodeError::ShortPreamble { got }),
        }
    }
    Ok(sum / PREAMBLE_LEN as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MemoryChannel;

    #[test]
    fn constant_preamble_averages_exactly() {
        let mut channel = MemoryChannel::new(vec![100u8; PREAMBLE_LEN]);
        assert_eq!(estimate(&mut channel).unwrap(), 100.0);
    }

    #[test]
    fn mixed_preamble_averages() {
        let mut samples = vec![90u8; PREAMBLE_LEN / 2];
        samples.extend(vec![110u8; PREAMBLE_LEN / 2]);
        let mut channel = MemoryChannel::new(samples);
        assert_eq!(estimate(&mut channel).unwrap(), 100.0);
    }

    #[test]
    fn truncated_preamble_is_rejected() {
        let mut channel = MemoryChannel::new(vec![100u8; 50]);
        match estimate(&mut channel) {
            Err(DecodeError::ShortPreamble { got }) => assert_eq!(got, 50),
            other => panic!("expected ShortPreamble, got {other:?}"),
        }
    }

    #[test]
    fn exactly_one_preamble_of_samples_is_consumed() {
        let mut channel = MemoryChannel::new(vec![100u8; PREAMBLE_LEN + 1]);
        estimate(&mut channel).unwrap();
        assert_eq!(channel.read_sample().unwrap(), Some(100));
        assert_eq!(channel.read_sample().unwrap(), None);
    }
}

use std::io;

use thiserror::Error;

/// Everything that can abort a decode session. All variants are
/// unrecoverable within the core: the session stops at the first one
/// and any partially decoded payload is discarded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Stream ended before the 64-sample preamble was collected.
    #[error("stream ended after {got} of 64 preamble samples")]
    ShortPreamble { got: usize },

    /// Stream ended inside the 320-sample signal frame.
    #[error("stream ended after {got} of 320 frame samples")]
    PrematureStreamEnd { got: usize },

    /// A 5-bit group is not one of the 16 defined 4B/5B codes.
    #[error("5-bit group {code:#07b} at symbol {index} has no 4B/5B entry")]
    InvalidSymbol { code: u8, index: usize },

    /// Underlying transport failure, opaque to the decode core.
    #[error("channel I/O failed")]
    Channel(#[from] io::Error),
}

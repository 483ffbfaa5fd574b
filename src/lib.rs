//! Physical-layer decode client core.
//!
//! Recovers a fixed-size byte payload from a raw sample stream that was
//! line-coded with NRZI over 4B/5B symbols: baseline calibration from a
//! preamble, High/Low thresholding, differential bit recovery, reverse
//! symbol lookup, and byte reassembly.

pub mod channel;
pub mod error;
pub mod phy;
pub mod ui;
pub mod utils;

pub use channel::{Channel, MemoryChannel, StreamChannel};
pub use error::DecodeError;
pub use phy::{DecodeReport, SessionDecoder, SYMBOL_TABLE};

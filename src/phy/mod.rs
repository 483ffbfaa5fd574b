// Physical layer: baseline thresholding over NRZI + 4B/5B line coding.

pub mod b4b5;
pub mod baseline;
pub mod decoder;
pub mod encoder;
pub mod nrzi;
pub mod signal;

pub use b4b5::{SYMBOL_TABLE, SymbolTable};
pub use decoder::{DecodeReport, SessionDecoder};
pub use signal::Signal;

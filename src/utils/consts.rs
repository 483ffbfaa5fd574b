/// Raw samples in the calibration preamble
pub const PREAMBLE_LEN: usize = 64;

/// Payload length of one decode session (bytes)
pub const PAYLOAD_BYTES: usize = 32;

/// Bits per data nibble
pub const NIBBLE_BITS: usize = 4;

/// Bits per transmitted 4B/5B symbol
pub const SYMBOL_BITS: usize = 5;

/// Symbols consumed per output byte (upper nibble, then lower)
pub const SYMBOLS_PER_BYTE: usize = 2;

/// Signal levels in one frame: 32 bytes * 8 bits * 5/4 expansion = 320
pub const FRAME_SIGNALS: usize =
    PAYLOAD_BYTES * 8 * SYMBOL_BITS / NIBBLE_BITS;

/// Samples read per session (preamble + signal frame)
pub const SESSION_SAMPLES: usize = PREAMBLE_LEN + FRAME_SIGNALS;

/// Log level (can be overridden with RUST_LOG)
pub const LOG_LEVEL: &str = "info";

/// Default server host
pub const DEFAULT_HOST: &str = "codebank.xyz";

/// Default server port
pub const DEFAULT_PORT: u16 = 38002;

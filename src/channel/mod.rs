//! Sample transport abstraction.
//!
//! The decode core only ever pulls one raw sample at a time and pushes
//! one byte at a time, so the trait mirrors exactly that. Wrapping the
//! transport this way lets the pipeline run against an in-memory sample
//! sequence in tests as easily as against a live socket.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// Ordered, blocking byte-value transport for one decode session.
pub trait Channel {
    /// Read the next raw sample. `Ok(None)` means end of stream.
    fn read_sample(&mut self) -> io::Result<Option<u8>>;

    /// Write one byte back to the transport.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;
}

/// Channel over any blocking reader/writer, e.g. a `TcpStream`.
pub struct StreamChannel<S> {
    stream: S,
}

impl<S: Read + Write> StreamChannel<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }
}

impl<S: Read + Write> Channel for StreamChannel<S> {
    fn read_sample(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.stream.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.stream.write_all(&[byte])
    }
}

/// In-memory channel: a queue of incoming samples plus a capture buffer
/// of everything written. Used by tests and loopback mode.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    incoming: VecDeque<u8>,
    written: Vec<u8>,
}

impl MemoryChannel {
    pub fn new(samples: Vec<u8>) -> Self {
        Self {
            incoming: samples.into(),
            written: Vec::new(),
        }
    }

    /// Append a sample to the incoming queue (e.g. a status reply).
    pub fn push_sample(&mut self, sample: u8) {
        self.incoming.push_back(sample);
    }

    /// Everything the session wrote back, in order.
    pub fn written(&self) -> &[u8] {
        &self.written
    }
}

impl Channel for MemoryChannel {
    fn read_sample(&mut self) -> io::Result<Option<u8>> {
        Ok(self.incoming.pop_front())
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.written.push(byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn memory_channel_drains_then_reports_end_of_stream() {
        let mut channel = MemoryChannel::new(vec![7, 8]);
        assert_eq!(channel.read_sample().unwrap(), Some(7));
        assert_eq!(channel.read_sample().unwrap(), Some(8));
        assert_eq!(channel.read_sample().unwrap(), None);
    }

    #[test]
    fn memory_channel_captures_writes_in_order() {
        let mut channel = MemoryChannel::new(Vec::new());
        channel.write_byte(0xA5).unwrap();
        channel.write_byte(0x5A).unwrap();
        assert_eq!(channel.written(), &[0xA5, 0x5A]);
    }

    #[test]
    fn stream_channel_reads_single_bytes_until_eof() {
        let mut channel = StreamChannel::new(Cursor::new(vec![1, 2, 3]));
        assert_eq!(channel.read_sample().unwrap(), Some(1));
        assert_eq!(channel.read_sample().unwrap(), Some(2));
        assert_eq!(channel.read_sample().unwrap(), Some(3));
        assert_eq!(channel.read_sample().unwrap(), None);
    }
}

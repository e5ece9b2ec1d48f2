//! Byte-stream abstraction the dispatcher reads from and writes to.
//!
//! A [`Transport`] is anything that can report how many bytes are waiting, hand them
//! out one at a time without blocking, and accept single bytes for output: a UART
//! peripheral, a USB CDC endpoint, or the in-memory [`BufferedStream`] used for tests
//! and for bridging a host terminal.

use heapless::{Deque, Vec};

/// Non-blocking, byte-at-a-time stream.
pub trait Transport {
    /// Number of bytes that can be read right now.
    fn available(&self) -> usize;

    /// Reads one byte. Only meaningful while `available() > 0`; returns `None` otherwise.
    fn read(&mut self) -> Option<u8>;

    /// Writes one byte, returning how many bytes were accepted (0 or 1).
    fn write(&mut self, byte: u8) -> usize;

    /// Writes every byte of `bytes`, returning how many were accepted.
    fn write_all(&mut self, bytes: &[u8]) -> usize {
        bytes.iter().map(|&b| self.write(b)).sum()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn available(&self) -> usize {
        (**self).available()
    }

    fn read(&mut self) -> Option<u8> {
        (**self).read()
    }

    fn write(&mut self, byte: u8) -> usize {
        (**self).write(byte)
    }

    fn write_all(&mut self, bytes: &[u8]) -> usize {
        (**self).write_all(bytes)
    }
}

/// In-memory transport: a bounded receive queue and a bounded transmit log.
///
/// Bytes pushed with [`feed`](Self::feed) become readable by the dispatcher; bytes the
/// dispatcher writes are kept until [`take_output`](Self::take_output) or
/// [`clear_output`](Self::clear_output). Both sides drop bytes once full.
///
/// # Type Parameters
/// - `RX`: Receive queue capacity.
/// - `TX`: Transmit log capacity.
pub struct BufferedStream<const RX: usize, const TX: usize> {
    rx: Deque<u8, RX>,
    tx: Vec<u8, TX>,
}

impl<const RX: usize, const TX: usize> BufferedStream<RX, TX> {
    pub fn new() -> Self {
        Self {
            rx: Deque::new(),
            tx: Vec::new(),
        }
    }

    /// Queues bytes for reading. Returns how many fit.
    pub fn feed(&mut self, bytes: &[u8]) -> usize {
        let mut queued = 0;
        for &b in bytes {
            if self.rx.push_back(b).is_err() {
                break;
            }
            queued += 1;
        }
        queued
    }

    /// Bytes written so far.
    pub fn output(&self) -> &[u8] {
        &self.tx
    }

    /// Returns the written bytes and empties the transmit log.
    pub fn take_output(&mut self) -> Vec<u8, TX> {
        core::mem::take(&mut self.tx)
    }

    pub fn clear_output(&mut self) {
        self.tx.clear();
    }
}

impl<const RX: usize, const TX: usize> Default for BufferedStream<RX, TX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const RX: usize, const TX: usize> Transport for BufferedStream<RX, TX> {
    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write(&mut self, byte: u8) -> usize {
        match self.tx.push(byte) {
            Ok(()) => 1,
            Err(_) => 0,
        }
    }
}

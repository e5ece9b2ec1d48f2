use heapless::String;

/// A fixed-size, heapless line buffer accumulating bytes until a terminator arrives.
///
/// Only printable ASCII (`' '..='~'`) is ever stored, so the content is always a valid
/// `&str`. Once `N` bytes are held further bytes are refused and the pending line stays
/// truncated at `N`.
///
/// # Type Parameters
/// - `N`: The buffer capacity in bytes.
pub struct LineBuffer<const N: usize> {
    line: String<N>,
}

impl<const N: usize> LineBuffer<N> {
    /// Creates a new, empty `LineBuffer`.
    ///
    /// # Example
    /// ```
    /// let buf: LineBuffer<8> = LineBuffer::new();
    /// assert!(buf.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { line: String::new() }
    }

    /// Appends a byte at the end of the line.
    ///
    /// Returns `true` if the byte was stored, or `false` if the buffer is full or the
    /// byte is not printable.
    ///
    /// # Example
    /// ```
    /// let mut buf: LineBuffer<1> = LineBuffer::new();
    /// assert!(buf.push(b'a'));
    /// assert!(!buf.push(b'b'));
    /// ```
    pub fn push(&mut self, byte: u8) -> bool {
        if !Self::is_printable(byte) {
            return false;
        }
        self.line.push(byte as char).is_ok()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.line.clear();
    }

    /// Returns the accumulated line.
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }

    /// Returns the number of bytes stored.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Returns `true` if no byte is stored.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Returns `true` once the buffer holds `N` bytes.
    pub fn is_full(&self) -> bool {
        self.line.len() >= N
    }

    /// Returns the buffer capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Checks whether a byte may enter the buffer: printable ASCII, space included.
    pub const fn is_printable(byte: u8) -> bool {
        matches!(byte, b' '..=b'~')
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    /// Returns a new, empty `LineBuffer`.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn push_accumulates_in_order() {
        let mut buf: LineBuffer<8> = LineBuffer::new();
        for b in b"LED 1" {
            assert!(buf.push(*b));
        }
        assert_eq!(buf.as_str(), "LED 1");
        assert_eq!(buf.len(), 5);
        assert!(!buf.is_full());
    }

    #[test]
    fn push_refuses_bytes_past_capacity() {
        let mut buf: LineBuffer<3> = LineBuffer::new();
        assert!(buf.push(b'a'));
        assert!(buf.push(b'b'));
        assert!(buf.push(b'c'));
        assert!(buf.is_full());
        assert!(!buf.push(b'd'));
        assert_eq!(buf.as_str(), "abc");
        assert_eq!(buf.len(), buf.capacity());
    }

    #[rstest]
    #[case::nul(0x00)]
    #[case::tab(b'\t')]
    #[case::line_feed(b'\n')]
    #[case::escape(0x1b)]
    #[case::delete(0x7f)]
    #[case::high_bit(0xe9)]
    fn push_rejects_non_printable(#[case] byte: u8) {
        let mut buf: LineBuffer<4> = LineBuffer::new();
        assert!(!buf.push(byte));
        assert!(buf.is_empty());
    }

    #[rstest]
    #[case::space(b' ')]
    #[case::tilde(b'~')]
    #[case::digit(b'7')]
    #[case::punctuation(b',')]
    fn printable_range_is_space_to_tilde(#[case] byte: u8) {
        assert!(LineBuffer::<1>::is_printable(byte));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut buf: LineBuffer<4> = LineBuffer::default();
        buf.push(b'x');
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.as_str(), "");
        assert!(buf.push(b'y'));
        assert_eq!(buf.as_str(), "y");
    }

    #[test]
    fn zero_capacity_buffer_stores_nothing() {
        let mut buf: LineBuffer<0> = LineBuffer::new();
        assert!(buf.is_full());
        assert!(!buf.push(b'a'));
        assert_eq!(buf.as_str(), "");
    }
}

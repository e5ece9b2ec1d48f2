/// Splits a frozen line into delimiter-separated tokens.
///
/// Runs of delimiters are skipped, so leading, trailing and repeated delimiters never
/// produce empty tokens. Once the line is exhausted every further call to `next`
/// returns `None`.
///
/// # Example
/// ```
/// let mut tokens = Tokens::new("LED  1 ", b' ');
/// assert_eq!(tokens.next(), Some("LED"));
/// assert_eq!(tokens.next(), Some("1"));
/// assert_eq!(tokens.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'l> {
    line: &'l str,
    pos: usize,
    delimiter: u8,
}

impl<'l> Tokens<'l> {
    /// Starts tokenizing `line` from its first byte.
    pub fn new(line: &'l str, delimiter: u8) -> Self {
        Self {
            line,
            pos: 0,
            delimiter,
        }
    }

    /// Returns the unconsumed part of the line, leading delimiters skipped.
    ///
    /// Does not advance the cursor.
    pub fn remainder(&self) -> &'l str {
        let bytes = self.line.as_bytes();
        let mut start = self.pos;
        while start < bytes.len() && self.is_delimiter(bytes[start]) {
            start += 1;
        }
        &self.line[start..]
    }

    // A non-ASCII delimiter would split inside a UTF-8 sequence, so it never matches.
    fn is_delimiter(&self, byte: u8) -> bool {
        byte == self.delimiter && byte.is_ascii()
    }
}

impl<'l> Iterator for Tokens<'l> {
    type Item = &'l str;

    fn next(&mut self) -> Option<&'l str> {
        let bytes = self.line.as_bytes();
        let len = bytes.len();

        while self.pos < len && self.is_delimiter(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= len {
            return None;
        }

        let start = self.pos;
        while self.pos < len && !self.is_delimiter(bytes[self.pos]) {
            self.pos += 1;
        }
        let token = &self.line[start..self.pos];

        // step over the delimiter that ended the token
        if self.pos < len {
            self.pos += 1;
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect(line: &str, delimiter: u8) -> Vec<&str> {
        Tokens::new(line, delimiter).collect()
    }

    #[rstest]
    #[case::single("LED", &["LED"])]
    #[case::command_and_args("LED 1 on", &["LED", "1", "on"])]
    #[case::leading("   LED 1", &["LED", "1"])]
    #[case::trailing("LED 1   ", &["LED", "1"])]
    #[case::repeated("LED    1", &["LED", "1"])]
    #[case::empty("", &[])]
    #[case::only_delimiters("    ", &[])]
    fn splits_on_space(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(collect(line, b' '), expected);
    }

    #[test]
    fn custom_delimiter_keeps_spaces_inside_tokens() {
        assert_eq!(collect("RGB,220,0 1,234", b','), ["RGB", "220", "0 1", "234"]);
    }

    #[test]
    fn exhausted_tokenizer_keeps_returning_none() {
        let mut tokens = Tokens::new("A B", b' ');
        assert_eq!(tokens.next(), Some("A"));
        assert_eq!(tokens.next(), Some("B"));
        for _ in 0..5 {
            assert_eq!(tokens.next(), None);
        }
    }

    #[test]
    fn remainder_reports_unconsumed_text_without_advancing() {
        let mut tokens = Tokens::new("SAY  hello world", b' ');
        assert_eq!(tokens.next(), Some("SAY"));
        assert_eq!(tokens.remainder(), "hello world");
        assert_eq!(tokens.next(), Some("hello"));
        assert_eq!(tokens.remainder(), "world");
        assert_eq!(tokens.next(), Some("world"));
        assert_eq!(tokens.remainder(), "");
    }
}

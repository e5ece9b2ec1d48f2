//! Compile-time sizes and runtime line framing settings.

/// Default size of the line buffer in bytes (longest command plus arguments).
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Default number of commands the table can hold.
pub const DEFAULT_MAX_COMMANDS: usize = 10;

/// Maximum length of a command name in bytes.
pub const MAX_COMMAND_LEN: usize = 8;

/// Separates tokens within a line.
pub const DEFAULT_DELIMITER: u8 = b' ';

/// Marks the end of a line (carriage return).
pub const DEFAULT_TERMINATOR: u8 = b'\r';

/// Line framing and echo settings, read on every processed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Byte separating tokens.
    pub delimiter: u8,
    /// Byte ending a line and triggering dispatch.
    pub terminator: u8,
    /// Write every received byte back to the transport.
    pub echo: bool,
}

impl Config {
    /// Space-delimited, carriage-return-terminated lines without echo.
    pub const fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            terminator: DEFAULT_TERMINATOR,
            echo: false,
        }
    }

    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub const fn with_terminator(mut self, terminator: u8) -> Self {
        self.terminator = terminator;
        self
    }

    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

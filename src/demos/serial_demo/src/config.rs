use stream_command::BufferedStream;

pub const PROMPT: &str = "> ";

/// Longest line (command plus arguments) in bytes.
pub const INPUT_MAX_LEN: usize = 64;

/// Number of command slots; leaves room for a couple of extra registrations.
pub const MAX_COMMANDS: usize = 8;

pub const STREAM_RX_LEN: usize = 64;
pub const STREAM_TX_LEN: usize = 1024;

/// The in-memory stream bridging the terminal and the dispatcher.
pub type Port = BufferedStream<STREAM_RX_LEN, STREAM_TX_LEN>;

/// Line terminator the console delivers for Enter in raw mode.
#[cfg(unix)]
pub const ENTER: u8 = b'\n';
#[cfg(not(unix))]
pub const ENTER: u8 = b'\r';

#![cfg_attr(not(test), no_std)]

//! # stream_command
//!
//! A zero-heap, `no_std` command dispatcher for byte streams (serial ports, UARTs,
//! sockets bridged to a byte queue, ...).
//!
//! Bytes are pulled from a [`Transport`] whenever [`StreamCommand::poll`] is called.
//! Printable bytes accumulate in a fixed-size line buffer until the terminator byte
//! arrives; the line is then split on the delimiter byte and the first token is looked
//! up in the command table:
//!
//! - a registered command runs its handler, which pulls its own arguments from the
//!   [`Context`] it receives,
//! - an unknown command goes to the default handler (if any) together with the token,
//! - an empty line goes to the null handler (if any).
//!
//! ```ignore
//! let led = |ctx: &mut Context<'_, Port>| {
//!     if let Some(state) = ctx.next() { /* ... */ }
//! };
//! let mut cmd: StreamCommand<'_, Port> = StreamCommand::new(port);
//! cmd.register("LED", &led)?;
//! loop {
//!     cmd.poll();
//! }
//! ```
//!
//! Nothing is allocated: the line buffer and the command table are sized by const
//! generics ([`DEFAULT_BUFFER_SIZE`] and [`DEFAULT_MAX_COMMANDS`] unless overridden).

pub mod buffer;
pub mod config;
pub mod diagnostic;
pub mod dispatcher;
pub mod error;
pub mod table;
pub mod tokenizer;
pub mod transport;

pub use buffer::LineBuffer;
pub use config::{
    Config, DEFAULT_BUFFER_SIZE, DEFAULT_DELIMITER, DEFAULT_MAX_COMMANDS, DEFAULT_TERMINATOR,
    MAX_COMMAND_LEN,
};
pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use dispatcher::{CommandFn, Context, DefaultFn, NullFn, StreamCommand};
pub use error::RegisterError;
pub use table::{CommandEntry, CommandTable};
pub use tokenizer::Tokens;
pub use transport::{BufferedStream, Transport};

//! The line dispatcher: byte ingestion, line framing and handler dispatch.

use core::fmt;

use crate::buffer::LineBuffer;
use crate::config::{Config, DEFAULT_BUFFER_SIZE, DEFAULT_MAX_COMMANDS};
use crate::diagnostic::{self, Diagnostic, DiagnosticSink};
use crate::error::RegisterError;
use crate::table::{CommandEntry, CommandTable};
use crate::tokenizer::Tokens;
use crate::transport::Transport;

/// Handler of a registered command. Pulls its arguments from the [`Context`].
pub type CommandFn<'a, T> = &'a dyn Fn(&mut Context<'_, T>);

/// Handler for a first token that matches no command; receives that token.
pub type DefaultFn<'a, T> = &'a dyn Fn(&str, &mut Context<'_, T>);

/// Handler for a completed line without any token.
pub type NullFn<'a, T> = &'a dyn Fn(&mut Context<'_, T>);

/// What a handler sees while it runs: the rest of the current line and the transport.
///
/// Iterating the context yields the remaining delimiter-separated tokens; once they
/// are exhausted it keeps returning `None`.
pub struct Context<'l, T> {
    args: Tokens<'l>,
    transport: &'l mut T,
}

impl<'l, T: Transport> Context<'l, T> {
    /// The unconsumed arguments as a single slice, leading delimiters skipped.
    pub fn remainder(&self) -> &'l str {
        self.args.remainder()
    }

    /// The transport the line came from, for replies.
    pub fn transport(&mut self) -> &mut T {
        self.transport
    }

    pub fn write_byte(&mut self, byte: u8) -> usize {
        self.transport.write(byte)
    }
}

impl<'l, T> Iterator for Context<'l, T> {
    type Item = &'l str;

    fn next(&mut self) -> Option<&'l str> {
        self.args.next()
    }
}

impl<T: Transport> fmt::Write for Context<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_through(&mut *self.transport, s)
    }
}

/// Reads lines from a [`Transport`] and runs the handler registered for each one.
///
/// # Type Parameters
/// - `'a`: Lifetime of the registered handlers and diagnostic sink.
/// - `T`: The transport, owned (or a `&mut` to one).
/// - `BUF`: Line buffer size in bytes; longer lines are truncated.
/// - `CMDS`: Maximum number of registered commands.
///
/// # Example
/// ```ignore
/// let status: CommandFn<'_, Uart> = &|ctx| { let _ = write!(ctx, "OK\r\n"); };
/// let mut cmd: StreamCommand<'_, Uart> = StreamCommand::new(uart);
/// cmd.register("STATUS", status)?;
/// cmd.poll();
/// ```
pub struct StreamCommand<
    'a,
    T,
    const BUF: usize = { DEFAULT_BUFFER_SIZE },
    const CMDS: usize = { DEFAULT_MAX_COMMANDS },
> {
    transport: T,
    buffer: LineBuffer<BUF>,
    commands: CommandTable<CommandFn<'a, T>, CMDS>,
    default_handler: Option<DefaultFn<'a, T>>,
    null_handler: Option<NullFn<'a, T>>,
    diagnostics: Option<DiagnosticSink<'a>>,
    config: Config,
}

impl<'a, T: Transport, const BUF: usize, const CMDS: usize> StreamCommand<'a, T, BUF, CMDS> {
    /// Creates a dispatcher with the default [`Config`] (space, carriage return, no echo).
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, Config::default())
    }

    pub fn with_config(transport: T, config: Config) -> Self {
        Self {
            transport,
            buffer: LineBuffer::new(),
            commands: CommandTable::new(),
            default_handler: None,
            null_handler: None,
            diagnostics: None,
            config,
        }
    }

    // ==================== REGISTRATION ====================

    /// Adds a command to the table.
    ///
    /// A rejected registration is also reported as [`Diagnostic::CommandRejected`];
    /// the commands already registered keep working either way.
    ///
    /// # Errors
    /// - [`RegisterError::CapacityExceeded`] once `CMDS` commands are registered.
    /// - [`RegisterError::NameTooLong`] if `name` exceeds the command name limit.
    pub fn register(&mut self, name: &str, handler: CommandFn<'a, T>) -> Result<(), RegisterError> {
        self.commands.register(name, handler).inspect_err(|&error| {
            diagnostic::emit(
                self.diagnostics,
                Diagnostic::CommandRejected { name, error },
            );
        })
    }

    /// Handler for lines whose first token is not a registered command.
    pub fn set_default_handler(&mut self, handler: DefaultFn<'a, T>) {
        self.default_handler = Some(handler);
    }

    pub fn clear_default_handler(&mut self) {
        self.default_handler = None;
    }

    /// Handler for lines holding no token at all.
    pub fn set_null_handler(&mut self, handler: NullFn<'a, T>) {
        self.null_handler = Some(handler);
    }

    pub fn clear_null_handler(&mut self) {
        self.null_handler = None;
    }

    pub fn set_diagnostic_sink(&mut self, sink: DiagnosticSink<'a>) {
        self.diagnostics = Some(sink);
    }

    pub fn clear_diagnostic_sink(&mut self) {
        self.diagnostics = None;
    }

    // ==================== CONFIGURATION ====================

    pub fn set_delimiter(&mut self, delimiter: u8) {
        self.config.delimiter = delimiter;
    }

    pub fn set_terminator(&mut self, terminator: u8) {
        self.config.terminator = terminator;
    }

    /// Echo every received byte back to the transport.
    pub fn set_echo(&mut self, echo: bool) {
        self.config.echo = echo;
    }

    pub fn config(&self) -> Config {
        self.config
    }

    // ==================== INGESTION ====================

    /// Drains every byte the transport currently has, dispatching each completed line.
    ///
    /// Returns the number of lines dispatched. Never blocks: only reads while the
    /// transport reports bytes available.
    pub fn poll(&mut self) -> usize {
        let mut lines = 0;
        while self.transport.available() > 0 {
            let Some(byte) = self.transport.read() else {
                break;
            };
            if self.feed_byte(byte) {
                lines += 1;
            }
        }
        lines
    }

    /// Runs one byte through the line state machine.
    ///
    /// - the terminator dispatches the pending line and clears the buffer,
    /// - a printable byte is appended, or dropped with [`Diagnostic::BufferFull`]
    ///   when the buffer is full (the line stays truncated),
    /// - anything else is dropped.
    ///
    /// Returns `true` if a line was dispatched.
    pub fn feed_byte(&mut self, byte: u8) -> bool {
        if self.config.echo {
            self.transport.write(byte);
        }

        if byte == self.config.terminator {
            self.dispatch();
            self.buffer.clear();
            return true;
        }

        if LineBuffer::<BUF>::is_printable(byte) && !self.buffer.push(byte) {
            diagnostic::emit(self.diagnostics, Diagnostic::BufferFull { byte });
        }
        false
    }

    /// Discards the pending, unterminated line.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// The line accumulated so far.
    pub fn pending(&self) -> &str {
        self.buffer.as_str()
    }

    fn dispatch(&mut self) {
        let Self {
            transport,
            buffer,
            commands,
            default_handler,
            null_handler,
            diagnostics,
            config,
        } = self;
        let sink = *diagnostics;
        let line = buffer.as_str();
        diagnostic::emit(sink, Diagnostic::LineReceived { line });

        let mut ctx = Context {
            args: Tokens::new(line, config.delimiter),
            transport,
        };

        let Some(command) = ctx.args.next() else {
            diagnostic::emit(sink, Diagnostic::EmptyLine);
            if let Some(handler) = *null_handler {
                handler(&mut ctx);
            }
            return;
        };

        match commands.find(command) {
            Some(handler) => {
                diagnostic::emit(sink, Diagnostic::Matched { command });
                handler(&mut ctx);
            }
            None => {
                diagnostic::emit(sink, Diagnostic::Unmatched { command });
                if let Some(handler) = *default_handler {
                    handler(command, &mut ctx);
                }
            }
        }
    }

    // ==================== INTROSPECTION ====================

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Maximum number of commands the table holds (`CMDS`).
    pub fn command_capacity(&self) -> usize {
        self.commands.capacity()
    }

    /// Maximum length of a buffered line in bytes (`BUF`).
    pub fn buffer_capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Registered command names in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(CommandEntry::name)
    }

    // ==================== TRANSPORT ====================

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Swaps in a new transport and returns the old one. The pending line is kept.
    pub fn replace_transport(&mut self, transport: T) -> T {
        core::mem::replace(&mut self.transport, transport)
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Writes one byte straight to the transport.
    pub fn write_byte(&mut self, byte: u8) -> usize {
        self.transport.write(byte)
    }
}

impl<T: Transport, const BUF: usize, const CMDS: usize> fmt::Write
    for StreamCommand<'_, T, BUF, CMDS>
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_through(&mut self.transport, s)
    }
}

fn write_through<T: Transport>(transport: &mut T, s: &str) -> fmt::Result {
    if transport.write_all(s.as_bytes()) == s.len() {
        Ok(())
    } else {
        Err(fmt::Error)
    }
}

// ==================== TESTS =======================

//! Side channel for conditions the dispatcher handles on its own.
//!
//! None of these change control flow: a rejected registration still returns its error,
//! an overflowing line is still dispatched truncated. They exist so an application can
//! log what happened, either through a [`DiagnosticSink`] or, with the `defmt` feature,
//! through the `defmt` logger.

use crate::error::RegisterError;

/// Receives every [`Diagnostic`] the dispatcher emits.
pub type DiagnosticSink<'a> = &'a dyn Fn(&Diagnostic<'_>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic<'l> {
    /// A command could not be registered.
    CommandRejected { name: &'l str, error: RegisterError },

    /// The line buffer is full; `byte` was dropped.
    BufferFull { byte: u8 },

    /// A terminator completed `line`.
    LineReceived { line: &'l str },

    /// `command` matched a registered entry.
    Matched { command: &'l str },

    /// `command` matched nothing.
    Unmatched { command: &'l str },

    /// The completed line held no token.
    EmptyLine,
}

impl Diagnostic<'_> {
    /// `true` for conditions where input or a registration was lost.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Diagnostic::CommandRejected { .. } | Diagnostic::BufferFull { .. }
        )
    }
}

pub(crate) fn emit(sink: Option<DiagnosticSink<'_>>, diagnostic: Diagnostic<'_>) {
    #[cfg(feature = "defmt")]
    {
        if diagnostic.is_warning() {
            defmt::warn!("{}", diagnostic);
        } else {
            defmt::debug!("{}", diagnostic);
        }
    }

    if let Some(sink) = sink {
        sink(&diagnostic);
    }
}

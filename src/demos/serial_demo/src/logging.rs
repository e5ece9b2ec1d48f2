//! Logging setup and the bridge from dispatcher diagnostics to `tracing`.

use stream_command::Diagnostic;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Initializes stderr logging. `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Diagnostic sink for the dispatcher.
pub fn trace_diagnostic(diagnostic: &Diagnostic<'_>) {
    match *diagnostic {
        Diagnostic::CommandRejected { name, error } => {
            warn!(command = name, %error, "command not registered");
        }
        Diagnostic::BufferFull { byte } => {
            warn!(byte, "line buffer full, byte dropped");
        }
        Diagnostic::LineReceived { line } => debug!(line, "line received"),
        Diagnostic::Matched { command } => info!(command, "command matched"),
        Diagnostic::Unmatched { command } => info!(command, "unknown command"),
        Diagnostic::EmptyLine => debug!("empty line"),
    }
}

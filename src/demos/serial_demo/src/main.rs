mod cli;
mod config;
mod logging;
mod terminal;

use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context as _, Result};
use clap::Parser;

use stream_command::{CommandFn, DefaultFn, DiagnosticSink, NullFn, StreamCommand};
use usercode::Board;
use usercode::commands as uc;

use config::{INPUT_MAX_LEN, MAX_COMMANDS, PROMPT, Port};
use terminal::RawMode;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(args.verbose);

    let board = Board::default();
    let led: CommandFn<'_, Port> = &|ctx| uc::led(&board, ctx);
    let status: CommandFn<'_, Port> = &|ctx| uc::status(&board, ctx);
    let echo: CommandFn<'_, Port> = &|ctx| uc::echo(&board, ctx);
    let add: CommandFn<'_, Port> = &|ctx| uc::add(&board, ctx);
    let help: CommandFn<'_, Port> = &|ctx| uc::help(&board, ctx);
    let quit: CommandFn<'_, Port> = &|ctx| uc::quit(&board, ctx);
    let unknown: DefaultFn<'_, Port> = &|command, ctx| uc::unknown(&board, command, ctx);
    let blank: NullFn<'_, Port> = &|ctx| uc::blank(&board, ctx);
    let sink: DiagnosticSink<'_> = &logging::trace_diagnostic;

    let mut cmd: StreamCommand<'_, Port, INPUT_MAX_LEN, MAX_COMMANDS> =
        StreamCommand::with_config(Port::new(), args.config());
    cmd.set_diagnostic_sink(sink);
    for (name, handler) in [
        ("LED", led),
        ("STATUS", status),
        ("ECHO", echo),
        ("ADD", add),
        ("HELP", help),
        ("QUIT", quit),
    ] {
        cmd.register(name, handler)
            .with_context(|| format!("registering {name}"))?;
    }
    cmd.set_default_handler(unknown);
    cmd.set_null_handler(blank);
    tracing::info!(commands = cmd.command_count(), config = ?cmd.config(), "dispatcher ready");

    let _raw = if io::stdin().is_terminal() {
        Some(RawMode::enable(0).context("enabling raw terminal mode")?)
    } else {
        None
    };

    let mut stdout = io::stdout();
    write!(stdout, "Type HELP for commands, QUIT to exit.\r\n{PROMPT}")?;
    stdout.flush()?;

    let mut stdin = io::stdin().lock();
    let mut byte = [0u8; 1];
    while !board.quit_requested() {
        if stdin.read(&mut byte).context("reading stdin")? == 0 {
            break;
        }
        cmd.transport_mut().feed(&byte);
        let lines = cmd.poll();
        flush(&mut stdout, cmd.transport_mut())?;
        if lines > 0 && !board.quit_requested() {
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;
        }
    }

    tracing::info!(served = board.served(), "shell exited");
    Ok(())
}

fn flush(stdout: &mut io::Stdout, port: &mut Port) -> io::Result<()> {
    let out = port.take_output();
    stdout.write_all(&out)?;
    stdout.flush()
}

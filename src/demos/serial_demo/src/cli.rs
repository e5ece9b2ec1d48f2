use clap::{ArgAction, Parser};

use stream_command::{Config, DEFAULT_DELIMITER};

use crate::config::ENTER;

/// Interactive console driving a stream_command dispatcher from stdin.
#[derive(Debug, Parser)]
#[command(name = "serial_demo", version)]
pub struct Args {
    /// Token delimiter: a single ASCII character or one of space, tab, comma.
    #[arg(long, value_parser = parse_byte)]
    pub delimiter: Option<u8>,

    /// Line terminator: a single ASCII character or one of cr, lf.
    /// Defaults to what the console sends for Enter.
    #[arg(long, value_parser = parse_byte)]
    pub terminator: Option<u8>,

    /// Do not echo typed characters back.
    #[arg(long)]
    pub no_echo: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::new()
            .with_delimiter(self.delimiter.unwrap_or(DEFAULT_DELIMITER))
            .with_terminator(self.terminator.unwrap_or(ENTER))
            .with_echo(!self.no_echo)
    }
}

fn parse_byte(value: &str) -> Result<u8, String> {
    let byte = match value {
        "space" => b' ',
        "tab" => b'\t',
        "comma" => b',',
        "cr" | "\\r" => b'\r',
        "lf" | "\\n" => b'\n',
        _ => {
            let bytes = value.as_bytes();
            if bytes.len() != 1 || !bytes[0].is_ascii() {
                return Err(format!("expected a single ASCII character, got '{value}'"));
            }
            bytes[0]
        }
    };
    Ok(byte)
}

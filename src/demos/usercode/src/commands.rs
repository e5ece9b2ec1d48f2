//! Handler bodies for the demo command set.
//!
//! Each handler pulls its own arguments from the [`Context`] and answers on the same
//! transport the line came from. Replies end with `\r\n` so they render the same on a
//! serial terminal and on a host console in raw mode.

use core::cell::Cell;
use core::fmt::Write;

use stream_command::{Context, Transport};

/// Command names and their usage, in registration order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("LED", "LED <on|off|toggle>"),
    ("STATUS", "STATUS"),
    ("ECHO", "ECHO <text...>"),
    ("ADD", "ADD <int> [int...]"),
    ("HELP", "HELP"),
    ("QUIT", "QUIT"),
];

/// State the handlers act on.
#[derive(Debug, Default)]
pub struct Board {
    led: Cell<bool>,
    served: Cell<u32>,
    blank: Cell<u32>,
    quit: Cell<bool>,
}

impl Board {
    pub fn led_on(&self) -> bool {
        self.led.get()
    }

    /// Number of commands handled, unknown ones included.
    pub fn served(&self) -> u32 {
        self.served.get()
    }

    /// Number of empty lines received.
    pub fn blank_lines(&self) -> u32 {
        self.blank.get()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.get()
    }

    fn count(&self) {
        self.served.set(self.served.get().wrapping_add(1));
    }
}

pub fn led<T: Transport>(board: &Board, ctx: &mut Context<'_, T>) {
    board.count();
    let state = match ctx.next() {
        Some("on") => true,
        Some("off") => false,
        Some("toggle") => !board.led.get(),
        Some(other) => {
            let _ = write!(ctx, "ERR bad state '{}'\r\n", other);
            return;
        }
        None => {
            let _ = write!(ctx, "LED {}\r\n", on_off(board.led.get()));
            return;
        }
    };
    board.led.set(state);
    let _ = write!(ctx, "OK LED {}\r\n", on_off(state));
}

pub fn status<T: Transport>(board: &Board, ctx: &mut Context<'_, T>) {
    board.count();
    let _ = write!(
        ctx,
        "LED {} | served {} | blank {}\r\n",
        on_off(board.led.get()),
        board.served.get(),
        board.blank.get()
    );
}

pub fn echo<T: Transport>(board: &Board, ctx: &mut Context<'_, T>) {
    board.count();
    let text = ctx.remainder();
    let _ = write!(ctx, "{}\r\n", text);
}

pub fn add<T: Transport>(board: &Board, ctx: &mut Context<'_, T>) {
    board.count();
    let mut sum: i64 = 0;
    let mut terms = 0;
    while let Some(token) = ctx.next() {
        match token.parse::<i64>() {
            Ok(value) => {
                sum = sum.saturating_add(value);
                terms += 1;
            }
            Err(_) => {
                let _ = write!(ctx, "ERR not a number '{}'\r\n", token);
                return;
            }
        }
    }
    if terms == 0 {
        let _ = write!(ctx, "ERR usage: ADD <int> [int...]\r\n");
        return;
    }
    let _ = write!(ctx, "{}\r\n", sum);
}

pub fn help<T: Transport>(board: &Board, ctx: &mut Context<'_, T>) {
    board.count();
    let width = COMMANDS.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, usage) in COMMANDS {
        let _ = write!(ctx, "{:>width$} : {}\r\n", name, usage, width = width);
    }
}

pub fn quit<T: Transport>(board: &Board, ctx: &mut Context<'_, T>) {
    board.count();
    board.quit.set(true);
    let _ = write!(ctx, "bye\r\n");
}

/// Default handler: the first token matched no command.
pub fn unknown<T: Transport>(board: &Board, command: &str, ctx: &mut Context<'_, T>) {
    board.count();
    let _ = write!(ctx, "ERR unknown command '{}' (try HELP)\r\n", command);
}

/// Null handler: empty lines are only counted.
pub fn blank<T: Transport>(board: &Board, _ctx: &mut Context<'_, T>) {
    board.blank.set(board.blank.get().wrapping_add(1));
}

fn on_off(state: bool) -> &'static str {
    if state { "on" } else { "off" }
}

// ==================== TESTS =======================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stream_command::{BufferedStream, CommandFn, DefaultFn, NullFn, StreamCommand};

    type Port = BufferedStream<64, 512>;

    /// Runs `input` through a dispatcher wired like the demo and returns its replies.
    fn run(board: &Board, input: &str) -> String {
        let led_cmd: CommandFn<'_, Port> = &|ctx| led(board, ctx);
        let status_cmd: CommandFn<'_, Port> = &|ctx| status(board, ctx);
        let echo_cmd: CommandFn<'_, Port> = &|ctx| echo(board, ctx);
        let add_cmd: CommandFn<'_, Port> = &|ctx| add(board, ctx);
        let help_cmd: CommandFn<'_, Port> = &|ctx| help(board, ctx);
        let quit_cmd: CommandFn<'_, Port> = &|ctx| quit(board, ctx);
        let fallback: DefaultFn<'_, Port> = &|command, ctx| unknown(board, command, ctx);
        let empty: NullFn<'_, Port> = &|ctx| blank(board, ctx);

        let mut cmd: StreamCommand<'_, Port, 32, 8> = StreamCommand::new(Port::new());
        for (name, handler) in [
            ("LED", led_cmd),
            ("STATUS", status_cmd),
            ("ECHO", echo_cmd),
            ("ADD", add_cmd),
            ("HELP", help_cmd),
            ("QUIT", quit_cmd),
        ] {
            cmd.register(name, handler).unwrap();
        }
        cmd.set_default_handler(fallback);
        cmd.set_null_handler(empty);

        cmd.transport_mut().feed(input.as_bytes());
        cmd.poll();
        String::from_utf8(cmd.transport_mut().take_output().to_vec()).unwrap()
    }

    #[rstest]
    #[case::on("LED on\r", "OK LED on\r\n", true)]
    #[case::off("LED on\rLED off\r", "OK LED on\r\nOK LED off\r\n", false)]
    #[case::toggle("LED toggle\r", "OK LED on\r\n", true)]
    #[case::query("LED\r", "LED off\r\n", false)]
    #[case::bad_state("LED dim\r", "ERR bad state 'dim'\r\n", false)]
    fn led_command(#[case] input: &str, #[case] reply: &str, #[case] lit: bool) {
        let board = Board::default();
        assert_eq!(run(&board, input), reply);
        assert_eq!(board.led_on(), lit);
    }

    #[rstest]
    #[case::single("ADD 5\r", "5\r\n")]
    #[case::several("ADD 1 2 -4\r", "-1\r\n")]
    #[case::not_a_number("ADD 1 x\r", "ERR not a number 'x'\r\n")]
    #[case::no_terms("ADD\r", "ERR usage: ADD <int> [int...]\r\n")]
    fn add_command(#[case] input: &str, #[case] reply: &str) {
        assert_eq!(run(&Board::default(), input), reply);
    }

    #[test]
    fn echo_repeats_raw_arguments() {
        assert_eq!(run(&Board::default(), "ECHO  hello   world\r"), "hello   world\r\n");
    }

    #[test]
    fn status_reports_led_and_counter() {
        let board = Board::default();
        assert_eq!(
            run(&board, "LED on\rSTATUS\r"),
            "OK LED on\r\nLED on | served 2 | blank 0\r\n"
        );
        assert_eq!(board.served(), 2);
    }

    #[test]
    fn help_lists_every_command() {
        let out = run(&Board::default(), "HELP\r");
        assert_eq!(out.lines().count(), COMMANDS.len());
        for (name, usage) in COMMANDS {
            assert!(out.contains(&format!("{} : {}", name, usage)));
        }
    }

    #[test]
    fn quit_sets_flag() {
        let board = Board::default();
        assert_eq!(run(&board, "QUIT\r"), "bye\r\n");
        assert!(board.quit_requested());
    }

    #[test]
    fn unknown_and_empty_lines() {
        let board = Board::default();
        assert_eq!(
            run(&board, "led on\r\r  \rSTATUS\r"),
            "ERR unknown command 'led' (try HELP)\r\nLED off | served 2 | blank 2\r\n"
        );
        assert_eq!(board.served(), 2);
        assert_eq!(board.blank_lines(), 2);
    }
}

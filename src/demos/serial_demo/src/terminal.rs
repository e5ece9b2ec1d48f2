//! Raw console input, so the dispatcher sees every byte as it is typed.
//!
//! Canonical line editing and local echo are switched off while a [`RawMode`] guard is
//! alive; the dispatcher does its own line framing and echo. Dropping the guard
//! restores the previous mode.
//!
//! - On **Unix** the `termios` crate clears `ICANON` and `ECHO`.
//! - On **Windows** the `winapi` crate clears `ENABLE_LINE_INPUT` and `ENABLE_ECHO_INPUT`.

use std::io;

/// Restores the original console mode when dropped.
pub struct RawMode {
    #[cfg(unix)]
    fd: i32,
    #[cfg(unix)]
    original: termios::Termios,
    #[cfg(windows)]
    original_mode: u32,
}

impl RawMode {
    /// Enables raw mode on `fd` (0 for stdin).
    #[cfg(unix)]
    pub fn enable(fd: i32) -> io::Result<Self> {
        use termios::*;
        let original = Termios::from_fd(fd)?;
        let mut raw = original;
        raw.c_lflag &= !(ICANON | ECHO);
        tcsetattr(fd, TCSANOW, &raw)?;
        Ok(RawMode { fd, original })
    }

    /// Enables raw mode on the console input handle; `fd` is ignored.
    #[cfg(windows)]
    pub fn enable(_fd: i32) -> io::Result<Self> {
        use winapi::um::{
            consoleapi::{GetConsoleMode, SetConsoleMode},
            handleapi::INVALID_HANDLE_VALUE,
            processenv::GetStdHandle,
            winbase::STD_INPUT_HANDLE,
            wincon::{ENABLE_ECHO_INPUT, ENABLE_LINE_INPUT},
        };
        unsafe {
            let handle = GetStdHandle(STD_INPUT_HANDLE);
            if handle == INVALID_HANDLE_VALUE {
                return Err(io::Error::last_os_error());
            }
            let mut mode = 0;
            if GetConsoleMode(handle, &mut mode) == 0 {
                return Err(io::Error::last_os_error());
            }
            let original_mode = mode;
            mode &= !(ENABLE_LINE_INPUT | ENABLE_ECHO_INPUT);
            if SetConsoleMode(handle, mode) == 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(RawMode { original_mode })
        }
    }
}

impl Drop for RawMode {
    #[cfg(unix)]
    fn drop(&mut self) {
        use termios::*;
        if let Err(err) = tcsetattr(self.fd, TCSANOW, &self.original) {
            tracing::warn!(%err, "failed to restore terminal mode");
        }
    }

    #[cfg(windows)]
    fn drop(&mut self) {
        use winapi::um::consoleapi::SetConsoleMode;
        use winapi::um::handleapi::INVALID_HANDLE_VALUE;
        use winapi::um::processenv::GetStdHandle;
        use winapi::um::winbase::STD_INPUT_HANDLE;
        unsafe {
            let handle = GetStdHandle(STD_INPUT_HANDLE);
            if handle == INVALID_HANDLE_VALUE || SetConsoleMode(handle, self.original_mode) == 0 {
                tracing::warn!("failed to restore console mode");
            }
        }
    }
}

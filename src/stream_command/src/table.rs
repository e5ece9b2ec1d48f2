use heapless::{String, Vec};

use crate::config::MAX_COMMAND_LEN;
use crate::error::RegisterError;

/// A registered command: its name and the handler it runs.
pub struct CommandEntry<H> {
    name: String<MAX_COMMAND_LEN>,
    handler: H,
}

impl<H: Copy> CommandEntry<H> {
    /// The command name as registered.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A copy of the handler reference.
    pub fn handler(&self) -> H {
        self.handler
    }
}

/// Append-only table of commands with room for `N` entries.
///
/// Lookup is a linear scan in registration order and the first exact match wins, so a
/// second entry with an already registered name is stored but never reached.
///
/// # Type Parameters
/// - `H`: The handler type, usually a `&dyn Fn` reference.
/// - `N`: Maximum number of entries.
pub struct CommandTable<H, const N: usize> {
    entries: Vec<CommandEntry<H>, N>,
}

impl<H: Copy, const N: usize> CommandTable<H, N> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a command.
    ///
    /// # Errors
    /// - [`RegisterError::NameTooLong`] if `name` exceeds [`MAX_COMMAND_LEN`] bytes.
    /// - [`RegisterError::CapacityExceeded`] if the table already holds `N` entries.
    pub fn register(&mut self, name: &str, handler: H) -> Result<(), RegisterError> {
        let mut bounded = String::<MAX_COMMAND_LEN>::new();
        bounded
            .push_str(name)
            .map_err(|_| RegisterError::NameTooLong {
                max: MAX_COMMAND_LEN,
            })?;
        self.entries
            .push(CommandEntry {
                name: bounded,
                handler,
            })
            .map_err(|_| RegisterError::CapacityExceeded { capacity: N })
    }

    /// Returns the handler of the first entry named exactly `name`.
    pub fn find(&self, name: &str) -> Option<H> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_str() == name)
            .map(|entry| entry.handler)
    }

    /// Registered entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry<H>> {
        self.entries.iter()
    }

    /// Number of registered entries, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` once `N` entries are registered; further registrations fail.
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Maximum number of entries (`N`).
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<H: Copy, const N: usize> Default for CommandTable<H, N> {
    fn default() -> Self {
        Self::new()
    }
}

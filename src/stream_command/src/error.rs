use thiserror::Error;

/// Why a command could not be added to the table.
///
/// Neither variant is fatal: the dispatcher keeps serving the commands it already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// The table already holds `capacity` commands.
    #[error("command table is full ({capacity} entries)")]
    CapacityExceeded { capacity: usize },

    /// The name is longer than `max` bytes.
    #[error("command name is longer than {max} bytes")]
    NameTooLong { max: usize },
}

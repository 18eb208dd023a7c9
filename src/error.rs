use thiserror::Error;

/// Errors that can occur while configuring a [`crate::System`] before it runs.
///
/// Once a system is constructed and reset, every operation is infallible:
/// undefined reads return the floating-bus byte, writes to unmapped I/O are
/// dropped, and unknown opcodes execute as NOPs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A ROM image was the wrong size for its chip.
    #[error("{chip} ROM: expected {expected} bytes, got {got}")]
    RomSizeMismatch {
        chip: &'static str,
        expected: usize,
        got: usize,
    },

    /// Surfaced by callers that hand the core a `Result` from their own
    /// disk/network ROM loader; the core itself never touches a filesystem.
    #[error("ROM I/O error: {0}")]
    RomIoError(String),
}

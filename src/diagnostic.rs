//! Non-fatal warnings, collected while loading instruments or checking chord diagrams.

use derive_more::Display;

// -------------------------------------------------------------------------------------------------

/// A warning-level condition which does not stop processing.
///
/// Functions which produce diagnostics log them via `log::warn!` and also return them, so a UI
/// can show them to the user.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A chord scheme or tuning describes a different number of strings than the instrument has.
    #[display("{subject} describes {found} strings, while {instrument} has {expected} strings")]
    StringCountMismatch {
        instrument: String,
        subject: String,
        found: usize,
        expected: usize,
    },
    /// A persisted alternate tuning was discarded because its string count doesn't match.
    #[display(
        "dropped tuning '{tuning}' of {instrument}: it has {found} strings instead of {expected}"
    )]
    TuningRecordDropped {
        instrument: String,
        tuning: String,
        found: usize,
        expected: usize,
    },
}

impl Diagnostic {
    /// Log the diagnostic as warning and pass it through.
    pub(crate) fn logged(self) -> Self {
        log::warn!("{}", self);
        self
    }
}

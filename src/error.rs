//! Error type for all fallible fretboard operations.

use thiserror::Error;

// -------------------------------------------------------------------------------------------------

/// Errors raised by note parsing, chord lookups, instrument construction and diagram layouts.
///
/// Non-fatal conditions, like a chord scheme that doesn't match an instrument's string count,
/// are not errors but [`Diagnostic`](crate::Diagnostic)s.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid note '{0}': expecting one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B")]
    InvalidNote(String),

    #[error("unknown chord type '{name}', valid chord types are: {valid}")]
    UnknownChordType { name: String, valid: String },

    #[error("chord '{chord}' spans {span} frets, but a diagram can only show {max_frets} frets")]
    DiagramRange {
        chord: String,
        span: usize,
        max_frets: usize,
    },

    #[error("invalid chord scheme '{0}': expecting 'x' (muted), '0' (open) or 'fret[:finger]'")]
    InvalidScheme(String),

    #[error("invalid instrument '{name}': {reason}")]
    InvalidInstrument { name: String, reason: String },

    #[error("chord name '{0}' matches neither English nor German naming conventions")]
    InvalidChordName(String),

    #[error("invalid instrument catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shortcut for results with fretboard [`Error`]s.
pub type Result<T> = std::result::Result<T, Error>;

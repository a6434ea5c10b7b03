//! A chord and fretboard engine for stringed instruments.
//!
//! Calculates the notes of chords, maps an instrument's tuning to the notes on its fretboard,
//! and lays out fretboards and chord boxes, so a UI or image exporter only has to draw them.

pub mod error;
pub use error::{Error, Result};

pub mod diagnostic;
pub use diagnostic::Diagnostic;

pub mod note;
pub use note::{
    format_note_list, parse_note_list, validate_note_list, Note, NoteListState, SpelledNote, NOTES,
};

pub mod chord;
pub use chord::{chord_notes, Chord, ChordType};

pub mod instrument;
pub use instrument::{FretPosition, Instrument, Tuning};

pub mod catalog;
pub use catalog::{Catalog, InstrumentRecord, StringsRecord, TuningRecord};

pub mod geometry;
pub use geometry::{FretDot, FretSpacing, FretboardGeometry, FretboardStyle, Rect};

pub mod diagram;
pub use diagram::{
    visible_fret_window, ChordDiagram, ChordName, ChordScheme, DiagramLayout, DiagramStyle,
    FretWindow, Marker, MarkerKind, StringFingering,
};

pub mod prelude;

// -------------------------------------------------------------------------------------------------

/// Lay out a chord box for the given scheme with the default style, showing at most
/// `max_frets` frets.
pub fn diagram_layout(scheme: &ChordScheme, max_frets: usize) -> Result<DiagramLayout> {
    DiagramLayout::new(
        scheme,
        &DiagramStyle {
            max_frets,
            ..DiagramStyle::default()
        },
    )
}

// -------------------------------------------------------------------------------------------------

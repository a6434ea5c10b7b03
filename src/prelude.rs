//! The fretboard prelude.
//!
//! The purpose of this module is to alleviate imports of common fretboard types:
//!
//! ```
//! # #![allow(unused_imports)]
//! use fretboard::prelude::*;
//! ```

pub use super::{
    // notes and chords
    chord_notes,
    format_note_list,
    parse_note_list,
    Chord,
    ChordType,
    Note,
    SpelledNote,
    // instruments
    Catalog,
    Diagnostic,
    FretPosition,
    Instrument,
    Tuning,
    // layouts
    diagram_layout,
    ChordDiagram,
    ChordName,
    ChordScheme,
    DiagramLayout,
    DiagramStyle,
    MarkerKind,
    FretSpacing,
    FretboardGeometry,
    FretboardStyle,
    StringFingering,
    // errors
    Error,
    Result,
};

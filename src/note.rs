//! The 12 pitch classes of the chromatic scale and note name parsing.

use std::{
    fmt::Display,
    ops::{Add, Sub},
    str::FromStr,
};

use crate::{Error, Result};

// -------------------------------------------------------------------------------------------------

mod list;
pub use list::{format_note_list, parse_note_list, validate_note_list, NoteListState, SpelledNote};

// -------------------------------------------------------------------------------------------------

/// Canonical note names, indexed by pitch class.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// All notes in chromatic order, starting at C.
pub const NOTES: [Note; 12] = [
    Note::C,
    Note::Cs,
    Note::D,
    Note::Ds,
    Note::E,
    Note::F,
    Note::Fs,
    Note::G,
    Note::Gs,
    Note::A,
    Note::As,
    Note::B,
];

// -------------------------------------------------------------------------------------------------

/// A pitch class, independent of the octave. The suffix 's' in a variant name means sharp.
///
/// Note implements From\<u8\> and Into\<u8\>, wrapping values into the 0..12 range, and
/// TryFrom\<&str\>, so the enum names usually can be ignored.
///
/// For TryFrom<&str> conversions, the following notations are supported (case-insensitive):
/// `C` (plain), `C#` or `C♯` (sharps), `Db` or `D♭` (flats), `H` (German B),
/// `Cis` (German sharps), `Des`, `Es` and `As` (German flats).
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum Note {
    C = 0x00,
    Cs = 0x01,
    D = 0x02,
    Ds = 0x03,
    E = 0x04,
    F = 0x05,
    Fs = 0x06,
    G = 0x07,
    Gs = 0x08,
    A = 0x09,
    As = 0x0A,
    B = 0x0B,
}

impl Note {
    /// All 12 notes in chromatic order, starting at C.
    pub fn all() -> &'static [Note; 12] {
        &NOTES
    }

    /// Pitch class index of the note: 0 = C, 1 = C# ...
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Canonical, uppercase with sharp, name of the note.
    pub fn name(&self) -> &'static str {
        NOTE_NAMES[*self as usize]
    }

    /// return a new note, transposed by the given amount of semitones. Wraps around the octave.
    #[must_use]
    pub fn transposed(&self, offset: i32) -> Self {
        Note::from((self.index() as i32 + offset).rem_euclid(12) as u8)
    }

    /// Best effort parsing of a list of notes, dropping everything that isn't a note.
    /// See [`parse_note_list`] for details.
    pub fn parse_list(text: &str) -> Vec<Note> {
        parse_note_list(text)
            .into_iter()
            .map(|spelled| spelled.note())
            .collect()
    }

    /// Parse a single letter + accidental token, returning the note and its normalized spelling.
    pub(crate) fn parse_spelled(s: &str) -> Result<(Self, String)> {
        fn invalid(s: &str) -> Error {
            Error::InvalidNote(s.to_string())
        }

        let token = s.trim();
        let mut chars = token.chars();
        let letter = chars.next().ok_or_else(|| invalid(s))?;
        let key = letter_value(letter).ok_or_else(|| invalid(s))?;
        let suffix = chars.as_str().to_lowercase();
        let offset = match suffix.as_str() {
            "" => 0,
            "#" | "♯" | "is" => 1,
            "b" | "♭" | "es" => -1,
            "s" if matches!(letter, 'a' | 'A' | 'e' | 'E') => -1,
            _ => return Err(invalid(s)),
        };
        let spelling = normalized_spelling(letter, &suffix);
        Ok((Self::from(key).transposed(offset), spelling))
    }
}

/// Pitch class of a note letter, supporting the German H.
pub(crate) fn letter_value(c: char) -> Option<u8> {
    match c {
        'c' | 'C' => Some(0),
        'd' | 'D' => Some(2),
        'e' | 'E' => Some(4),
        'f' | 'F' => Some(5),
        'g' | 'G' => Some(7),
        'a' | 'A' => Some(9),
        'b' | 'B' | 'h' | 'H' => Some(11),
        _ => None,
    }
}

/// Uppercase letter followed by the lowercase accidental suffix: "cIS" -> "Cis", "f#" -> "F#"
pub(crate) fn normalized_spelling(letter: char, suffix: &str) -> String {
    let mut spelling = letter.to_uppercase().collect::<String>();
    spelling.push_str(&suffix.to_lowercase());
    spelling
}

impl TryFrom<&str> for Note {
    type Error = Error;

    /// Try converting the given string to a Note value
    fn try_from(s: &str) -> Result<Self> {
        Self::parse_spelled(s).map(|(note, _)| note)
    }
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl From<u8> for Note {
    fn from(n: u8) -> Note {
        NOTES[(n % 12) as usize]
    }
}

impl From<Note> for u8 {
    fn from(note: Note) -> u8 {
        note as u8
    }
}

impl Add<u8> for Note {
    type Output = Self;
    fn add(self, rhs: u8) -> Self {
        self.transposed(rhs as i32)
    }
}

impl Sub<u8> for Note {
    type Output = Self;
    fn sub(self, rhs: u8) -> Self {
        self.transposed(-(rhs as i32))
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// --------------------------------------------------------------------------------------------------

//! Chord names in English ("C#m7") or German ("cis7") notation, and named chord diagrams.

use std::fmt::Display;

use super::ChordScheme;
use crate::{note::letter_value, Chord, ChordType, Error, Note, Result};

// -------------------------------------------------------------------------------------------------

/// Suffixes a chord name may carry after its root and minor marker.
const CHORD_SUFFIXES: [&str; 11] = [
    "+", "0", "6", "6/9", "7", "7b5", "7sus4", "9", "sus2", "sus4", "add9",
];

// -------------------------------------------------------------------------------------------------

/// A parsed chord name.
///
/// Two naming conventions are supported:
/// - English: `[A-G]#?m?$suffix`, e.g. "D", "D#m", "A7sus4".
/// - German: upper case roots are major, lower case roots minor. Sharps are written as "is",
///   flats as "s" on A and E, and H is used for B. E.g. "d7", "dis7", "as6/9", "H".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordName {
    root: Note,
    minor: bool,
    suffix: String,
}

impl ChordName {
    /// Parse a chord name in English or German notation.
    pub fn parse(name: &str) -> Result<Self> {
        Self::parse_english(name)
            .or_else(|| Self::parse_german(name))
            .ok_or_else(|| Error::InvalidChordName(name.to_string()))
    }

    fn parse_english(name: &str) -> Option<Self> {
        let letter = name.chars().next().filter(|c| ('A'..='G').contains(c))?;
        let mut rest = &name[1..];
        let mut root = Note::from(letter_value(letter)?);
        if let Some(stripped) = rest.strip_prefix('#') {
            root = root.transposed(1);
            rest = stripped;
        }
        let minor = rest.starts_with('m');
        if minor {
            rest = &rest[1..];
        }
        Self::with_suffix(root, minor, rest)
    }

    fn parse_german(name: &str) -> Option<Self> {
        let letter = name.chars().next()?;
        let mut rest = &name[letter.len_utf8()..];
        let mut root = Note::from(letter_value(letter)?);
        if matches!(letter, 'A' | 'a' | 'E' | 'e') {
            if let Some(stripped) = rest.strip_prefix('s') {
                root = root.transposed(-1);
                rest = stripped;
            }
        } else if matches!(letter, 'B' | 'b') {
            // no German 'B' chords: a German B is an English Bb
            return None;
        } else if let Some(stripped) = rest.strip_prefix("is") {
            root = root.transposed(1);
            rest = stripped;
        }
        Self::with_suffix(root, letter.is_lowercase(), rest)
    }

    fn with_suffix(root: Note, minor: bool, suffix: &str) -> Option<Self> {
        if suffix.is_empty() || CHORD_SUFFIXES.contains(&suffix) {
            Some(Self {
                root,
                minor,
                suffix: suffix.to_string(),
            })
        } else {
            None
        }
    }

    /// Root note.
    pub fn root(&self) -> Note {
        self.root
    }

    /// true for minor chords.
    pub fn is_minor(&self) -> bool {
        self.minor
    }

    /// Chord suffix, e.g. "7" or "sus4". Empty for plain major or minor chords.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The registered chord for this name, if its suffix maps to a known chord type.
    pub fn chord(&self) -> Option<Chord> {
        let chord_type = match (self.minor, self.suffix.as_str()) {
            (false, "") => "major",
            (true, "") => "minor",
            (false, "+") => "augmented",
            (_, "0") => "diminished",
            (false, "7") => "dominant 7th",
            (true, "7") => "minor 7th",
            (true, "7b5") => "half diminished 7th",
            _ => return None,
        };
        ChordType::find(chord_type).map(|chord_type| Chord::new(self.root, chord_type.clone()))
    }

    /// A string which can be used as (the core of) a file name: "D_sharp_minor_7".
    pub fn file_stem(&self) -> String {
        let mut stem = self.root.name().replace('#', "_sharp");
        stem.push_str(if self.minor { "_minor" } else { "_major" });
        if !self.suffix.is_empty() {
            stem.push('_');
            stem.push_str(&self.suffix);
        }
        stem.replace('/', "by").replace('+', "plus")
    }
}

impl TryFrom<&str> for ChordName {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::parse(name)
    }
}

// -------------------------------------------------------------------------------------------------

/// A named chord fingering of an instrument.
///
/// An instrument can have multiple diagrams with the same name, as long as their schemes differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordDiagram {
    name: String,
    scheme: ChordScheme,
    prefix: String,
    suffix: String,
}

impl ChordDiagram {
    pub fn new<S: Into<String>>(name: S, scheme: ChordScheme) -> Self {
        Self {
            name: name.into(),
            scheme,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Set a prefix for exported file names, e.g. the instrument name.
    #[must_use]
    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set a suffix for exported file names, e.g. to tell apart alternative fingerings.
    #[must_use]
    pub fn with_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheme(&self) -> &ChordScheme {
        &self.scheme
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Parsed chord name.
    pub fn chord_name(&self) -> Result<ChordName> {
        ChordName::parse(&self.name)
    }

    /// File name stem for exported diagram images: `$prefix$name_stem$suffix`.
    pub fn file_stem(&self) -> Result<String> {
        Ok(format!(
            "{}{}{}",
            self.prefix,
            self.chord_name()?.file_stem(),
            self.suffix
        ))
    }
}

impl Display for ChordDiagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.scheme)
    }
}

// --------------------------------------------------------------------------------------------------

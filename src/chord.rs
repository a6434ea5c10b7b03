//! Chord types as named interval steps, and chords as root [`Note`] plus chord type.

use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::{Error, Note, Result};

// --------------------------------------------------------------------------------------------------

/// A named, immutable chord interval pattern.
///
/// Steps are semitone distances which get applied cumulatively, starting from the root note:
/// a major chord is `[4, 3]`, so C major is C, C + 4 = E, E + 3 = G.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordType {
    name: String,
    steps: Vec<u8>,
    annotations: Vec<String>,
}

// all known chord types, sorted by name
lazy_static! {
    static ref CHORD_TYPES: Vec<ChordType> = {
        let mut types = vec![
            ChordType::with_annotations("major", &[4, 3], &[""]),
            ChordType::with_annotations("minor", &[3, 4], &["m"]),
            ChordType::with_annotations("diminished", &[3, 3], &["dim", "°"]),
            ChordType::with_annotations("augmented", &[4, 4], &["aug", "+"]),
            ChordType::with_annotations("power", &[7], &["5"]),
            ChordType::with_annotations("major 7th", &[4, 3, 4], &["maj7", "Δ7"]),
            ChordType::with_annotations("dominant 7th", &[4, 3, 3], &["7"]),
            ChordType::with_annotations("minor major 7th", &[3, 4, 4], &["mM7"]),
            ChordType::with_annotations("minor 7th", &[3, 4, 3], &["m7"]),
            ChordType::with_annotations("half diminished 7th", &[3, 3, 4], &["m7b5", "ø"]),
            ChordType::with_annotations("diminished 7th", &[3, 3, 3], &["dim7", "°7"]),
        ];
        types.sort_by(|a, b| a.name.cmp(&b.name));
        types
    };
}

impl ChordType {
    /// Create a new, custom chord type from a name and interval steps.
    pub fn new<S: Into<String>, I: Into<Vec<u8>>>(name: S, steps: I) -> Self {
        Self {
            name: name.into(),
            steps: steps.into(),
            annotations: vec![],
        }
    }

    fn with_annotations(name: &str, steps: &[u8], annotations: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            steps: steps.to_vec(),
            annotations: annotations.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// All registered chord types, sorted by name.
    pub fn all() -> &'static [ChordType] {
        &CHORD_TYPES
    }

    /// All registered chord type names, sorted.
    pub fn names() -> Vec<&'static str> {
        CHORD_TYPES.iter().map(|t| t.name()).collect()
    }

    /// Find a registered chord type by its exact display name.
    pub fn find(name: &str) -> Option<&'static ChordType> {
        CHORD_TYPES.iter().find(|t| t.name == name)
    }

    /// Display name, e.g. "minor 7th".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semitone steps between the chord's notes.
    pub fn steps(&self) -> &[u8] {
        &self.steps
    }

    /// Short display annotations, e.g. "m7". The first one is the preferred one.
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    /// Preferred short chord symbol suffix: "m" for minor, "" for major.
    pub fn symbol(&self) -> &str {
        self.annotations.first().map(String::as_str).unwrap_or("")
    }

    /// Notes of this chord type, built on the given root. The first note always is the root.
    pub fn notes(&self, root: Note) -> Vec<Note> {
        let mut notes = Vec::with_capacity(self.steps.len() + 1);
        let mut note = root;
        notes.push(note);
        for step in &self.steps {
            note = note.transposed(*step as i32);
            notes.push(note);
        }
        notes
    }
}

impl Display for ChordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// --------------------------------------------------------------------------------------------------

/// Note vector, created from a root [`Note`] and a [`ChordType`].
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    root: Note,
    chord_type: ChordType,
}

impl Chord {
    /// Create a new chord from the given root note and chord type.
    pub fn new<N: Into<Note>>(root: N, chord_type: ChordType) -> Self {
        Self {
            root: root.into(),
            chord_type,
        }
    }

    /// Find the registered chord whose note set equals the given notes.
    ///
    /// Order and duplicates of the given notes don't matter. Chord types are tried in
    /// registry order, roots in chromatic order, so results are deterministic.
    pub fn identify(notes: &[Note]) -> Option<Self> {
        let wanted = notes.iter().copied().collect::<HashSet<_>>();
        if wanted.is_empty() {
            return None;
        }
        ChordType::all().iter().find_map(|chord_type| {
            Note::all()
                .iter()
                .find(|root| {
                    chord_type
                        .notes(**root)
                        .into_iter()
                        .collect::<HashSet<_>>()
                        == wanted
                })
                .map(|root| Self::new(*root, chord_type.clone()))
        })
    }

    /// Root note.
    pub fn root(&self) -> Note {
        self.root
    }

    /// The chord's type.
    pub fn chord_type(&self) -> &ChordType {
        &self.chord_type
    }

    /// Chord notes, root first.
    pub fn notes(&self) -> Vec<Note> {
        self.chord_type.notes(self.root)
    }

    /// Short chord symbol, e.g. "Em7".
    pub fn symbol(&self) -> String {
        format!("{}{}", self.root, self.chord_type.symbol())
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.root, self.chord_type)
    }
}

fn unknown_chord_type(name: &str) -> Error {
    Error::UnknownChordType {
        name: name.to_string(),
        valid: ChordType::names().join(", "),
    }
}

impl<N> TryFrom<(N, &str)> for Chord
where
    N: Into<Note>,
{
    type Error = Error;

    /// Try creating a chord from a root note and chord type name.
    fn try_from((root, chord_type): (N, &str)) -> Result<Self> {
        let chord_type =
            ChordType::find(chord_type).ok_or_else(|| unknown_chord_type(chord_type))?;
        Ok(Self::new(root, chord_type.clone()))
    }
}

impl TryFrom<&str> for Chord {
    type Error = Error;

    /// Try converting a chord symbol in the form `$root$annotation` to a chord,
    /// e.g. "C", "F#m7", "Ebdim" or "Cis7".
    fn try_from(s: &str) -> Result<Self> {
        let s = s.trim();
        let split_points = s
            .char_indices()
            .map(|(index, _)| index)
            .skip(1)
            .chain([s.len()])
            .take(3)
            .collect::<Vec<_>>();
        // prefer longest root spellings: "Eb" over "E" + "b"
        for split in split_points.into_iter().rev() {
            let (root, annotation) = s.split_at(split);
            if let Ok(root) = Note::try_from(root) {
                if let Some(chord_type) = CHORD_TYPES
                    .iter()
                    .find(|t| t.annotations.iter().any(|a| a == annotation))
                {
                    return Ok(Self::new(root, chord_type.clone()));
                }
            }
        }
        Err(unknown_chord_type(s))
    }
}

// --------------------------------------------------------------------------------------------------

/// Notes of the given chord type, built on the given root, as canonical note names.
pub fn chord_notes(root: &str, chord_type: &str) -> Result<Vec<String>> {
    let chord = Chord::try_from((Note::try_from(root)?, chord_type))?;
    Ok(chord.notes().into_iter().map(|n| n.to_string()).collect())
}

// --------------------------------------------------------------------------------------------------

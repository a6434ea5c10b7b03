//! Stringed instruments: open string tunings, frets and the notes on the fretboard, plus a
//! library of chord diagrams for the instrument.

use std::{fmt::Display, ops::RangeInclusive};

use crate::{ChordDiagram, ChordScheme, Diagnostic, Error, Note, Result, SpelledNote};

// -------------------------------------------------------------------------------------------------

mod presets;
mod tuning;

// -------------------------------------------------------------------------------------------------

pub use tuning::Tuning;

// -------------------------------------------------------------------------------------------------

/// A position on the fretboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FretPosition {
    /// String index, 0 is the thinnest string.
    pub string: usize,
    /// Fret number, 0 is the nut.
    pub fret: usize,
}

impl FretPosition {
    pub fn new(string: usize, fret: usize) -> Self {
        Self { string, fret }
    }
}

impl From<(usize, usize)> for FretPosition {
    fn from((string, fret): (usize, usize)) -> Self {
        Self::new(string, fret)
    }
}

impl From<FretPosition> for (usize, usize) {
    fn from(position: FretPosition) -> Self {
        (position.string, position.fret)
    }
}

// -------------------------------------------------------------------------------------------------

/// A stringed instrument.
///
/// Strings are ordered from the bottom of a fretboard diagram to the top: index 0 is the
/// thinnest string. Each string starts at its root fret, which is 0 for all strings except
/// e.g. the short drone string of a five-string banjo.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    name: String,
    strings: Vec<SpelledNote>,
    fret_count: usize,
    root_frets: Vec<usize>,
    dots_on_frets: Vec<usize>,
    // the primary tuning is the first one
    tunings: Vec<Tuning>,
    chords: Vec<ChordDiagram>,
}

impl Instrument {
    /// Create a new instrument with the given open strings, starting with the thinnest one.
    /// All strings start at the nut.
    pub fn new<S: Into<String>>(
        name: S,
        strings: Vec<SpelledNote>,
        fret_count: usize,
    ) -> Result<Self> {
        let name = name.into();
        if strings.is_empty() {
            return Err(Error::InvalidInstrument {
                name,
                reason: "an instrument needs at least one string".to_string(),
            });
        }
        Ok(Self {
            name,
            root_frets: vec![0; strings.len()],
            tunings: vec![Tuning::new(None, strings.clone())],
            strings,
            fret_count,
            dots_on_frets: vec![],
            chords: vec![],
        })
    }

    /// Set the frets on which the strings start. Needs one entry per string, and none of the
    /// root frets may lie beyond the last fret.
    pub fn with_root_frets(mut self, root_frets: Vec<usize>) -> Result<Self> {
        if root_frets.len() != self.strings.len() {
            return Err(self.invalid(format!(
                "got {} root frets for {} strings",
                root_frets.len(),
                self.strings.len()
            )));
        }
        if let Some(fret) = root_frets.iter().find(|fret| **fret > self.fret_count) {
            return Err(self.invalid(format!(
                "root fret {} lies beyond the last fret {}",
                fret, self.fret_count
            )));
        }
        self.root_frets = root_frets;
        Ok(self)
    }

    /// Set the frets which carry a position dot.
    #[must_use]
    pub fn with_dots(mut self, dots_on_frets: Vec<usize>) -> Self {
        self.dots_on_frets = dots_on_frets;
        self
    }

    fn invalid(&self, reason: String) -> Error {
        Error::InvalidInstrument {
            name: self.name.clone(),
            reason,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currently used open string notes, thinnest string first.
    pub fn strings(&self) -> &[SpelledNote] {
        &self.strings
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    pub fn fret_count(&self) -> usize {
        self.fret_count
    }

    pub fn root_frets(&self) -> &[usize] {
        &self.root_frets
    }

    pub fn dots_on_frets(&self) -> &[usize] {
        &self.dots_on_frets
    }

    /// The note at the given position. None for unknown strings or frets below the string's
    /// root fret. Frets beyond the last one are not checked.
    pub fn note_at(&self, string: usize, fret: usize) -> Option<Note> {
        let open = self.strings.get(string)?;
        let root_fret = self.root_frets[string];
        if fret < root_fret {
            return None;
        }
        Some(open.note().transposed((fret - root_fret) as i32))
    }

    /// All notes of a string, from the nut to the last fret.
    pub fn string_notes(&self, string: usize) -> Vec<Option<Note>> {
        if string >= self.strings.len() {
            return vec![];
        }
        (0..=self.fret_count)
            .map(|fret| self.note_at(string, fret))
            .collect()
    }

    /// All positions on the fretboard which play one of the given notes, ordered by string and fret.
    pub fn positions_of(&self, notes: &[Note]) -> Vec<FretPosition> {
        let mut positions = Vec::new();
        for (string, root_fret) in self.root_frets.iter().enumerate() {
            for fret in *root_fret..=self.fret_count {
                if self
                    .note_at(string, fret)
                    .is_some_and(|note| notes.contains(&note))
                {
                    positions.push(FretPosition::new(string, fret));
                }
            }
        }
        positions
    }

    /// true when the given fretboard cell holds an editable open string note.
    pub fn is_open_string(&self, position: FretPosition) -> bool {
        self.root_frets.get(position.string) == Some(&position.fret)
    }

    /// Change the open note of a single string, e.g. when the user edits a fretboard table.
    pub fn set_open_string(&mut self, string: usize, note: SpelledNote) -> Result<()> {
        let count = self.strings.len();
        let open = self.strings.get_mut(string).ok_or_else(|| Error::InvalidInstrument {
            name: self.name.clone(),
            reason: format!("no string #{} in {} strings", string, count),
        })?;
        log::debug!("{}: string #{} tuned to {}", self.name, string, note);
        *open = note;
        Ok(())
    }

    // ---------------------------------------------------------------------------------------------

    /// All known tunings. The first one is the instrument's primary tuning.
    pub fn tunings(&self) -> &[Tuning] {
        &self.tunings
    }

    /// Register an alternate tuning and return its index. Tunings which don't have one note per
    /// string are rejected.
    pub fn add_tuning(
        &mut self,
        name: Option<&str>,
        strings: Vec<SpelledNote>,
    ) -> std::result::Result<usize, Diagnostic> {
        if strings.len() != self.strings.len() {
            let tuning = Tuning::new(name, strings);
            return Err(Diagnostic::StringCountMismatch {
                instrument: self.name.clone(),
                subject: format!("tuning '{}'", tuning),
                found: tuning.strings().len(),
                expected: self.strings.len(),
            }
            .logged());
        }
        Ok(self.push_tuning(Tuning::new(name, strings)))
    }

    /// Append a tuning whose string count got checked already.
    pub(crate) fn push_tuning(&mut self, tuning: Tuning) -> usize {
        self.tunings.push(tuning);
        self.tunings.len() - 1
    }

    /// Index of the registered tuning which uses the given notes, if any. Only pitch classes are
    /// compared, so "EHGDAE" and "E B G D A E" are the same tuning.
    pub fn is_tuning_known(&self, notes: &[Note]) -> Option<usize> {
        self.tunings.iter().position(|tuning| tuning.matches(notes))
    }

    /// Use the registered tuning with the given index for all strings.
    pub fn apply_tuning(&mut self, index: usize) -> Result<()> {
        let tuning = self.tunings.get(index).ok_or_else(|| Error::InvalidInstrument {
            name: self.name.clone(),
            reason: format!("no tuning #{}", index),
        })?;
        log::debug!("{}: applying tuning {}", self.name, tuning);
        self.strings = tuning.strings().to_vec();
        Ok(())
    }

    // ---------------------------------------------------------------------------------------------

    /// Registered chord diagrams.
    pub fn chords(&self) -> &[ChordDiagram] {
        &self.chords
    }

    /// Add a chord diagram. Returns false when the very same diagram already got defined.
    pub fn define_chord(&mut self, chord: ChordDiagram) -> bool {
        if self.chords.contains(&chord) {
            return false;
        }
        self.chords.push(chord);
        true
    }

    /// Valid scheme lengths: schemes may omit strings which don't start at the nut.
    pub fn scheme_lengths(&self) -> RangeInclusive<usize> {
        let nut_strings = self.root_frets.iter().filter(|fret| **fret == 0).count();
        nut_strings..=self.strings.len()
    }

    /// Check all chord diagrams for string count mismatches.
    pub fn check_chords(&self) -> Vec<Diagnostic> {
        let lengths = self.scheme_lengths();
        self.chords
            .iter()
            .filter(|chord| !lengths.contains(&chord.scheme().len()))
            .map(|chord| {
                Diagnostic::StringCountMismatch {
                    instrument: self.name.clone(),
                    subject: chord.name().to_string(),
                    found: chord.scheme().len(),
                    expected: self.strings.len(),
                }
                .logged()
            })
            .collect()
    }

    /// Notes a chord scheme plays, in scheme order. None for muted strings and for entries which
    /// don't map to a string.
    pub fn scheme_notes(&self, scheme: &ChordScheme) -> Vec<Option<Note>> {
        scheme
            .iter()
            .enumerate()
            .map(|(entry, fingering)| {
                let string = scheme.string_index(entry);
                fingering.fret().and_then(|fret| self.note_at(string, fret))
            })
            .collect()
    }
}

impl Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} strings, {} frets)", self.name, self.strings.len(), self.fret_count)
    }
}

// --------------------------------------------------------------------------------------------------

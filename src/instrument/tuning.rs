use std::fmt::Display;

use crate::{format_note_list, Note, SpelledNote};

// -------------------------------------------------------------------------------------------------

/// Open string notes of an instrument, optionally named like "Drop D".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    name: Option<String>,
    strings: Vec<SpelledNote>,
}

impl Tuning {
    pub fn new(name: Option<&str>, strings: Vec<SpelledNote>) -> Self {
        Self {
            name: name.map(str::to_string),
            strings,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Open string notes, as spelled by the user.
    pub fn strings(&self) -> &[SpelledNote] {
        &self.strings
    }

    /// Open string pitch classes.
    pub fn notes(&self) -> Vec<Note> {
        self.strings.iter().map(SpelledNote::note).collect()
    }

    /// Name to show in tuning selectors: the name, or the note list for unnamed tunings.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format_note_list(&self.strings),
        }
    }

    /// true when the tuning uses the given pitch classes on all strings, ignoring spellings.
    pub fn matches(&self, notes: &[Note]) -> bool {
        self.strings.len() == notes.len()
            && self
                .strings
                .iter()
                .zip(notes)
                .all(|(string, note)| string.note() == *note)
    }
}

impl Display for Tuning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

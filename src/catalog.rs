//! Serialized instrument records and the JSON instrument catalog.
//!
//! The catalog is a JSON object with a single `instrument` list:
//!
//! ```json
//! { "instrument": [
//!   { "name": "Guitar", "strings": "EHGDAE", "nfrets": 20, "dotsOnFrets": [3, 5, 7, 9, 12],
//!     "tuning": [{ "name": "Drop D", "strings": ["E", "H", "G", "D", "A", "D"] }] }
//! ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    instrument::Tuning, parse_note_list, Diagnostic, Error, Instrument, Result, SpelledNote,
};

// -------------------------------------------------------------------------------------------------

/// Open string notes of a record: either a note list text ("EHGDAE") or a list of notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringsRecord {
    Text(String),
    List(Vec<String>),
}

impl StringsRecord {
    /// Parse the notes. Invalid notes get dropped.
    ///
    /// List entries are single notes, so "Eb" is E flat here, while the note list text "Eb" is
    /// an E and a B.
    pub fn notes(&self) -> Vec<SpelledNote> {
        match self {
            StringsRecord::Text(text) => parse_note_list(text),
            StringsRecord::List(list) => list
                .iter()
                .flat_map(|s| match SpelledNote::try_from(s.as_str()) {
                    Ok(note) => vec![note],
                    Err(_) => parse_note_list(s),
                })
                .collect(),
        }
    }
}

impl From<&[SpelledNote]> for StringsRecord {
    fn from(notes: &[SpelledNote]) -> Self {
        StringsRecord::List(notes.iter().map(|n| n.spelling().to_string()).collect())
    }
}

/// An alternate tuning of an instrument record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub strings: StringsRecord,
}

/// Serialized form of an [`Instrument`], without its chord diagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentRecord {
    pub name: String,
    pub strings: StringsRecord,
    #[serde(rename = "nfrets")]
    pub fret_count: usize,
    #[serde(rename = "dotsOnFrets", default, skip_serializing_if = "Vec::is_empty")]
    pub dots_on_frets: Vec<usize>,
    #[serde(rename = "rootfrets", default, skip_serializing_if = "Option::is_none")]
    pub root_frets: Option<Vec<usize>>,
    #[serde(rename = "tuning", default, skip_serializing_if = "Vec::is_empty")]
    pub tunings: Vec<TuningRecord>,
}

// -------------------------------------------------------------------------------------------------

impl Instrument {
    /// Build an instrument from a record.
    ///
    /// Alternate tunings which don't match the instrument's string count get dropped and are
    /// reported as diagnostics. Missing root frets default to 0 for all strings.
    pub fn from_record(record: &InstrumentRecord) -> Result<(Self, Vec<Diagnostic>)> {
        let strings = record.strings.notes();
        let mut instrument = Instrument::new(&record.name, strings, record.fret_count)?
            .with_dots(record.dots_on_frets.clone());
        if let Some(root_frets) = &record.root_frets {
            instrument = instrument.with_root_frets(root_frets.clone())?;
        }
        let mut diagnostics = Vec::new();
        for tuning in &record.tunings {
            let tuning = Tuning::new(tuning.name.as_deref(), tuning.strings.notes());
            if tuning.strings().len() != instrument.string_count() {
                diagnostics.push(
                    Diagnostic::TuningRecordDropped {
                        instrument: record.name.clone(),
                        tuning: tuning.display_name(),
                        found: tuning.strings().len(),
                        expected: instrument.string_count(),
                    }
                    .logged(),
                );
            } else {
                instrument.push_tuning(tuning);
            }
        }
        Ok((instrument, diagnostics))
    }

    /// Create a record from the instrument's current open strings, frets and tunings.
    ///
    /// When the current strings differ from the primary tuning, the primary tuning is written
    /// as the first alternate tuning, so reloading the record keeps all known tunings.
    pub fn to_record(&self) -> InstrumentRecord {
        let mut tunings = self.tunings().iter().peekable();
        if tunings
            .peek()
            .is_some_and(|primary| primary.strings() == self.strings())
        {
            tunings.next();
        }
        InstrumentRecord {
            name: self.name().to_string(),
            strings: self.strings().into(),
            fret_count: self.fret_count(),
            dots_on_frets: self.dots_on_frets().to_vec(),
            root_frets: self
                .root_frets()
                .iter()
                .any(|fret| *fret != 0)
                .then(|| self.root_frets().to_vec()),
            tunings: tunings
                .map(|tuning| TuningRecord {
                    name: tuning.name().map(str::to_string),
                    strings: tuning.strings().into(),
                })
                .collect(),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// A list of instrument records, as stored in an instrument catalog JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    instrument: Vec<InstrumentRecord>,
}

impl Catalog {
    /// A catalog with all built-in instruments.
    pub fn presets() -> Self {
        Self {
            instrument: Instrument::presets()
                .iter()
                .map(Instrument::to_record)
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn records(&self) -> &[InstrumentRecord] {
        &self.instrument
    }

    /// Names of all instruments, in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.instrument.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn record(&self, index: usize) -> Option<&InstrumentRecord> {
        self.instrument.get(index)
    }

    /// Build the instrument at the given index.
    pub fn instrument(&self, index: usize) -> Result<(Instrument, Vec<Diagnostic>)> {
        let record = self.record(index).ok_or_else(|| Error::InvalidInstrument {
            name: format!("#{}", index),
            reason: format!("the catalog has {} instruments", self.instrument.len()),
        })?;
        Instrument::from_record(record)
    }

    /// Add a record, e.g. of a newly defined instrument.
    pub fn push(&mut self, record: InstrumentRecord) {
        self.instrument.push(record);
    }
}

// --------------------------------------------------------------------------------------------------

//! Free-form note lists, as typed by users: "EADGBE", "E, A, D" or "Cis Fis H".

use std::fmt::Display;

use super::{letter_value, Note};
use crate::{Error, Result};

// -------------------------------------------------------------------------------------------------

/// A [`Note`] together with the spelling it was entered with, e.g. `H` or `Cis`.
///
/// Instrument tunings keep the user's spelling for display, while all note arithmetic happens
/// on the pitch class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpelledNote {
    note: Note,
    spelling: String,
}

impl SpelledNote {
    pub fn new<S: Into<String>>(note: Note, spelling: S) -> Self {
        Self {
            note,
            spelling: spelling.into(),
        }
    }

    /// The pitch class.
    pub fn note(&self) -> Note {
        self.note
    }

    /// The spelling as entered, with normalized case.
    pub fn spelling(&self) -> &str {
        &self.spelling
    }
}

impl From<Note> for SpelledNote {
    fn from(note: Note) -> Self {
        Self::new(note, note.name())
    }
}

impl TryFrom<&str> for SpelledNote {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        let (note, spelling) = Note::parse_spelled(s)?;
        Ok(Self { note, spelling })
    }
}

impl Display for SpelledNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling)
    }
}

// -------------------------------------------------------------------------------------------------

/// Validation state of a partially typed note list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoteListState {
    /// Empty, or a complete list of notes.
    Acceptable,
    /// Valid so far, but not yet ending on a note, e.g. "E, A, ".
    Intermediate,
    /// Contains something which never can become a note list.
    Invalid,
}

// -------------------------------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Note(SpelledNote),
    Separator(&'a str),
    Junk(&'a str),
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Length in bytes of the accidental following a note letter. In lists, a lowercase 'b' always
/// is the note B, so plain `b` flats are not detected here.
fn accidental_len(letter: char, after: &str) -> usize {
    let next = after.chars().take(2).collect::<String>().to_lowercase();
    match next.chars().next() {
        Some('#') => 1,
        Some(c @ ('♯' | '♭')) => c.len_utf8(),
        Some(_) if next == "is" || next == "es" => 2,
        Some('s') if matches!(letter, 'a' | 'A' | 'e' | 'E') => 1,
        _ => 0,
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let len = if letter_value(c).is_some() {
            let len = c.len_utf8() + accidental_len(c, &rest[c.len_utf8()..]);
            match Note::parse_spelled(&rest[..len]) {
                Ok((note, spelling)) => tokens.push(Token::Note(SpelledNote { note, spelling })),
                Err(_) => tokens.push(Token::Junk(&rest[..len])),
            }
            len
        } else if is_separator(c) {
            let len = rest.find(|c: char| !is_separator(c)).unwrap_or(rest.len());
            tokens.push(Token::Separator(&rest[..len]));
            len
        } else {
            let len = rest
                .find(|c: char| letter_value(c).is_some() || is_separator(c))
                .unwrap_or(rest.len());
            tokens.push(Token::Junk(&rest[..len]));
            len
        };
        rest = &rest[len..];
    }
    tokens
}

// -------------------------------------------------------------------------------------------------

/// Split a free-form string into notes, in the order they appear.
///
/// Note letters with an optional accidental act as natural delimiters, so commas are optional:
/// `"EADGBE"` and `"E, A, D, G, B, E"` both result in the same six notes. Fragments which are
/// no notes are silently dropped. Returns an empty list when nothing recognizable was found.
pub fn parse_note_list(text: &str) -> Vec<SpelledNote> {
    tokenize(text)
        .into_iter()
        .filter_map(|token| match token {
            Token::Note(note) => Some(note),
            _ => None,
        })
        .collect()
}

/// Check if the given, possibly partially typed, text is a valid note list.
pub fn validate_note_list(text: &str) -> NoteListState {
    let tokens = tokenize(text.trim());
    let mut state = NoteListState::Acceptable;
    for (index, token) in tokens.iter().enumerate() {
        let is_last = index + 1 == tokens.len();
        state = match token {
            Token::Note(_) => NoteListState::Acceptable,
            Token::Separator(separator) => {
                if separator.matches(',').count() > 1 {
                    return NoteListState::Invalid;
                }
                NoteListState::Intermediate
            }
            // a German sharp suffix, which is still being typed
            Token::Junk(junk)
                if is_last
                    && junk.eq_ignore_ascii_case("i")
                    && matches!(tokens.get(index.wrapping_sub(1)), Some(Token::Note(_))) =>
            {
                NoteListState::Intermediate
            }
            Token::Junk(_) => return NoteListState::Invalid,
        };
    }
    state
}

/// Format notes as a comma separated list: "E, G#, B".
pub fn format_note_list<N: Display>(notes: &[N]) -> String {
    notes
        .iter()
        .map(|note| note.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        Note::parse_list(text)
            .into_iter()
            .map(|note| note.to_string())
            .collect()
    }

    #[test]
    fn note_lists() {
        assert_eq!(names("EG#B"), vec!["E", "G#", "B"]);
        assert_eq!(names("B, D# F#"), vec!["B", "D#", "F#"]);
        assert_eq!(names("EADGBE"), names("E, A, D, G, B, E"));
        assert_eq!(names("eadgbe"), vec!["E", "A", "D", "G", "B", "E"]);
        assert_eq!(names("EHGDAE"), vec!["E", "B", "G", "D", "A", "E"]);
        assert_eq!(names("Cis Fis, As Es"), vec!["C#", "F#", "G#", "D#"]);
        assert_eq!(names("C♯ D♭"), vec!["C#", "C#"]);
        assert_eq!(names("E, x, A? 7 D"), vec!["E", "A", "D"]);
        assert!(names("").is_empty());
        assert!(names("123 ,;-").is_empty());
    }

    #[test]
    fn note_list_spelling() {
        let notes = parse_note_list("ehgdae");
        assert_eq!(notes.len(), 6);
        assert_eq!(notes[1].spelling(), "H");
        assert_eq!(notes[1].note(), Note::B);
        assert_eq!(format_note_list(&notes), "E, H, G, D, A, E");
    }

    #[test]
    fn note_list_validation() {
        assert_eq!(validate_note_list(""), NoteListState::Acceptable);
        assert_eq!(validate_note_list("   "), NoteListState::Acceptable);
        assert_eq!(validate_note_list("E, A, D"), NoteListState::Acceptable);
        assert_eq!(validate_note_list("EADGBE"), NoteListState::Acceptable);
        assert_eq!(validate_note_list("E A"), NoteListState::Acceptable);
        assert_eq!(validate_note_list("E, A,"), NoteListState::Intermediate);
        assert_eq!(validate_note_list("E, C i"), NoteListState::Invalid);
        assert_eq!(validate_note_list("E, Ci"), NoteListState::Intermediate);
        assert_eq!(validate_note_list("E,, A"), NoteListState::Invalid);
        assert_eq!(validate_note_list("E, X"), NoteListState::Invalid);
        assert_eq!(validate_note_list("E7"), NoteListState::Invalid);
    }

    #[test]
    fn format_lists() {
        assert_eq!(format_note_list(&[Note::E, Note::Gs, Note::B]), "E, G#, B");
        assert_eq!(format_note_list::<Note>(&[]), "");
    }
}

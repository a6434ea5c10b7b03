//! Per-string chord fingerings.

use std::{fmt::Display, str::FromStr};

use derive_more::{Deref, From, Into};

use crate::{Error, Result};

// -------------------------------------------------------------------------------------------------

/// How a single string is played in a chord.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StringFingering {
    /// The string is not played.
    Muted,
    /// The string is played without pressing a fret.
    Open,
    /// The string is pressed on the given fret, optionally with a known finger (1 = index).
    Fretted { fret: usize, finger: Option<u8> },
}

impl StringFingering {
    /// Fretted fingering with a finger number. Finger 0 means unknown, fret 0 is an open string.
    pub fn fretted(fret: usize, finger: u8) -> Self {
        if fret == 0 {
            Self::Open
        } else {
            Self::Fretted {
                fret,
                finger: (finger != 0).then_some(finger),
            }
        }
    }

    /// The played fret: 0 for open strings, None for muted ones.
    pub fn fret(&self) -> Option<usize> {
        match self {
            Self::Muted => None,
            Self::Open => Some(0),
            Self::Fretted { fret, .. } => Some(*fret),
        }
    }

    /// Finger number, if known.
    pub fn finger(&self) -> Option<u8> {
        match self {
            Self::Fretted { finger, .. } => *finger,
            _ => None,
        }
    }
}

impl Display for StringFingering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Muted => write!(f, "x"),
            Self::Open => write!(f, "0"),
            Self::Fretted { fret, finger: None } => write!(f, "{}", fret),
            Self::Fretted {
                fret,
                finger: Some(finger),
            } => write!(f, "{}:{}", fret, finger),
        }
    }
}

impl FromStr for StringFingering {
    type Err = Error;

    /// Parse "x" (muted), "0" (open), "3" (fret 3) or "3:2" (fret 3, 2nd finger).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidScheme(s.to_string());
        let s = s.trim();
        if s.eq_ignore_ascii_case("x") || s == "-" {
            return Ok(Self::Muted);
        }
        let mut splits = s.split(':');
        let fret = splits
            .next()
            .and_then(|fret| fret.parse::<usize>().ok())
            .ok_or_else(invalid)?;
        let finger = match splits.next() {
            Some(finger) => finger.parse::<u8>().map_err(|_| invalid())?,
            None => 0,
        };
        if splits.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::fretted(fret, finger))
    }
}

// -------------------------------------------------------------------------------------------------

/// Fingering of a chord, one entry per string.
///
/// Entries are ordered the way they are drawn in a chord box: from the thickest string on the
/// left to the thinnest one on the right. So the last entry always refers to string index 0 of
/// an [`Instrument`](crate::Instrument). Schemes may omit the thickest strings, e.g. the short
/// drone string of a five-string banjo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, From, Into)]
pub struct ChordScheme(Vec<StringFingering>);

impl ChordScheme {
    pub fn new(fingerings: Vec<StringFingering>) -> Self {
        Self(fingerings)
    }

    /// Create a scheme from separate fret and finger lists. `None` frets are muted strings,
    /// missing or 0 fingers are unknown.
    pub fn from_frets(frets: &[Option<usize>], fingers: &[u8]) -> Self {
        Self(
            frets
                .iter()
                .enumerate()
                .map(|(index, fret)| match fret {
                    Some(fret) => {
                        StringFingering::fretted(*fret, fingers.get(index).copied().unwrap_or(0))
                    }
                    None => StringFingering::Muted,
                })
                .collect(),
        )
    }

    /// Instrument string index of the given scheme entry.
    pub fn string_index(&self, entry: usize) -> usize {
        self.0.len().saturating_sub(entry + 1)
    }

    /// Highest played fret, 0 when only open or muted strings are used.
    pub fn max_fret(&self) -> usize {
        self.0.iter().filter_map(|f| f.fret()).max().unwrap_or(0)
    }

    /// Lowest pressed (nonzero) fret, if any.
    pub fn min_pressed_fret(&self) -> Option<usize> {
        self.0
            .iter()
            .filter_map(|f| f.fret())
            .filter(|fret| *fret > 0)
            .min()
    }
}

impl Display for ChordScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.0.iter().map(|e| e.to_string()).collect::<Vec<_>>();
        write!(f, "{}", entries.join(" "))
    }
}

impl FromStr for ChordScheme {
    type Err = Error;

    /// Parse a scheme from whitespace or comma separated entries, like "x 0 2:1 2:2 2:3 0".
    /// Without any separators, each character is one entry: "x02220".
    fn from_str(s: &str) -> Result<Self> {
        let is_separator = |c: char| c == ',' || c.is_whitespace();
        let s = s.trim();
        if s.contains(is_separator) {
            s.split(is_separator)
                .filter(|entry| !entry.is_empty())
                .map(StringFingering::from_str)
                .collect::<Result<Vec<_>>>()
                .map(Self)
        } else {
            s.chars()
                .map(|c| StringFingering::from_str(c.encode_utf8(&mut [0; 4])))
                .collect::<Result<Vec<_>>>()
                .map(Self)
        }
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fingerings() -> Result<()> {
        assert_eq!(StringFingering::fretted(0, 2), StringFingering::Open);
        assert_eq!(StringFingering::fretted(3, 0).finger(), None);
        assert_eq!(StringFingering::fretted(3, 2).finger(), Some(2));
        assert_eq!(StringFingering::Muted.fret(), None);
        assert_eq!(StringFingering::Open.fret(), Some(0));

        assert_eq!("x".parse::<StringFingering>()?, StringFingering::Muted);
        assert_eq!("0".parse::<StringFingering>()?, StringFingering::Open);
        assert_eq!("3:2".parse::<StringFingering>()?, StringFingering::fretted(3, 2));
        assert!("3:2:1".parse::<StringFingering>().is_err());
        assert!("q".parse::<StringFingering>().is_err());
        assert!("-1".parse::<StringFingering>().is_err());
        Ok(())
    }

    #[test]
    fn schemes() -> Result<()> {
        let d_major = ChordScheme::from_frets(
            &[None, Some(0), Some(0), Some(2), Some(3), Some(2)],
            &[0, 0, 0, 1, 3, 2],
        );
        assert_eq!(d_major.to_string(), "x 0 0 2:1 3:3 2:2");
        assert_eq!(d_major.to_string().parse::<ChordScheme>()?, d_major);
        assert_eq!(
            "x00232".parse::<ChordScheme>()?,
            ChordScheme::from_frets(&[None, Some(0), Some(0), Some(2), Some(3), Some(2)], &[])
        );
        assert_eq!(d_major.max_fret(), 3);
        assert_eq!(d_major.min_pressed_fret(), Some(2));
        assert_eq!(d_major.len(), 6);
        assert_eq!(d_major.string_index(0), 5);
        assert_eq!(d_major.string_index(5), 0);

        let open = "0 0 0 0".parse::<ChordScheme>()?;
        assert_eq!(open.max_fret(), 0);
        assert_eq!(open.min_pressed_fret(), None);
        assert!("x0q".parse::<ChordScheme>().is_err());
        Ok(())
    }
}

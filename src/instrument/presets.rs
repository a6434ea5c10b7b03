//! Built-in instruments with their chord libraries.

use super::{Instrument, Tuning};
use crate::{parse_note_list, ChordDiagram, ChordScheme, StringFingering};

// -------------------------------------------------------------------------------------------------

/// Create a chord diagram from (fret, finger) pairs, thickest string first.
/// Fret 0 is an open string, finger 0 an unknown finger.
fn chord(prefix: &str, name: &str, fingering: &[(usize, u8)]) -> ChordDiagram {
    let scheme = fingering
        .iter()
        .map(|(fret, finger)| StringFingering::fretted(*fret, *finger))
        .collect::<Vec<_>>();
    ChordDiagram::new(name, ChordScheme::new(scheme)).with_prefix(prefix)
}

/// Build a preset instrument from known good data.
fn preset(
    name: &str,
    strings: &str,
    fret_count: usize,
    root_frets: Vec<usize>,
    dots_on_frets: Vec<usize>,
    chords: Vec<ChordDiagram>,
) -> Instrument {
    let strings = parse_note_list(strings);
    Instrument {
        name: name.to_string(),
        tunings: vec![Tuning::new(None, strings.clone())],
        strings,
        fret_count,
        root_frets,
        dots_on_frets,
        chords,
    }
}

// -------------------------------------------------------------------------------------------------

impl Instrument {
    /// Six-string guitar in standard tuning.
    pub fn guitar() -> Self {
        let p = "Guitar_";
        preset(
            "Guitar",
            "EHGDAE",
            20,
            vec![0; 6],
            vec![3, 5, 7, 9, 12, 15, 17],
            vec![
                chord(p, "E", &[(0, 0), (2, 2), (2, 3), (1, 1), (0, 0), (0, 0)]),
                chord(p, "e", &[(0, 0), (2, 2), (2, 3), (0, 0), (0, 0), (0, 0)]),
                ChordDiagram::new(
                    "D",
                    ChordScheme::from_frets(
                        &[None, Some(0), Some(0), Some(2), Some(3), Some(2)],
                        &[0, 0, 0, 1, 3, 2],
                    ),
                )
                .with_prefix(p),
            ],
        )
    }

    /// Five-string bluegrass banjo in open G tuning. The short drone string starts at fret 5.
    ///
    /// Chord diagrams only show the four long strings.
    pub fn banjo() -> Self {
        let p = "Banjo_";
        let chords = vec![
            chord(p, "C", &[(2, 2), (0, 0), (1, 1), (2, 3)]),
            chord(p, "c", &[(1, 1), (0, 0), (1, 2), (1, 3)]),
            chord(p, "C7", &[(2, 1), (3, 4), (1, 1), (2, 3)]),
            chord(p, "C#", &[(3, 3), (1, 1), (2, 2), (3, 4)]),
            chord(p, "C#7", &[(3, 3), (1, 1), (2, 2), (3, 4)]),
            chord(p, "D", &[(0, 0), (2, 1), (3, 2), (4, 4)]),
            chord(p, "d", &[(0, 0), (2, 1), (3, 2), (3, 3)]),
            chord(p, "D7", &[(0, 0), (2, 2), (1, 1), (0, 0)]),
            chord(p, "D7", &[(0, 0), (2, 2), (1, 1), (4, 4)]).with_suffix("_2"),
            chord(p, "D#", &[(5, 3), (3, 1), (4, 2), (5, 4)]),
            chord(p, "D#", &[(8, 1), (8, 1), (8, 1), (8, 1)]).with_suffix("_2"),
            chord(p, "D#7", &[(1, 1), (0, 0), (2, 3), (1, 2)]),
            chord(p, "E", &[(2, 2), (1, 1), (0, 0), (2, 3)]),
            chord(p, "e", &[(2, 2), (0, 0), (0, 0), (2, 3)]),
            chord(p, "E7", &[(2, 2), (1, 1), (3, 4), (2, 3)]),
            chord(p, "F", &[(3, 3), (2, 2), (1, 1), (3, 4)]),
            chord(p, "f", &[(3, 3), (1, 1), (1, 1), (3, 4)]),
            chord(p, "F7", &[(3, 3), (2, 2), (1, 1), (1, 1)]),
            chord(p, "F#", &[(4, 3), (3, 2), (2, 1), (4, 4)]),
            chord(p, "F#7", &[(4, 3), (3, 2), (2, 1), (2, 1)]),
            chord(p, "G", &[(0, 0), (0, 0), (0, 0), (0, 0)]),
            chord(p, "G", &[(5, 3), (4, 2), (3, 1), (5, 4)]).with_suffix("_2"),
            chord(p, "g", &[(5, 3), (3, 1), (3, 1), (5, 4)]),
            chord(p, "G7", &[(0, 0), (0, 0), (0, 0), (3, 3)]),
            chord(p, "G#", &[(1, 1), (1, 1), (1, 1), (1, 1)]),
            chord(p, "G#", &[(6, 3), (5, 2), (4, 1), (6, 4)]).with_suffix("_2"),
            chord(p, "G#7", &[(1, 1), (1, 1), (1, 1), (4, 4)]),
            chord(p, "A", &[(2, 1), (2, 1), (2, 1), (2, 1)]),
            chord(p, "A", &[(7, 3), (6, 2), (5, 1), (7, 4)]).with_suffix("_2"),
            chord(p, "a", &[(2, 2), (2, 3), (1, 1), (2, 4)]),
            chord(p, "A7", &[(2, 1), (0, 0), (2, 2), (2, 2)]),
            chord(p, "A#", &[(3, 1), (3, 1), (3, 1), (3, 1)]),
            chord(p, "A#", &[(8, 3), (7, 2), (6, 1), (8, 4)]).with_suffix("_2"),
            chord(p, "A#m", &[(3, 2), (3, 3), (2, 1), (3, 4)]),
            chord(p, "A#7", &[(3, 1), (3, 1), (3, 1), (6, 4)]),
            chord(p, "H", &[(4, 1), (4, 1), (4, 1), (4, 1)]),
            chord(p, "H", &[(9, 3), (8, 2), (7, 1), (9, 4)]).with_suffix("_2"),
            chord(p, "h", &[(4, 2), (4, 3), (3, 1), (4, 4)]),
            chord(p, "H7", &[(1, 1), (2, 3), (0, 0), (1, 2)]),
        ];
        preset(
            "Banjo",
            "DHGDG",
            22,
            vec![0, 0, 0, 0, 5],
            vec![3, 5, 7, 10, 12, 15, 17],
            chords,
        )
    }

    /// Soprano ukulele in standard tuning.
    pub fn ukulele() -> Self {
        let p = "Ukulele_";
        preset(
            "Ukulele",
            "AECG",
            12,
            vec![0; 4],
            vec![3, 5, 7, 10],
            vec![
                chord(p, "C", &[(0, 0), (0, 0), (0, 0), (3, 3)]),
                chord(p, "G", &[(0, 0), (2, 1), (3, 3), (2, 2)]),
                chord(p, "a", &[(2, 2), (0, 0), (0, 0), (0, 0)]),
                chord(p, "F", &[(2, 2), (0, 0), (1, 1), (0, 0)]),
            ],
        )
    }

    /// All built-in instruments.
    pub fn presets() -> Vec<Instrument> {
        vec![Self::guitar(), Self::banjo(), Self::ukulele()]
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::Note;

    #[test]
    fn presets() {
        let guitar = Instrument::guitar();
        assert_eq!(guitar.string_count(), 6);
        assert_eq!(guitar.fret_count(), 20);
        assert_eq!(guitar.note_at(1, 0), Some(Note::B));
        assert_eq!(guitar.strings()[1].spelling(), "H");
        assert_eq!(guitar.chords().len(), 3);

        let banjo = Instrument::banjo();
        assert_eq!(banjo.root_frets(), &[0, 0, 0, 0, 5]);
        assert_eq!(banjo.note_at(4, 5), Some(Note::G));
        assert_eq!(banjo.chords().len(), 39);

        let ukulele = Instrument::ukulele();
        assert_eq!(ukulele.fret_count(), 12);
        assert_eq!(ukulele.note_at(2, 0), Some(Note::C));
        assert_eq!(ukulele.dots_on_frets(), &[3, 5, 7, 10]);

        for instrument in Instrument::presets() {
            assert_eq!(instrument.root_frets().len(), instrument.string_count());
            assert_eq!(instrument.tunings().len(), 1);
        }
    }

    #[test]
    fn file_stems() -> crate::Result<()> {
        let banjo = Instrument::banjo();
        let stems = banjo
            .chords()
            .iter()
            .map(|chord| chord.file_stem())
            .collect::<crate::Result<Vec<_>>>()?;
        assert_eq!(stems[0], "Banjo_C_major");
        assert!(stems.contains(&"Banjo_G_major_2".to_string()));
        assert!(stems.contains(&"Banjo_A_sharp_minor".to_string()));
        assert!(stems.contains(&"Banjo_B_minor".to_string()));
        Ok(())
    }
}

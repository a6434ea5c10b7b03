//! Chord box layouts: the visible fret window of a chord scheme and the placement of its string,
//! fret and finger markers.
//!
//! Chord boxes are drawn upright: strings are vertical lines, from the thickest string on the left
//! to the thinnest one on the right, frets are horizontal lines below the nut.

use serde::{Deserialize, Serialize};

use crate::{geometry::Rect, Error, Result};

// -------------------------------------------------------------------------------------------------

mod name;
mod scheme;

// -------------------------------------------------------------------------------------------------

pub use name::{ChordDiagram, ChordName};
pub use scheme::{ChordScheme, StringFingering};

// -------------------------------------------------------------------------------------------------

/// Strings extend below the last visible fret by this fraction of a fret's height.
const FRET_EXTENSION: f32 = 0.1;
/// Finger dots are lifted from their fret line by this fraction of a fret's height.
const DOT_OFFSET: f32 = 0.2;

// -------------------------------------------------------------------------------------------------

/// Chord box layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramStyle {
    /// Width of the whole chord box.
    pub width: f32,
    /// Height of the whole chord box, open and muted string markers included.
    pub height: f32,
    /// Number of visible frets.
    pub max_frets: usize,
    /// Size of the string and finger markers.
    pub marker_size: f32,
    /// Highest finger number that gets a label.
    pub max_fingers: u8,
    /// Show finger numbers in finger markers.
    pub label_fingers: bool,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 200.0,
            max_frets: 5,
            marker_size: 20.0,
            max_fingers: 4,
            label_fingers: true,
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Range of frets a chord box shows.
///
/// `first` is the fret line drawn at the top: 0 is the nut. Fret cells `first + 1 ..= last`
/// are visible below it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FretWindow {
    pub first: usize,
    pub last: usize,
}

impl FretWindow {
    /// true when the window starts at the nut, which then gets drawn as a thick bar.
    pub fn shows_nut(&self) -> bool {
        self.first == 0
    }

    /// Number of the first visible fret cell, when the window doesn't start at the nut.
    pub fn label(&self) -> Option<usize> {
        (self.first > 0).then_some(self.first + 1)
    }

    /// true when the given fret's cell is visible.
    pub fn contains(&self, fret: usize) -> bool {
        fret > self.first && fret <= self.last
    }
}

/// Calculate the fret window which shows all pressed frets of the given scheme.
///
/// Schemes which fit into the first `max_frets` frets are shown from the nut on. All others start
/// one fret above their lowest pressed fret. Fails when the pressed frets span more than
/// `max_frets` frets.
pub fn visible_fret_window(scheme: &ChordScheme, max_frets: usize) -> Result<FretWindow> {
    let max = scheme.max_fret();
    let first = match scheme.min_pressed_fret() {
        Some(min) => {
            let span = max - min + 1;
            if span > max_frets {
                return Err(Error::DiagramRange {
                    chord: scheme.to_string(),
                    span,
                    max_frets,
                });
            }
            if max <= max_frets {
                0
            } else {
                min - 1
            }
        }
        None => 0,
    };
    Ok(FretWindow {
        first,
        last: first + max_frets,
    })
}

// -------------------------------------------------------------------------------------------------

/// What a chord box marker shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkerKind {
    /// A cross above the nut.
    Muted,
    /// A ring above the nut.
    Open,
    /// A filled dot in the fret's cell, optionally labeled with the finger number.
    Fretted { fret: usize, label: Option<u8> },
}

/// A single string's marker in a chord box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    /// Scheme entry, which also is the column in the chord box.
    pub column: usize,
    /// Instrument string index.
    pub string: usize,
    pub kind: MarkerKind,
    pub rect: Rect,
}

/// Layout of a chord box for a single chord scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    window: FretWindow,
    string_positions: Vec<f32>,
    fret_positions: Vec<f32>,
    fret_height: f32,
    string_end: f32,
    markers: Vec<Marker>,
}

impl DiagramLayout {
    /// Lay out the given scheme with the given style.
    pub fn new(scheme: &ChordScheme, style: &DiagramStyle) -> Result<Self> {
        if scheme.is_empty() {
            return Err(Error::InvalidScheme(String::new()));
        }
        let window = visible_fret_window(scheme, style.max_frets)?;

        let offset = style.width / scheme.len() as f32;
        let margin = 0.5 * offset;
        let string_positions = (0..scheme.len())
            .map(|column| margin + column as f32 * offset)
            .collect::<Vec<_>>();

        let fret_first = style.marker_size * 1.1;
        let fret_height = (style.height - fret_first) / (style.max_frets as f32 + FRET_EXTENSION);
        let fret_positions = (0..=style.max_frets)
            .map(|row| fret_first + row as f32 * fret_height)
            .collect::<Vec<_>>();
        let string_end = fret_first + (style.max_frets as f32 + FRET_EXTENSION) * fret_height;

        let size = style.marker_size;
        let markers = scheme
            .iter()
            .enumerate()
            .map(|(column, fingering)| {
                let x = string_positions[column] - size / 2.0;
                let (kind, y) = match *fingering {
                    StringFingering::Muted => (MarkerKind::Muted, 0.0),
                    StringFingering::Open => (MarkerKind::Open, 0.0),
                    StringFingering::Fretted { fret, finger } => {
                        // the window contains all pressed frets
                        let line = fret_positions[fret - window.first];
                        let bottom = line - DOT_OFFSET * fret_height;
                        let label = finger.filter(|finger| {
                            style.label_fingers && (1..=style.max_fingers).contains(finger)
                        });
                        (MarkerKind::Fretted { fret, label }, bottom - size)
                    }
                };
                Marker {
                    column,
                    string: scheme.string_index(column),
                    kind,
                    rect: Rect::new(x, y, size, size),
                }
            })
            .collect();

        Ok(Self {
            window,
            string_positions,
            fret_positions,
            fret_height,
            string_end,
            markers,
        })
    }

    pub fn window(&self) -> FretWindow {
        self.window
    }

    /// Draw the first fret line as nut.
    pub fn shows_nut(&self) -> bool {
        self.window.shows_nut()
    }

    /// Fret number label, drawn next to the first visible fret cell.
    pub fn fret_label(&self) -> Option<usize> {
        self.window.label()
    }

    /// x positions of the string lines, one per scheme entry.
    pub fn string_positions(&self) -> &[f32] {
        &self.string_positions
    }

    /// y positions of the fret lines, starting with the nut or first visible fret line.
    pub fn fret_positions(&self) -> &[f32] {
        &self.fret_positions
    }

    pub fn fret_height(&self) -> f32 {
        self.fret_height
    }

    /// y range of the string lines.
    pub fn string_span(&self) -> (f32, f32) {
        (self.fret_positions[0], self.string_end)
    }

    /// Markers, one per scheme entry.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn window(scheme: &str, max_frets: usize) -> Result<(usize, usize)> {
        let window = visible_fret_window(&scheme.parse()?, max_frets)?;
        Ok((window.first, window.last))
    }

    #[test]
    fn fret_windows() -> Result<()> {
        assert_eq!(window("x 0 0 2 3 2", 5)?, (0, 5));
        assert_eq!(window("0 0 0 0", 5)?, (0, 5));
        assert_eq!(window("x x x x", 5)?, (0, 5));
        assert_eq!(window("0 0 5", 5)?, (0, 5));
        assert_eq!(window("x 6 8 6 7 6", 5)?, (5, 10));
        assert_eq!(window("0 2 6", 5)?, (1, 6));
        assert_eq!(window("8 8 8 8", 5)?, (7, 12));
        assert!(matches!(
            window("1 0 7", 5),
            Err(Error::DiagramRange {
                span: 7,
                max_frets: 5,
                ..
            })
        ));
        assert!(window("1 6", 5).is_err());

        // all pressed frets are within the window
        for scheme in ["x 0 0 2 3 2", "x 6 8 6 7 6", "0 2 6", "5 3 4 5", "9 8 7 9"] {
            let scheme = scheme.parse::<ChordScheme>()?;
            let window = visible_fret_window(&scheme, 5)?;
            assert!(scheme
                .iter()
                .filter_map(|f| f.fret())
                .filter(|fret| *fret > 0)
                .all(|fret| window.contains(fret)));
        }
        Ok(())
    }

    #[test]
    fn window_labels() {
        let window = FretWindow { first: 0, last: 5 };
        assert!(window.shows_nut());
        assert_eq!(window.label(), None);
        let window = FretWindow { first: 5, last: 10 };
        assert!(!window.shows_nut());
        assert_eq!(window.label(), Some(6));
        assert!(!window.contains(5));
        assert!(window.contains(10));
    }

    #[test]
    fn layout() -> Result<()> {
        let style = DiagramStyle::default();
        let scheme = "x 0 0 2:1 3:3 2:2".parse::<ChordScheme>()?;
        let layout = DiagramLayout::new(&scheme, &style)?;
        assert!(layout.shows_nut());
        assert_eq!(layout.fret_label(), None);

        let offset = style.width / 6.0;
        assert_eq!(layout.string_positions().len(), 6);
        assert!((layout.string_positions()[0] - offset / 2.0).abs() < 1e-3);
        assert!((layout.string_positions()[5] - (style.width - offset / 2.0)).abs() < 1e-3);

        assert_eq!(layout.fret_positions().len(), 6);
        assert!((layout.fret_positions()[0] - 22.0).abs() < 1e-3);
        assert!((layout.fret_height() - 178.0 / 5.1).abs() < 1e-3);
        assert!(layout.string_span().1 <= style.height + 1e-3);

        let markers = layout.markers();
        assert_eq!(markers.len(), 6);
        assert_eq!(markers[0].kind, MarkerKind::Muted);
        assert_eq!(markers[0].string, 5);
        assert_eq!(markers[1].kind, MarkerKind::Open);
        assert_eq!(markers[1].rect.y, 0.0);
        assert!(markers[1].rect.bottom() < layout.fret_positions()[0]);
        assert_eq!(
            markers[4].kind,
            MarkerKind::Fretted {
                fret: 3,
                label: Some(3)
            }
        );
        assert_eq!(markers[5].string, 0);

        // finger dots sit within their fret cells
        for marker in markers {
            if let MarkerKind::Fretted { fret, .. } = marker.kind {
                let line = layout.fret_positions()[fret];
                let expected = line - 0.2 * layout.fret_height();
                assert!((marker.rect.bottom() - expected).abs() < 1e-3);
                assert!(marker.rect.y > layout.fret_positions()[fret - 1]);
                let x = layout.string_positions()[marker.column];
                assert!((marker.rect.center().0 - x).abs() < 1e-3);
            }
        }
        Ok(())
    }

    #[test]
    fn shifted_layout() -> Result<()> {
        let scheme = "x 6:1 8:3 6:1 7:2 6:1".parse::<ChordScheme>()?;
        let layout = DiagramLayout::new(&scheme, &DiagramStyle::default())?;
        assert!(!layout.shows_nut());
        assert_eq!(layout.fret_label(), Some(6));
        let dot = layout.markers()[2];
        assert_eq!(
            dot.kind,
            MarkerKind::Fretted {
                fret: 8,
                label: Some(3)
            }
        );
        // fret 8 is the third visible cell
        assert!(dot.rect.y > layout.fret_positions()[2] && dot.rect.y < layout.fret_positions()[3]);
        Ok(())
    }

    #[test]
    fn finger_labels() -> Result<()> {
        let scheme = "1:5 2:0 3:4 1:1".parse::<ChordScheme>()?;
        let labels = |style: &DiagramStyle| -> Result<Vec<Option<u8>>> {
            Ok(DiagramLayout::new(&scheme, style)?
                .markers()
                .iter()
                .map(|marker| match marker.kind {
                    MarkerKind::Fretted { label, .. } => label,
                    _ => None,
                })
                .collect())
        };
        let mut style = DiagramStyle::default();
        assert_eq!(labels(&style)?, vec![None, None, Some(4), Some(1)]);
        style.label_fingers = false;
        assert_eq!(labels(&style)?, vec![None, None, None, None]);
        Ok(())
    }

    #[test]
    fn invalid_layouts() -> Result<()> {
        let style = DiagramStyle::default();
        assert!(matches!(
            DiagramLayout::new(&ChordScheme::default(), &style),
            Err(Error::InvalidScheme(_))
        ));
        assert!(matches!(
            DiagramLayout::new(&"1 0 7".parse()?, &style),
            Err(Error::DiagramRange { .. })
        ));
        Ok(())
    }
}

//! Physical layout of an instrument's fretboard: fret and string positions, note marker slots
//! and fret position dots.
//!
//! The neck is laid out horizontally: the x axis runs along the neck, starting at the open string
//! slots left of the nut, the y axis runs across the strings. String index 0, the thinnest string,
//! is the one nearest to the bottom of the diagram.

use serde::{Deserialize, Serialize};

use crate::Instrument;

// -------------------------------------------------------------------------------------------------

/// Axis aligned rectangle in diagram coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rect of the given size, centered at the given point.
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// true when the other rect lies completely within this one.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

// -------------------------------------------------------------------------------------------------

/// How frets are distributed along the neck.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FretSpacing {
    /// All frets have the same width.
    Even,
    /// Frets get narrower towards the body, as on a real instrument (equal temperament).
    #[default]
    Scaled,
}

/// Fretboard layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardStyle {
    /// Fret spacing model.
    pub spacing: FretSpacing,
    /// Font size of the note labels. Defines the marker size and the minimum fret width.
    pub font_size: f32,
    /// Extent of the neck across all strings.
    pub width: f32,
    /// Minimum width of the fret after the last one. Defaults to the marker size when unset.
    pub min_last_fret_width: Option<f32>,
}

impl Default for FretboardStyle {
    fn default() -> Self {
        Self {
            spacing: FretSpacing::default(),
            font_size: 8.0,
            width: 120.0,
            min_last_fret_width: None,
        }
    }
}

impl FretboardStyle {
    /// Size of the square slot which holds a note name.
    pub fn marker_size(&self) -> f32 {
        self.font_size / 0.8 * 1.4
    }

    /// Width the narrowest fret must at least have.
    pub fn min_last_fret_width(&self) -> f32 {
        self.min_last_fret_width.unwrap_or(self.marker_size())
    }
}

// -------------------------------------------------------------------------------------------------

/// Solve the scale length, the distance from the nut to the bridge, for which the fret after the
/// last one (`fret_count + 1`) still is `min_width` wide.
///
/// Fret `n` sits at `s - s / 2^(n/12)` from the nut, so the width of fret `n + 1` is
/// `s * (1/2^(n/12) - 1/2^((n+1)/12))`.
pub fn scale_length(min_width: f32, fret_count: usize) -> f32 {
    let n = fret_count as f32;
    min_width / (1.0 / 2_f32.powf(n / 12.0) - 1.0 / 2_f32.powf((n + 1.0) / 12.0))
}

/// Distance of the given fret from the nut for the given scale length.
pub fn scaled_fret_distance(scale_length: f32, fret: usize) -> f32 {
    scale_length - scale_length / 2_f32.powf(fret as f32 / 12.0)
}

// -------------------------------------------------------------------------------------------------

/// A fret position dot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FretDot {
    pub fret: usize,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Fret and string positions of an instrument's fretboard.
#[derive(Debug, Clone)]
pub struct FretboardGeometry {
    style: FretboardStyle,
    fret_count: usize,
    string_count: usize,
    root_frets: Vec<usize>,
    dots_on_frets: Vec<usize>,
    scale_length: f32,
    neck_length: f32,
}

impl FretboardGeometry {
    /// Create a new layout for the given instrument.
    pub fn new(instrument: &Instrument, style: FretboardStyle) -> Self {
        let fret_count = instrument.fret_count();
        // a neck without frets still gets the length of a single fret
        let neck_frets = fret_count.max(1);
        let scale_length = scale_length(style.min_last_fret_width(), neck_frets);
        let neck_length = scaled_fret_distance(scale_length, neck_frets);
        log::debug!(
            "fretboard layout for {}: {} frets, scale length {:.1}, neck length {:.1}",
            instrument.name(),
            fret_count,
            scale_length,
            neck_length
        );
        Self {
            style,
            fret_count,
            string_count: instrument.string_count(),
            root_frets: instrument.root_frets().to_vec(),
            dots_on_frets: instrument.dots_on_frets().to_vec(),
            scale_length,
            neck_length,
        }
    }

    pub fn style(&self) -> &FretboardStyle {
        &self.style
    }

    pub fn fret_count(&self) -> usize {
        self.fret_count
    }

    /// Scale length of the scaled spacing model.
    pub fn scale_length(&self) -> f32 {
        self.scale_length
    }

    /// x position of the nut. The open string slots are placed left of it.
    pub fn nut_position(&self) -> f32 {
        self.style.marker_size()
    }

    /// Total length of the board, open string slots included: the position of the last fret.
    /// Both spacing models share the same board length. Boards without frets still span a
    /// single fret.
    pub fn board_length(&self) -> f32 {
        self.nut_position() + self.neck_length
    }

    /// x position of the given fret line. Fret 0 is the nut.
    pub fn fret_position(&self, fret: usize) -> f32 {
        let distance = match self.style.spacing {
            FretSpacing::Even => fret as f32 * self.neck_length / self.fret_count.max(1) as f32,
            FretSpacing::Scaled => scaled_fret_distance(self.scale_length, fret),
        };
        self.nut_position() + distance
    }

    /// Start and end x position of the given fret, which lies between fret line `fret - 1` and
    /// `fret`. Fret 0 spans the open string slot area left of the nut.
    pub fn fret_span(&self, fret: usize) -> (f32, f32) {
        if fret == 0 {
            (0.0, self.nut_position())
        } else {
            (self.fret_position(fret - 1), self.fret_position(fret))
        }
    }

    /// y position of the given string. Strings are evenly spaced, string 0 at the bottom.
    pub fn string_position(&self, string: usize) -> f32 {
        let row = self.string_count.saturating_sub(string + 1);
        self.string_spacing() * (row as f32 + 0.5)
    }

    /// x range in which the string is drawn: strings with a root fret start at that fret.
    pub fn string_span(&self, string: usize) -> (f32, f32) {
        let root_fret = self.root_frets.get(string).copied().unwrap_or(0);
        (self.fret_position(root_fret), self.board_length())
    }

    fn string_spacing(&self) -> f32 {
        self.style.width / self.string_count.max(1) as f32
    }

    /// Slot for the note name of the given position. It ends at the fret line, towards the nut,
    /// and is centered on the string. Returns None for positions which are not on the fretboard.
    pub fn note_marker(&self, string: usize, fret: usize) -> Option<Rect> {
        let root_fret = *self.root_frets.get(string)?;
        if fret < root_fret || fret > self.fret_count {
            return None;
        }
        let size = self.style.marker_size();
        let right = self.fret_position(fret);
        Some(Rect::centered(
            right - size / 2.0,
            self.string_position(string),
            size,
            size,
        ))
    }

    /// Position dots of all marked frets. Fret 12 gets two dots side by side.
    pub fn fret_dots(&self) -> Vec<FretDot> {
        let spacing = self.string_spacing();
        let center_y = self.style.width / 2.0;
        let mut dots = Vec::new();
        for fret in self.dots_on_frets.iter().copied() {
            if fret == 0 || fret > self.fret_count {
                continue;
            }
            let (start, end) = self.fret_span(fret);
            let x = (start + end) / 2.0;
            let radius = (spacing * 0.25).min((end - start) * 0.3);
            if fret == 12 {
                let offset = spacing.min(center_y / 2.0);
                for y in [center_y - offset, center_y + offset] {
                    dots.push(FretDot { fret, x, y, radius });
                }
            } else {
                dots.push(FretDot {
                    fret,
                    x,
                    y: center_y,
                    radius,
                });
            }
        }
        dots
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::{parse_note_list, Instrument, Result};

    fn geometries() -> Vec<FretboardGeometry> {
        let mut geometries = Vec::new();
        for instrument in Instrument::presets() {
            for spacing in [FretSpacing::Even, FretSpacing::Scaled] {
                let style = FretboardStyle {
                    spacing,
                    ..FretboardStyle::default()
                };
                geometries.push(FretboardGeometry::new(&instrument, style));
            }
        }
        geometries
    }

    #[test]
    fn scale_length_solution() {
        let (width, frets) = (14.0, 20);
        let s = scale_length(width, frets);
        let next_fret_width = scaled_fret_distance(s, frets + 1) - scaled_fret_distance(s, frets);
        assert!((next_fret_width - width).abs() < 1e-3);
        // the octave sits at half of the scale length
        assert!((scaled_fret_distance(s, 12) - s / 2.0).abs() < 1e-3);
    }

    #[test]
    fn fret_positions() {
        for geometry in geometries() {
            let fret_count = geometry.fret_count();
            let positions = (0..=fret_count)
                .map(|fret| geometry.fret_position(fret))
                .collect::<Vec<_>>();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for fret in 1..=fret_count {
                let (start, end) = geometry.fret_span(fret);
                assert!(end > start);
                // every fret can hold a note marker
                assert!(end - start >= geometry.style().min_last_fret_width() - 1e-3);
            }
            let last = geometry.fret_position(fret_count);
            assert!((last - geometry.board_length()).abs() < 1e-3);
        }
    }

    #[test]
    fn even_spacing() {
        let even = FretboardGeometry::new(
            &Instrument::guitar(),
            FretboardStyle {
                spacing: FretSpacing::Even,
                ..FretboardStyle::default()
            },
        );
        let scaled = FretboardGeometry::new(&Instrument::guitar(), FretboardStyle::default());
        assert!((even.board_length() - scaled.board_length()).abs() < 1e-3);
        let width = (even.board_length() - even.nut_position()) / 20.0;
        for fret in 1..=20 {
            let (start, end) = even.fret_span(fret);
            assert!((end - start - width).abs() < 1e-3);
        }
        // scaled frets get narrower towards the body
        let (start, end) = scaled.fret_span(1);
        assert!(end - start > width);
    }

    #[test]
    fn string_positions() {
        let geometry = FretboardGeometry::new(&Instrument::guitar(), FretboardStyle::default());
        let positions = (0..6)
            .map(|string| geometry.string_position(string))
            .collect::<Vec<_>>();
        // string 0 is at the bottom
        assert!(positions.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(positions[5], 10.0);
        assert_eq!(positions[0], 110.0);
        let banjo = FretboardGeometry::new(&Instrument::banjo(), FretboardStyle::default());
        assert_eq!(banjo.string_span(4).0, banjo.fret_position(5));
        assert_eq!(banjo.string_span(0).0, banjo.nut_position());
    }

    #[test]
    fn note_markers() {
        for geometry in geometries() {
            for string in 0..geometry.string_count {
                let root_fret = geometry.root_frets[string];
                for fret in 0..=geometry.fret_count() {
                    let marker = geometry.note_marker(string, fret);
                    if fret < root_fret {
                        assert!(marker.is_none());
                        continue;
                    }
                    let marker = marker.unwrap();
                    assert_eq!(marker.width, geometry.style().marker_size());
                    assert!((marker.center().1 - geometry.string_position(string)).abs() < 1e-3);
                    let (start, end) = geometry.fret_span(fret);
                    assert!(marker.x >= start - 1e-3 && marker.right() <= end + 1e-3);
                }
            }
            assert!(geometry.note_marker(geometry.string_count, 0).is_none());
            assert!(geometry
                .note_marker(0, geometry.fret_count() + 1)
                .is_none());
        }
    }

    #[test]
    fn fret_dots() -> Result<()> {
        let geometry = FretboardGeometry::new(&Instrument::guitar(), FretboardStyle::default());
        let dots = geometry.fret_dots();
        // 3, 5, 7, 9, 15, 17 and two for the 12th
        assert_eq!(dots.len(), 8);
        assert_eq!(dots.iter().filter(|d| d.fret == 12).count(), 2);
        for dot in &dots {
            let (start, end) = geometry.fret_span(dot.fret);
            assert!(dot.x - dot.radius >= start && dot.x + dot.radius <= end);
        }
        let ukulele = FretboardGeometry::new(&Instrument::ukulele(), FretboardStyle::default());
        assert!(ukulele.fret_dots().iter().all(|d| d.fret != 12));

        // only the 12th fret gets a double dot
        let long_neck = Instrument::new("Long Neck", parse_note_list("EHGDAE"), 24)?
            .with_dots(vec![12, 24]);
        let dots = FretboardGeometry::new(&long_neck, FretboardStyle::default()).fret_dots();
        assert_eq!(dots.iter().filter(|d| d.fret == 12).count(), 2);
        assert_eq!(dots.iter().filter(|d| d.fret == 24).count(), 1);
        Ok(())
    }

    #[test]
    fn fretless() -> Result<()> {
        let fretless = Instrument::new("Fretless", parse_note_list("GDAE"), 0)?.with_dots(vec![1]);
        let geometry = FretboardGeometry::new(&fretless, FretboardStyle::default());
        assert_eq!(geometry.fret_count(), 0);
        assert!(geometry.note_marker(0, 0).is_some());
        assert!(geometry.note_marker(0, 1).is_none());
        assert!(geometry.fret_dots().is_empty());
        assert!(geometry.board_length() > geometry.nut_position());
        Ok(())
    }
}

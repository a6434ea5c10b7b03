use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use fretboard::{
    DiagramLayout, DiagramStyle, FretSpacing, FretboardGeometry, FretboardStyle, Instrument,
};

// ---------------------------------------------------------------------------------------------

pub fn fretboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fretboard");
    let guitar = Instrument::guitar();
    for spacing in [FretSpacing::Even, FretSpacing::Scaled] {
        let style = FretboardStyle {
            spacing,
            ..FretboardStyle::default()
        };
        let geometry = FretboardGeometry::new(&guitar, style);
        group.bench_function(format!("Markers ({:?})", spacing), |b| {
            b.iter(|| {
                for string in 0..guitar.string_count() {
                    for fret in 0..=guitar.fret_count() {
                        black_box(geometry.note_marker(string, fret));
                    }
                }
            })
        });
    }
    group.finish();
}

pub fn chord_boxes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chord Boxes");
    let banjo = Instrument::banjo();
    let style = DiagramStyle::default();
    group.bench_function("Layout", |b| {
        b.iter(|| {
            for diagram in banjo.chords() {
                let _ = black_box(DiagramLayout::new(diagram.scheme(), &style));
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = layout;
    config = Criterion::default();
    targets = fretboard, chord_boxes
}

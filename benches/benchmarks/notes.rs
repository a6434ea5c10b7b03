use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use fretboard::{parse_note_list, validate_note_list, Chord, Instrument, Note};

// ---------------------------------------------------------------------------------------------

const NOTE_LIST: &str = "E, H, G, D, A, E Cis Fis Gis, Des Es As, c# d♭ f♯ g♭ b h e a d g";

pub fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Notes");
    group.bench_function("Parse List", |b| {
        b.iter(|| black_box(parse_note_list(black_box(NOTE_LIST))))
    });
    group.bench_function("Validate List", |b| {
        b.iter(|| black_box(validate_note_list(black_box(NOTE_LIST))))
    });
    group.finish();
}

pub fn chords(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chords");
    let notes = [Note::Fs, Note::A, Note::Cs, Note::E];
    group.bench_function("Identify", |b| {
        b.iter(|| black_box(Chord::identify(black_box(&notes))))
    });
    let banjo = Instrument::banjo();
    let chord = Chord::try_from("Gm7").unwrap();
    group.bench_function("Positions", |b| {
        b.iter(|| black_box(banjo.positions_of(&chord.notes())))
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = notes;
    config = Criterion::default();
    targets = parse, chords
}

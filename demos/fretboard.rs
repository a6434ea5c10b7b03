//! Prints the fretboard of a built-in instrument with the notes of a chord highlighted, followed
//! by the instrument's chord boxes for that chord.
//!
//! Usage: `cargo run --example fretboard -- [guitar|banjo|ukulele] [chord symbol]`

use anyhow::anyhow;
use simplelog::*;

use fretboard::prelude::*;

// -------------------------------------------------------------------------------------------------

fn print_fretboard(instrument: &Instrument, chord: &Chord) {
    let notes = chord.notes();
    let strings = instrument.string_count();
    // the thickest string is the leftmost column, like in chord boxes
    let header = (0..strings)
        .rev()
        .map(|string| format!("{:^6}", instrument.strings()[string].to_string()))
        .collect::<String>();
    println!("fret {}", header);
    for fret in 0..=instrument.fret_count() {
        let marker = if instrument.dots_on_frets().contains(&fret) {
            '*'
        } else {
            ' '
        };
        let row = (0..strings)
            .rev()
            .map(|string| match instrument.note_at(string, fret) {
                Some(note) if notes.contains(&note) => format!("{:^6}", format!("[{}]", note)),
                Some(note) => format!("{:^6}", note.to_string()),
                None => format!("{:^6}", ""),
            })
            .collect::<String>();
        println!("{:>3}{}  {}", fret, marker, row);
    }
}

fn print_chord_box(diagram: &ChordDiagram) -> Result<()> {
    let layout = diagram_layout(diagram.scheme(), 5)?;
    println!("{} -> {}.png", diagram, diagram.file_stem()?);
    let mut rows = vec![vec![' '; layout.markers().len()]; layout.fret_positions().len()];
    let mut header = String::new();
    for marker in layout.markers() {
        header.push(match marker.kind {
            MarkerKind::Muted => 'x',
            MarkerKind::Open => 'o',
            MarkerKind::Fretted { .. } => ' ',
        });
        if let MarkerKind::Fretted { fret, label } = marker.kind {
            let row = fret - layout.window().first;
            rows[row][marker.column] = match label {
                Some(finger) => char::from(b'0' + finger),
                None => '@',
            };
        }
    }
    println!("   {}", header);
    let nut = if layout.shows_nut() { "=" } else { "-" };
    println!("   {}", nut.repeat(header.len()));
    for (index, row) in rows.iter().enumerate().skip(1) {
        let label = match (index, layout.fret_label()) {
            (1, Some(fret)) => format!("{:>2}", fret),
            _ => "  ".to_string(),
        };
        println!("{} {}", label, row.iter().collect::<String>());
    }
    println!();
    Ok(())
}

// -------------------------------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // init logging
    TermLogger::init(
        log::STATIC_MAX_LEVEL,
        ConfigBuilder::default().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        log::error!("init_logger error: {:?}", err);
    });

    let mut args = std::env::args().skip(1);
    let instrument_name = args.next().unwrap_or_else(|| "guitar".to_string());
    let chord_symbol = args.next().unwrap_or_else(|| "E".to_string());

    let instrument = Instrument::presets()
        .into_iter()
        .find(|instrument| instrument.name().eq_ignore_ascii_case(&instrument_name))
        .ok_or_else(|| anyhow!("unknown instrument '{}'", instrument_name))?;
    for diagnostic in instrument.check_chords() {
        println!("warning: {}", diagnostic);
    }

    let chord = Chord::try_from(chord_symbol.as_str())?;
    println!(
        "{}: {} ({})",
        instrument,
        chord,
        format_note_list(&chord.notes())
    );
    println!();
    print_fretboard(&instrument, &chord);
    println!();

    let geometry = FretboardGeometry::new(&instrument, FretboardStyle::default());
    println!(
        "scale length {:.1}, board length {:.1}, 12th fret at {:.1}",
        geometry.scale_length(),
        geometry.board_length(),
        geometry.fret_position(instrument.fret_count().min(12))
    );
    println!();

    let mut found = false;
    for diagram in instrument.chords() {
        let matches = ChordName::parse(diagram.name())
            .ok()
            .and_then(|name| name.chord())
            .is_some_and(|diagram_chord| diagram_chord == chord);
        if matches {
            found = true;
            print_chord_box(diagram)?;
        }
    }
    if !found {
        println!("no {} chord boxes for {}", chord.symbol(), instrument.name());
    }
    Ok(())
}

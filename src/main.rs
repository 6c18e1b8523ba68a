use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

mod cataloger;
mod decoder;
mod emitter;
mod track_event;

use cataloger::Cataloger;
use emitter::Edition;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(short, long)]
    midi_file: String,

    #[arg(
        short,
        long,
        value_enum,
        default_value = "java",
        help = "Command dialect to emit"
    )]
    edition: Edition,
}

fn main() -> Result<()> {
    let args = Args::parse();
    eprintln!("MIDI FILE: {}", args.midi_file);

    let bytes = fs::read(&args.midi_file).context("read midi file")?;
    let tracks = decoder::decode(&bytes)?;

    // schedule name comes from the file name, whitespace collapsed
    let title = Path::new(&args.midi_file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let name = emitter::schedule_name(title);

    let catalog = Cataloger::new().run(&tracks);
    eprintln!(
        "-- {} notes, track end at tick {}",
        catalog.notes.len(),
        catalog.end_tick
    );
    if catalog.end_tick == 0 {
        eprintln!("-- Track end at tick 0: the counter resets every tick");
    }

    print!("{}", emitter::emit(&name, &catalog, args.edition));

    Ok(())
}

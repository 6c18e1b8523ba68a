use anyhow::{Context, Result};
use midly::{MetaMessage, MidiMessage, Smf, TrackEventKind};

use crate::track_event::{EventKind, TrackEvent};

/// Decodes a Standard MIDI File into per-track event sequences. This is the
/// only module that sees the container format; everything downstream works
/// on `TrackEvent`.
pub fn decode(bytes: &[u8]) -> Result<Vec<Vec<TrackEvent>>> {
    let smf = Smf::parse(bytes).context("parse midi data")?;
    Ok(smf
        .tracks
        .iter()
        .map(|track| track.iter().map(convert).collect())
        .collect())
}

fn convert(event: &midly::TrackEvent) -> TrackEvent {
    let kind = match event.kind {
        TrackEventKind::Midi {
            message: MidiMessage::NoteOn { key, .. },
            ..
        } => EventKind::NoteOn(key.as_int()),
        TrackEventKind::Meta(MetaMessage::Tempo(micros_per_qn)) => {
            EventKind::TempoChange(micros_per_qn.as_int())
        }
        TrackEventKind::Meta(MetaMessage::EndOfTrack) => EventKind::EndOfTrack,
        _ => EventKind::Other,
    };
    TrackEvent {
        delta: event.delta.as_int(),
        kind,
    }
}

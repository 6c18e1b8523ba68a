use crate::track_event::{Catalog, EventKind, NoteRecord, TrackEvent};

// The conversion fixes the subdivision at 480 pulses per quarter note and
// ignores the file header's own division.
const PULSES_PER_QN: f64 = 480.0;

// Game ticks per second.
const TICKS_PER_SEC: f64 = 20.0;

const MICROS_PER_SEC: f64 = 1_000_000.0;

/// Walks decoded tracks and produces the note catalog: one `(tick, pitch)`
/// record per note-on, plus the tick of the last end-of-track seen.
pub struct Cataloger {
    elapsed_sec: f64,
    // unset until the first tempo event of the current track
    tempo_micros_per_qn: Option<u32>,
}

impl Cataloger {
    pub fn new() -> Self {
        Self {
            elapsed_sec: 0.0,
            tempo_micros_per_qn: None,
        }
    }

    pub fn run(&mut self, tracks: &[Vec<TrackEvent>]) -> Catalog {
        let mut catalog = Catalog::default();
        for track in tracks {
            // Each track carries its own delta stream from time zero.
            self.elapsed_sec = 0.0;
            self.tempo_micros_per_qn = None;
            for event in track {
                self.process_event(event, &mut catalog);
            }
        }
        catalog
    }

    fn process_event(&mut self, event: &TrackEvent, catalog: &mut Catalog) {
        self.elapsed_sec += self.delta_to_seconds(event.delta);

        match event.kind {
            EventKind::TempoChange(micros_per_qn) => {
                let bpm = MICROS_PER_SEC / micros_per_qn as f64 * 60.0;
                eprintln!("-- Tempo change: {}", bpm);
                // takes effect for deltas after this event
                self.tempo_micros_per_qn = Some(micros_per_qn);
            }
            EventKind::NoteOn(note) => {
                catalog.notes.push(NoteRecord {
                    tick: self.current_tick(),
                    pitch: fold_pitch(note),
                });
            }
            EventKind::EndOfTrack => {
                // later tracks overwrite earlier ones
                catalog.end_tick = self.current_tick();
            }
            EventKind::Other => {}
        }
    }

    fn delta_to_seconds(&self, delta: u32) -> f64 {
        // A delta consumed before the track's first tempo event contributes
        // no elapsed time.
        let Some(tempo) = self.tempo_micros_per_qn else {
            return 0.0;
        };
        let beats = delta as f64 / PULSES_PER_QN;
        beats * tempo as f64 / MICROS_PER_SEC
    }

    fn current_tick(&self) -> u32 {
        // nearest tick, halves away from zero
        (self.elapsed_sec * TICKS_PER_SEC).round() as u32
    }
}

/// Maps a raw MIDI note number onto the note block's right-click range.
/// 54 (F#3) is zero clicks; 78 (F#5) plays as the full 24 clicks rather
/// than wrapping back to zero; everything else wraps modulo 24.
pub fn fold_pitch(note: u8) -> u8 {
    if note == 78 {
        24
    } else {
        (note as i32 - 54).rem_euclid(24) as u8
    }
}

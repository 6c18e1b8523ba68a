#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackEvent {
    pub delta: u32, // MIDI pulses since the previous event in the same track
    pub kind: EventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    NoteOn(u8),
    TempoChange(u32), // microseconds per quarter note
    EndOfTrack,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRecord {
    pub tick: u32,
    pub pitch: u8, // note block right-clicks, 0..=24
}

#[derive(Debug, Default)]
pub struct Catalog {
    pub notes: Vec<NoteRecord>,
    pub end_tick: u32,
}

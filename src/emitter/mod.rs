mod mcfunction;

pub use mcfunction::emit;

/// Which command dialect to emit. The two editions differ only in the
/// literal tokens for stopping and playing sounds, never in scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Edition {
    Java,
    Bedrock,
}

pub(crate) struct Dialect {
    pub stop_sound: &'static str,
    pub sound: &'static str,
    // playsound source qualifier, trailing space included; empty on Bedrock
    pub source: &'static str,
}

const JAVA: Dialect = Dialect {
    stop_sound: "stopsound @s music",
    sound: "minecraft:block.note_block.bass",
    source: "voice ",
};

const BEDROCK: Dialect = Dialect {
    stop_sound: "music stop",
    sound: "note.bass",
    source: "",
};

impl Edition {
    pub(crate) fn dialect(self) -> &'static Dialect {
        match self {
            Edition::Java => &JAVA,
            Edition::Bedrock => &BEDROCK,
        }
    }
}

/// Derives the schedule name that namespaces the counter objective and the
/// listener tag: whitespace runs collapse to single underscores.
pub fn schedule_name(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("_")
}

use crate::emitter::{Dialect, Edition};
use crate::track_event::{Catalog, NoteRecord};

// Prefix for the counter objective (MCFJ.Tick.<name>) and the listener tag
// (MCFJ.<name>).
const NAMESPACE: &str = "MCFJ";

/// Emits the full command script for one schedule: counter setup, one
/// dispatch command per catalogued note, then the per-tick advance and
/// wraparound teardown. Phase order is load-bearing; the dispatch and
/// teardown commands test the counter the setup phase creates.
pub fn emit(name: &str, catalog: &Catalog, edition: Edition) -> String {
    let dialect = edition.dialect();
    let mut out = setup(name, dialect);
    for note in &catalog.notes {
        out.push_str(&dispatch(name, note, dialect));
    }
    out.push_str(&teardown(name, catalog.end_tick));
    out
}

fn setup(name: &str, dialect: &Dialect) -> String {
    format!(
        "scoreboard objectives add {ns}.Tick.{name} dummy\n\
         scoreboard players add @a {ns}.Tick.{name} 0\n\
         execute as @a[tag={ns}.{name}] at @s run {stop}\n",
        ns = NAMESPACE,
        name = name,
        stop = dialect.stop_sound,
    )
}

fn dispatch(name: &str, note: &NoteRecord, dialect: &Dialect) -> String {
    format!(
        "execute as @a at @s if entity @s[tag={ns}.{name}] \
         if score @s {ns}.Tick.{name} matches {tick} \
         run playsound {sound} {source}@s ~ ~ ~ 1.0 {factor:?}\n",
        ns = NAMESPACE,
        name = name,
        tick = note.tick,
        sound = dialect.sound,
        source = dialect.source,
        factor = pitch_factor(note.pitch),
    )
}

fn teardown(name: &str, end_tick: u32) -> String {
    // The increment is unconditional for every tagged player; a skipped tick
    // would silently drop any notes scheduled on it. Reaching end_tick resets
    // the counter, which wraps the loop; untagged players are reset too so a
    // player leaving mid-song rejoins from the top.
    format!(
        "execute as @a[tag={ns}.{name}] at @s run scoreboard players add @s {ns}.Tick.{name} 1\n\
         execute as @a[tag={ns}.{name}] at @s if score @s {ns}.Tick.{name} matches {end}.. \
         run scoreboard players reset @s {ns}.Tick.{name}\n\
         execute as @a[tag=!{ns}.{name}] at @s run scoreboard players reset @s {ns}.Tick.{name}\n",
        ns = NAMESPACE,
        name = name,
        end = end_tick,
    )
}

/// Pitch multiplier for a note block right-click count: equal temperament,
/// one semitone per click, unity at 12 clicks. Rounded to six decimals.
pub fn pitch_factor(clicks: u8) -> f64 {
    let factor = 2f64.powf((clicks as f64 - 12.0) / 12.0);
    (factor * 1e6).round() / 1e6
}

use super::{record_history, Outcome, ShellProxy};
use tsh_store::{HistoryLog, SongStore};
use tsh_types::Context;

pub fn description() -> &'static str {
    "Show all the songs you have currently stored"
}

/// Built-in all_songs command implementation
/// Prints every stored song name in insertion order.
pub fn command(
    ctx: &Context,
    store: &SongStore,
    history: &mut HistoryLog,
    _proxy: &mut dyn ShellProxy,
) -> Outcome {
    if store.is_empty() {
        println!("No songs currently stored");
    } else {
        for name in store.names() {
            println!("{name}");
        }
    }
    record_history(ctx, history, "all_songs");
    Outcome::NoChange
}

use super::{record_history, Outcome, ShellProxy};
use tsh_store::{HistoryLog, SongStore};
use tsh_types::Context;

pub fn description() -> &'static str {
    "Show the last 10 commands that have been entered (oldest to newest)"
}

/// Built-in history command implementation
/// Prints the retained command texts, oldest first. The current invocation
/// is recorded after printing, so the listing never shows itself.
pub fn command(
    ctx: &Context,
    _store: &SongStore,
    history: &mut HistoryLog,
    _proxy: &mut dyn ShellProxy,
) -> Outcome {
    if history.is_empty() {
        println!("No commands recorded yet");
    } else {
        for entry in history.entries() {
            println!("{entry}");
        }
    }
    record_history(ctx, history, "history");
    Outcome::NoChange
}

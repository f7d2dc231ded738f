use super::{is_back, record_history, Outcome, ShellProxy};
use tracing::warn;
use tsh_store::{HistoryLog, SongStore};
use tsh_types::Context;

pub fn description() -> &'static str {
    "Remove a song from your stored list of songs"
}

/// Built-in remove command implementation
/// Prompts for a song name and commits a store with the first matching
/// song removed. Re-prompts while nothing matches.
pub fn command(
    ctx: &Context,
    store: &SongStore,
    history: &mut HistoryLog,
    proxy: &mut dyn ShellProxy,
) -> Outcome {
    loop {
        println!("Enter song name");
        println!("Type \"back\" to return to the main menu");
        let line = match proxy.read_line(">> ") {
            Ok(line) => line,
            Err(err) => {
                warn!("input ended during remove: {err}");
                return Outcome::NoChange;
            }
        };
        if is_back(&line) {
            return Outcome::NoChange;
        }
        match store.remove_first(&line) {
            Some(next) => {
                println!("Song removed");
                record_history(ctx, history, &format!("remove {line}"));
                return Outcome::Committed(next);
            }
            None => println!("Song not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProxy;

    fn setup() -> (tempfile::TempDir, Context, SongStore) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::in_dir(dir.path());
        let store = SongStore::load_all(["X, Y, 5", "A, B, 10", "X, Z, 3"]).unwrap();
        (dir, ctx, store)
    }

    #[test]
    fn test_remove_first_match_only() {
        let (_dir, ctx, store) = setup();
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy = ScriptedProxy::new(&["X"]);

        match command(&ctx, &store, &mut history, &mut proxy) {
            Outcome::Committed(next) => assert_eq!(next.names(), vec!["A", "X"]),
            other => panic!("expected commit, got {other:?}"),
        }
        assert_eq!(history.entries(), ["remove X"]);
    }

    #[test]
    fn test_remove_reprompts_on_miss() {
        let (_dir, ctx, store) = setup();
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy = ScriptedProxy::new(&["nope", "A"]);

        match command(&ctx, &store, &mut history, &mut proxy) {
            Outcome::Committed(next) => assert_eq!(next.names(), vec!["X", "X"]),
            other => panic!("expected commit, got {other:?}"),
        }
        assert_eq!(history.entries(), ["remove A"]);
    }

    #[test]
    fn test_remove_back_aborts() {
        let (_dir, ctx, store) = setup();
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy = ScriptedProxy::new(&["back"]);

        assert_eq!(
            command(&ctx, &store, &mut history, &mut proxy),
            Outcome::NoChange
        );
        assert!(history.is_empty());
    }
}

use super::{record_history, Outcome, ShellProxy};
use tsh_store::{HistoryLog, SongStore};
use tsh_types::Context;

pub fn description() -> &'static str {
    "Undo the most recent change made in this instance of the application"
}

/// Built-in undo command implementation
/// Restores the most recent snapshot. A popped snapshot is gone for good;
/// there is no redo.
pub fn command(
    ctx: &Context,
    _store: &SongStore,
    history: &mut HistoryLog,
    proxy: &mut dyn ShellProxy,
) -> Outcome {
    match proxy.pop_snapshot() {
        Some(snapshot) => {
            record_history(ctx, history, "undo");
            Outcome::Committed(snapshot)
        }
        None => {
            println!(
                "Sorry, no changes have been recorded yet in this instance of the application"
            );
            Outcome::NoChange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProxy;
    use tsh_store::Song;

    #[test]
    fn test_undo_restores_latest_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::in_dir(dir.path());
        let older = SongStore::new();
        let newer = older.append(Song::new("A", "B", 1));
        let live = newer.append(Song::new("C", "D", 2));
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy =
            ScriptedProxy::with_snapshots(&[], vec![older.clone(), newer.clone()]);

        match command(&ctx, &live, &mut history, &mut proxy) {
            Outcome::Committed(restored) => assert_eq!(restored, newer),
            other => panic!("expected commit, got {other:?}"),
        }
        assert_eq!(history.entries(), ["undo"]);
        assert_eq!(proxy.snapshots.len(), 1);
    }

    #[test]
    fn test_undo_with_no_snapshots_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::in_dir(dir.path());
        let store = SongStore::new();
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy = ScriptedProxy::new(&[]);

        assert_eq!(
            command(&ctx, &store, &mut history, &mut proxy),
            Outcome::NoChange
        );
        // a refused undo is not history-worthy
        assert!(history.is_empty());
    }
}

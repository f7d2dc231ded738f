use super::{record_history, Outcome, ShellProxy};
use tsh_store::{HistoryLog, SongStore};
use tsh_types::Context;

/// Built-in help command implementation
/// Displays a list of all available commands with their descriptions
pub fn command(
    ctx: &Context,
    _store: &SongStore,
    history: &mut HistoryLog,
    _proxy: &mut dyn ShellProxy,
) -> Outcome {
    let commands = vec![
        ("all_songs", super::all_songs::description()),
        ("plays_over", super::plays_over::description()),
        ("add", super::add::description()),
        ("remove", super::remove::description()),
        ("update", super::update::description()),
        ("undo", super::undo::description()),
        ("history", super::history::description()),
        ("debug", super::debug::description()),
        ("help", "Show this command list"),
        ("exit", "Exit the shell"),
    ];

    for (cmd, description) in commands {
        println!("{cmd:<12} {description}");
    }
    record_history(ctx, history, "help");
    Outcome::NoChange
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProxy;

    #[test]
    fn test_help_records_history() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::in_dir(dir.path());
        let store = SongStore::new();
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy = ScriptedProxy::new(&[]);

        assert_eq!(
            command(&ctx, &store, &mut history, &mut proxy),
            Outcome::NoChange
        );
        assert_eq!(history.entries(), ["help"]);
    }
}

use super::{is_back, record_history, Outcome, ShellProxy};
use tracing::warn;
use tsh_store::{HistoryLog, Song, SongStore};
use tsh_types::{Context, TshError};

pub fn description() -> &'static str {
    "Update the details of a song already stored in the application"
}

/// Built-in update command implementation
/// Two-phase sub-flow: locate a song by its current name, then read the
/// full new details and replace the record wholesale. `back` aborts either
/// phase without touching the store.
pub fn command(
    ctx: &Context,
    store: &SongStore,
    history: &mut HistoryLog,
    proxy: &mut dyn ShellProxy,
) -> Outcome {
    let index = loop {
        println!("Enter the current name of the song that you wish to update");
        println!("Type \"back\" to return to the main menu");
        let line = match proxy.read_line(">> ") {
            Ok(line) => line,
            Err(err) => {
                warn!("input ended during update: {err}");
                return Outcome::NoChange;
            }
        };
        if is_back(&line) {
            return Outcome::NoChange;
        }
        match store.find_by_name(&line) {
            Some(index) => {
                println!("Song found!");
                break index;
            }
            None => println!("Song not found"),
        }
    };

    loop {
        println!("Enter the new details for the song in following format: name, artist, plays");
        println!("Type \"back\" to return to the main menu");
        let line = match proxy.read_line(">> ") {
            Ok(line) => line,
            Err(err) => {
                warn!("input ended during update: {err}");
                return Outcome::NoChange;
            }
        };
        if is_back(&line) {
            return Outcome::NoChange;
        }
        match Song::parse(&line) {
            Ok(song) => {
                record_history(ctx, history, &format!("update {line}"));
                return Outcome::Committed(store.replace_at(index, song));
            }
            Err(TshError::Format(_)) => println!(
                "Sorry, it appears you have entered the details in the incorrect format. Please ensure that you have written it as shown in the example format"
            ),
            Err(TshError::Plays(_)) => println!(
                "Sorry, it appears you have entered an invalid number for the play count. Please ensure you enter a positive whole number"
            ),
            Err(err) => warn!("unexpected parse failure: {err}"),
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
        let store = SongStore::load_all(["X, Y, 5", "A, B, 10"]).unwrap();
        (dir, ctx, store)
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let (_dir, ctx, store) = setup();
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy = ScriptedProxy::new(&["A", "New Name, New Artist, 99"]);

        match command(&ctx, &store, &mut history, &mut proxy) {
            Outcome::Committed(next) => {
                assert_eq!(next.names(), vec!["X", "New Name"]);
                assert_eq!(next.songs()[1].artist(), "New Artist");
                assert_eq!(next.songs()[1].plays(), 99);
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert_eq!(history.entries(), ["update New Name, New Artist, 99"]);
    }

    #[test]
    fn test_update_reprompts_through_both_phases() {
        let (_dir, ctx, store) = setup();
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy = ScriptedProxy::new(&["missing", "X", "oops", "X, Y, 6"]);

        match command(&ctx, &store, &mut history, &mut proxy) {
            Outcome::Committed(next) => assert_eq!(next.songs()[0].plays(), 6),
            other => panic!("expected commit, got {other:?}"),
        }
    }

    #[test]
    fn test_update_back_in_second_phase_aborts() {
        let (_dir, ctx, store) = setup();
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy = ScriptedProxy::new(&["X", "back"]);

        assert_eq!(
            command(&ctx, &store, &mut history, &mut proxy),
            Outcome::NoChange
        );
        assert!(history.is_empty());
    }
}

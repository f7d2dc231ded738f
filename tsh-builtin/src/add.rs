use super::{is_back, record_history, Outcome, ShellProxy};
use tracing::warn;
use tsh_store::{HistoryLog, Song, SongStore};
use tsh_types::{Context, TshError};

pub fn description() -> &'static str {
    "Add a new song to your stored list of songs"
}

/// Built-in add command implementation
/// Prompts for full song details and commits a store with the new song
/// appended. Partial input never reaches the store.
pub fn command(
    ctx: &Context,
    store: &SongStore,
    history: &mut HistoryLog,
    proxy: &mut dyn ShellProxy,
) -> Outcome {
    loop {
        println!("Enter song details in following format: name, artist, plays");
        println!("Type \"back\" to return to the main menu");
        let line = match proxy.read_line(">> ") {
            Ok(line) => line,
            Err(err) => {
                warn!("input ended during add: {err}");
                return Outcome::NoChange;
            }
        };
        if is_back(&line) {
            return Outcome::NoChange;
        }
        match Song::parse(&line) {
            Ok(song) => {
                println!("Song added");
                record_history(ctx, history, &format!("add {line}"));
                return Outcome::Committed(store.append(song));
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

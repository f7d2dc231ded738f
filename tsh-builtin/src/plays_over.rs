use super::{is_back, record_history, Outcome, ShellProxy};
use tracing::warn;
use tsh_store::{HistoryLog, SongStore};
use tsh_types::Context;

pub fn description() -> &'static str {
    "Narrow the list down to songs with more than a given play count"
}

/// Built-in plays_over command implementation
/// Prompts for a minimum play count, then prints the names of all songs
/// strictly above it.
pub fn command(
    ctx: &Context,
    store: &SongStore,
    history: &mut HistoryLog,
    proxy: &mut dyn ShellProxy,
) -> Outcome {
    let min = loop {
        println!("Please enter your desired minimum play count");
        println!("Type \"back\" to return to the main menu");
        let line = match proxy.read_line(">> ") {
            Ok(line) => line,
            Err(err) => {
                warn!("input ended during plays_over: {err}");
                return Outcome::NoChange;
            }
        };
        if is_back(&line) {
            return Outcome::NoChange;
        }
        match line.trim().parse::<u64>() {
            Ok(min) => break min,
            Err(_) => println!(
                "Sorry, it appears you have entered an invalid number. Please ensure you enter a positive whole number"
            ),
        }
    };

    let matches = store.filter_above(min);
    if matches.is_empty() {
        println!("Sorry, there are no songs stored above your desired minimum plays");
    } else {
        for song in matches {
            println!("{}", song.name());
        }
    }
    record_history(ctx, history, &format!("plays_over {min}"));
    Outcome::NoChange
}

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::warn;
use tsh_store::{HistoryLog, SongStore};
use tsh_types::{Context, TshResult};

// Builtin command modules
mod add;
mod all_songs;
mod debug;
mod help;
mod history;
mod plays_over;
mod remove;
mod undo;
mod update;

/// Trait that provides an interface for builtin commands to interact with
/// the shell without direct coupling to the repl.
pub trait ShellProxy {
    /// Initiates shell exit.
    fn exit_shell(&mut self);

    /// Reads one line of input for an interactive sub-flow prompt. The
    /// returned line has its trailing newline stripped but is otherwise
    /// untouched.
    fn read_line(&mut self, prompt: &str) -> TshResult<String>;

    /// Removes and returns the most recent store snapshot, if any.
    fn pop_snapshot(&mut self) -> Option<SongStore>;
}

/// Result of dispatching one command token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Read-only command completed; nothing to persist beyond history.
    NoChange,
    /// The store changed; the repl persists it and records an undo
    /// snapshot.
    Committed(SongStore),
    /// The user asked to leave; the loop must stop.
    Exit,
    /// Unknown token; reported to the user, no state change, no history
    /// entry.
    Unrecognized,
}

/// Type alias for builtin command function signature
/// All builtin commands must conform to this signature
pub type BuiltinCommand = fn(
    ctx: &Context,
    store: &SongStore,
    history: &mut HistoryLog,
    proxy: &mut dyn ShellProxy,
) -> Outcome;

/// Global registry of all builtin commands
/// Uses lazy initialization and mutex for thread-safe access
pub static BUILTIN_COMMAND: Lazy<Mutex<HashMap<&str, BuiltinCommand>>> = Lazy::new(|| {
    let mut builtin = HashMap::new();

    // Library queries
    builtin.insert("all_songs", all_songs::command as BuiltinCommand);
    builtin.insert("plays_over", plays_over::command as BuiltinCommand);

    // Library mutations
    builtin.insert("add", add::command as BuiltinCommand);
    builtin.insert("remove", remove::command as BuiltinCommand);
    builtin.insert("update", update::command as BuiltinCommand);
    builtin.insert("undo", undo::command as BuiltinCommand);

    // Shell plumbing
    builtin.insert("help", help::command as BuiltinCommand);
    builtin.insert("history", history::command as BuiltinCommand);
    builtin.insert("debug", debug::command as BuiltinCommand);
    builtin.insert("exit", exit as BuiltinCommand);

    Mutex::new(builtin)
});

/// Retrieves a builtin command function by name
/// Returns None if the command is not found
pub fn get_command(name: &str) -> Option<BuiltinCommand> {
    if let Ok(builtin) = BUILTIN_COMMAND.lock() {
        builtin.get(name).copied()
    } else {
        None
    }
}

/// Normalizes the input token and routes it to its handler.
pub fn dispatch(
    input: &str,
    ctx: &Context,
    store: &SongStore,
    history: &mut HistoryLog,
    proxy: &mut dyn ShellProxy,
) -> Outcome {
    let token = input.trim().to_lowercase();
    match get_command(&token) {
        Some(command) => command(ctx, store, history, proxy),
        None => Outcome::Unrecognized,
    }
}

/// Built-in exit command implementation
/// Initiates graceful shell termination
pub fn exit(
    ctx: &Context,
    _store: &SongStore,
    history: &mut HistoryLog,
    proxy: &mut dyn ShellProxy,
) -> Outcome {
    tracing::debug!("exit command called - leaving the main loop");
    record_history(ctx, history, "exit");
    proxy.exit_shell();
    Outcome::Exit
}

/// Appends a command text to the history log and persists it immediately.
/// A write failure is logged and swallowed; a persistence problem must
/// never kill the command loop.
pub(crate) fn record_history(ctx: &Context, history: &mut HistoryLog, text: &str) {
    history.record(text);
    if let Err(err) = history.save(&ctx.history_path) {
        warn!("failed to save command history: {err}");
    }
}

/// Checks an input line for the sentinel that aborts a sub-flow.
pub(crate) fn is_back(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("back")
}

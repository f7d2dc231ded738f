use std::path::{Path, PathBuf};
use thiserror::Error;

/// How many of the most recent command texts the history file retains.
pub const HISTORY_CUTOFF: usize = 10;

/// How many store snapshots are retained for undo. Snapshots live in memory
/// only and do not survive a restart.
pub const UNDO_CUTOFF: usize = 10;

/// How many completion codes the debug file retains.
pub const DEBUG_CUTOFF: usize = 100;

/// Tune shell specific error types
#[derive(Error, Debug)]
pub enum TshError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected 3 fields, found {0}")]
    Format(usize),

    #[error("invalid play count: {0}")]
    Plays(String),

    #[error("song not found: {0}")]
    NotFound(String),

    #[error("unrecognized command: {0}")]
    Unrecognized(String),
}

pub type TshResult<T> = std::result::Result<T, TshError>;

/// Completion code appended to the debug file after every loop iteration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CompletionCode {
    /// The user asked to leave and the loop stopped.
    Exit,
    /// The command finished without touching the song file.
    NoChange,
    /// The command committed a new store to the song file.
    Mutated,
}

impl CompletionCode {
    pub fn as_digit(self) -> u8 {
        match self {
            CompletionCode::Exit => 0,
            CompletionCode::NoChange => 1,
            CompletionCode::Mutated => 2,
        }
    }
}

/// Everything a command needs to know about its surroundings: where the
/// backing files live and how much bounded state to keep. Threaded through
/// dispatch explicitly so nothing relies on process-wide mutable state.
#[derive(Clone, Debug)]
pub struct Context {
    pub songs_path: PathBuf,
    pub history_path: PathBuf,
    pub debug_path: PathBuf,
    pub history_cutoff: usize,
    pub undo_cutoff: usize,
    pub debug_cutoff: usize,
}

impl Context {
    pub fn new() -> Self {
        Self::in_dir(Path::new("."))
    }

    /// Place all backing files under `dir`. Tests point this at a temp dir.
    pub fn in_dir(dir: &Path) -> Self {
        Context {
            songs_path: dir.join("songs.txt"),
            history_path: dir.join("command_history.txt"),
            debug_path: dir.join("debug.txt"),
            history_cutoff: HISTORY_CUTOFF,
            undo_cutoff: UNDO_CUTOFF,
            debug_cutoff: DEBUG_CUTOFF,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

use crate::shell::Shell;
use anyhow::{Context as _, Result};
use tracing::{debug, warn};
use tsh_builtin::{dispatch, Outcome, ShellProxy};
use tsh_store::{
    append_completion_code, ensure_file, load_songs, save_songs, HistoryLog, SongStore,
};
use tsh_types::{CompletionCode, Context};

/// The interactive read-dispatch-persist loop.
///
/// State is deliberately re-read from disk at the top of every iteration
/// rather than cached in memory, so a crash mid-command loses at most the
/// command that was in flight. Only the undo stack lives across turns.
pub struct Repl<'a> {
    pub shell: &'a mut Shell,
    ctx: Context,
}

impl<'a> Repl<'a> {
    pub fn new(shell: &'a mut Shell, ctx: Context) -> Self {
        Repl { shell, ctx }
    }

    /// Create the backing files on first run, with a notice for the
    /// user-facing ones.
    fn ensure_files(&self) -> Result<()> {
        if ensure_file(&self.ctx.songs_path)? {
            println!(
                "--Notice-- Sorry, we weren't able to locate the song list file on your device. A new file has been created for you"
            );
        }
        if ensure_file(&self.ctx.history_path)? {
            println!(
                "--Notice-- Sorry, we weren't able to locate the command history file on your device. A new file has been created for you"
            );
        }
        ensure_file(&self.ctx.debug_path)?;
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        self.ensure_files()?;
        loop {
            let code = self.run_once()?;
            if let Err(err) =
                append_completion_code(&self.ctx.debug_path, code, self.ctx.debug_cutoff)
            {
                warn!("failed to update debug file: {err}");
            }
            if code == CompletionCode::Exit || self.shell.exited {
                break;
            }
        }
        Ok(())
    }

    /// One full command cycle: reload state from disk, read a command,
    /// dispatch it, and persist whatever the outcome requires.
    fn run_once(&mut self) -> Result<CompletionCode> {
        let store = load_songs(&self.ctx.songs_path).context("failed to load song file")?;
        let mut history = HistoryLog::load(&self.ctx.history_path, self.ctx.history_cutoff)
            .context("failed to load history file")?;

        println!();
        println!("Main Menu");
        println!("Type \"help\" for command list");
        let input = match self.shell.read_line(">> ") {
            Ok(input) => input,
            Err(err) => {
                // stdin closing counts as leaving
                debug!("input ended: {err}");
                return Ok(CompletionCode::Exit);
            }
        };

        let prev = store.clone();
        let depth_before = self.shell.undo.depth();
        let outcome = dispatch(&input, &self.ctx, &store, &mut history, self.shell);
        Ok(apply_outcome(
            self.shell,
            &self.ctx,
            prev,
            depth_before,
            outcome,
        ))
    }
}

/// Applies a dispatch outcome: decides whether to take an undo snapshot,
/// persists the committed store, and reports the completion code for the
/// debug log.
fn apply_outcome(
    shell: &mut Shell,
    ctx: &Context,
    prev: SongStore,
    depth_before: usize,
    outcome: Outcome,
) -> CompletionCode {
    match outcome {
        Outcome::NoChange => CompletionCode::NoChange,
        Outcome::Unrecognized => {
            println!(
                "Sorry, I didn't recognise that command. Please ensure that everything is spelled as shown in the \"help\" menu"
            );
            CompletionCode::NoChange
        }
        Outcome::Exit => CompletionCode::Exit,
        Outcome::Committed(next) => {
            // A command that popped the stack (undo) must not push the
            // state it replaced, or undo would turn into redo.
            if shell.undo.depth() == depth_before && next != prev {
                shell.undo.push(prev);
            }
            if let Err(err) = save_songs(&next, &ctx.songs_path) {
                warn!("failed to save song file: {err}");
                println!("Sorry, your changes could not be saved");
            }
            CompletionCode::Mutated
        }
    }
}

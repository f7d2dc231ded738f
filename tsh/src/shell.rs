use std::io::{self, BufRead, Write};
use tracing::debug;
use tsh_builtin::ShellProxy;
use tsh_store::{SongStore, UndoStack};
use tsh_types::{Context, TshResult};

pub const APP_NAME: &str = "tsh";

/// Interactive shell state that lives across loop iterations: the
/// in-memory undo stack and the exit flag. Everything else is reloaded
/// from disk at the top of every turn.
pub struct Shell {
    pub undo: UndoStack,
    pub exited: bool,
}

impl Shell {
    pub fn new(ctx: &Context) -> Self {
        Shell {
            undo: UndoStack::new(ctx.undo_cutoff),
            exited: false,
        }
    }
}

impl ShellProxy for Shell {
    fn exit_shell(&mut self) {
        debug!("exit requested");
        self.exited = true;
    }

    fn read_line(&mut self, prompt: &str) -> TshResult<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn pop_snapshot(&mut self) -> Option<SongStore> {
        self.undo.pop()
    }
}

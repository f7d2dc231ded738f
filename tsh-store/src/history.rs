use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tsh_types::TshResult;

/// Bounded FIFO of past command texts, oldest first.
///
/// The log is persisted after every recorded command and reloaded at the
/// top of every loop iteration, so the file is the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<String>,
    cutoff: usize,
}

impl HistoryLog {
    pub fn new(cutoff: usize) -> Self {
        HistoryLog {
            entries: Vec::new(),
            cutoff,
        }
    }

    /// Read the persisted log. An absent or empty file yields an empty log.
    /// Entries beyond the cutoff are kept as-is until the next `record`
    /// trims them, matching how the file is only rewritten on mutation.
    pub fn load(path: &Path, cutoff: usize) -> TshResult<Self> {
        let entries = match fs::read_to_string(path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(HistoryLog { entries, cutoff })
    }

    /// Append a command text, then evict from the front until the log is
    /// within the cutoff. A hand-edited file can be over the cutoff by more
    /// than one entry, so eviction loops rather than trimming once.
    pub fn record(&mut self, command: &str) {
        self.entries.push(command.to_string());
        while self.entries.len() > self.cutoff {
            self.entries.remove(0);
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite the history file: newline-joined lines, no trailing
    /// newline after the last one.
    pub fn save(&self, path: &Path) -> TshResult<()> {
        fs::write(path, self.entries.join("\n"))?;
        Ok(())
    }
}

use crate::store::SongStore;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use tsh_types::{CompletionCode, TshResult};

/// Create the file if it is absent. Returns true when a new file was
/// created, so the caller can show a first-run notice.
pub fn ensure_file(path: &Path) -> TshResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, "")?;
    debug!("created {}", path.display());
    Ok(true)
}

/// Read the whole song file into a store. An absent or empty file means an
/// empty store; the first malformed line fails the load.
pub fn load_songs(path: &Path) -> TshResult<SongStore> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };
    SongStore::load_all(content.lines())
}

/// Overwrite the song file with the store's line form.
pub fn save_songs(store: &SongStore, path: &Path) -> TshResult<()> {
    fs::write(path, store.to_file_string())?;
    Ok(())
}

/// Append one completion code to the debug file, keeping at most `cutoff`
/// lines. Unlike the song and history files, every line here is
/// newline-terminated, including the last.
pub fn append_completion_code(
    path: &Path,
    code: CompletionCode,
    cutoff: usize,
) -> TshResult<()> {
    let mut lines: Vec<String> = match fs::read_to_string(path) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
        Err(err) => return Err(err.into()),
    };
    lines.push(code.as_digit().to_string());
    while lines.len() > cutoff {
        lines.remove(0);
    }
    let mut out = String::with_capacity(lines.len() * 2);
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

/// Read back the recorded completion codes, oldest first.
pub fn read_debug_codes(path: &Path) -> TshResult<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content.lines().map(str::to_string).collect()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

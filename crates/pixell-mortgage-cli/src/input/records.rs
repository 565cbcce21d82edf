use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read raw mortgage records (one per line) from a file.
///
/// A missing or unreadable source is a batch-level failure, reported
/// distinctly from any per-record validation error.
pub fn read_file(path: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Records file not found: {path}").into());
    }
    if !p.is_file() {
        return Err(format!("Not a file: {path}").into());
    }

    let contents =
        fs::read_to_string(p).map_err(|e| format!("Failed to read '{path}': {e}"))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Attempt to read records from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive).
pub fn read_stdin() -> Result<Option<Vec<String>>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    if buffer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(buffer.lines().map(str::to_string).collect()))
}

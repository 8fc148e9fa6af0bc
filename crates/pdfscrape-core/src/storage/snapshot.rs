//! Local copy of the scraped page.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Removes a snapshot left by a previous run. Returns `true` if one was removed.
pub fn remove_stale_snapshot(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path).with_context(|| format!("remove {}", path.display()))?;
    Ok(true)
}

/// Appends the page body plus a trailing newline to `path`, creating it if needed.
pub fn write_snapshot(path: &Path, body: &str) -> Result<()> {
    let mut f = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;
    f.write_all(body.as_bytes())
        .and_then(|()| f.write_all(b"\n"))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

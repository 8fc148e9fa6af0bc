//! Output directory, page snapshot and PDF file lifecycle.
//!
//! Accepted bodies are written to a `.part` file, synced, then renamed into
//! place, so an interrupted write never leaves a file under the final name.

mod commit;
mod snapshot;

pub use commit::commit_file;
pub use snapshot::{remove_stale_snapshot, write_snapshot};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Permissions for a newly created output directory (owner rwx, others rx).
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Path for the temp file: appends `.part` to the final path (e.g. `file.pdf` → `file.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// True if `path` exists and is a regular file (directories don't count).
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Creates `dir` (and missing parents) if it is not already a directory.
/// Returns `true` when something was created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
        .create(dir)
        .with_context(|| format!("create output directory {}", dir.display()))?;
    Ok(true)
}

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::temp_path;

/// Writes `bytes` to `final_path` via a synced `.part` file and a rename.
/// On failure the `.part` file is removed and `final_path` is left untouched.
pub fn commit_file(final_path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = temp_path(final_path);
    let result = write_synced(&tmp, bytes).and_then(|()| {
        std::fs::rename(&tmp, final_path).with_context(|| {
            format!("rename {} -> {}", tmp.display(), final_path.display())
        })
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut f = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("create {}", path.display()))?;
    f.write_all(bytes)
        .with_context(|| format!("write {}", path.display()))?;
    f.sync_all()
        .with_context(|| format!("sync {}", path.display()))?;
    Ok(())
}

//! Whole-value file persistence
//!
//! Everything the game stores is small enough to read and write in one go.
//! Writes go to a sibling temp file first and are renamed over the target, so
//! a crash mid-write leaves the previous value intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read an entire file as UTF-8 text
pub fn read_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Replace the contents of `path` with `contents` (tmp → rename)
pub fn write_text_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

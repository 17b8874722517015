// src/writer.rs
//! Atomic JSON file output (temp file in the same directory, then rename).

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, TallyError};

/// Writes `value` to `path` as two-space indented JSON plus a trailing newline.
///
/// The payload goes to a temporary file next to `path`, which is flushed,
/// synced, and renamed over the destination. If anything fails before the
/// rename the temporary file is removed and `path` is left as it was.
///
/// # Errors
/// Returns error if the directory cannot be created, serialization fails,
/// or any write, sync, or rename fails.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(TallyError::io(parent))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            TallyError::io(path)(io::Error::new(
                io::ErrorKind::InvalidInput,
                "destination has no file name",
            ))
        })?;

    let temp = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(TallyError::io(parent))?;

    let mut out = BufWriter::new(temp);
    serde_json::to_writer_pretty(&mut out, value).map_err(|source| TallyError::Serialize {
        source,
        path: path.to_path_buf(),
    })?;
    out.write_all(b"\n").map_err(TallyError::io(path))?;
    let temp = out
        .into_inner()
        .map_err(|e| TallyError::io(path)(e.into_error()))?;
    temp.as_file().sync_all().map_err(TallyError::io(path))?;

    temp.persist(path)
        .map_err(|e| TallyError::io(path)(e.error))?;
    Ok(())
}

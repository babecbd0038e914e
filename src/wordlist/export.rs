//! Wordlist serialization

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ForgeError, Result};

/// Write candidates one per line, replacing any existing content.
///
/// Symlinks are followed so the file they point at receives the list.
/// Regular files are replaced through a uniquely named temporary file in the
/// same directory, so the destination holds either the old content or the
/// complete new list. Existing non-regular targets such as `/dev/stdout` or
/// a FIFO are written in place.
pub fn write_wordlist(path: &Path, words: &BTreeSet<String>) -> Result<()> {
    let target = resolve_target(path);

    match fs::metadata(&target) {
        Ok(meta) if !meta.is_file() && !meta.is_dir() => {
            let file = File::create(&target).map_err(|e| ForgeError::io_at(&e, path))?;
            write_lines(BufWriter::new(file), words).map_err(|e| ForgeError::io_at(&e, path))
        }
        _ => replace_file(&target, words).map_err(|e| ForgeError::io_at(&e, path)),
    }
}

/// Follow symlinks on an existing destination; new paths are used as given
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn replace_file(target: &Path, words: &BTreeSet<String>) -> std::io::Result<()> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropped (and removed) on any early return before persist.
    let mut tmp = NamedTempFile::new_in(parent)?;
    if let Ok(meta) = fs::metadata(target) {
        fs::set_permissions(tmp.path(), meta.permissions())?;
    }

    write_lines(BufWriter::new(tmp.as_file_mut()), words)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

fn write_lines<W: Write>(mut writer: BufWriter<W>, words: &BTreeSet<String>) -> std::io::Result<()> {
    for word in words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

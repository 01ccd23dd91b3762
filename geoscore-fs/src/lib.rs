//! Capability-scoped filesystem helpers for GeoScore tooling.
//!
//! Request files and the score cache arrive as UTF-8 paths on the command
//! line. Each helper opens the nearest ambient directory for the path once
//! and performs the operation relative to it through `cap-std`.
#![forbid(unsafe_code)]

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Report whether `path` names a regular file.
///
/// A missing file or parent directory surfaces as
/// [`io::ErrorKind::NotFound`] so callers can tell "absent" from "not a
/// file".
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?;
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new(""));
    let (dir, relative) = anchor(parent)?;
    dir.metadata(relative.join(name)).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// Bare file names and paths directly under the filesystem root need no
/// work.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (dir, relative) = anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    dir.create_dir_all(&relative)
}

/// Split `path` into an ambient directory handle for its root (or the
/// current directory when relative) and the remainder below it.
fn anchor(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut base = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(prefix) => base.push(prefix.as_str()),
            Utf8Component::RootDir => base.push(std::path::MAIN_SEPARATOR_STR),
            Utf8Component::CurDir => {}
            other => relative.push(other.as_str()),
        }
    }
    if base.as_str().is_empty() {
        base.push(".");
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((dir, relative))
}

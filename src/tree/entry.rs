//! Directory entries classified during a traversal

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Folder or file, derived once per entry from the directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    pub fn is_folder(self) -> bool {
        matches!(self, EntryKind::Folder)
    }

    /// Classify from a listing's file type. Symlinks are never followed,
    /// so a link to a directory is a leaf.
    pub fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Folder
        } else {
            EntryKind::File
        }
    }
}

/// A child discovered while expanding a directory.
#[derive(Debug, Clone)]
pub struct ChildEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Display name for a path, falling back to the path itself for `/` or `..`.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Absolute form of `path` taken relative to `cwd`, with `.` and `..`
/// removed lexically. Symlinks are left unresolved so the root keeps the
/// name it was given.
pub fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in cwd.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

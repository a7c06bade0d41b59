//! Directory listing shared by the streaming renderer and the JSON builder.
//!
//! A listing filters, classifies, partitions and sorts the immediate children
//! of one directory. Hidden and excluded entries are removed before
//! partitioning, so they never influence which child is last or whether a
//! folder/file separator is needed.

use std::fs;
use std::io;
use std::path::Path;

use super::entry::{ChildEntry, EntryKind};
use super::filter::EntryFilter;

/// Children of one directory: folders first, then files, each sorted by name.
#[derive(Debug, Default)]
pub struct Listing {
    pub folders: Vec<ChildEntry>,
    pub files: Vec<ChildEntry>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A separator line goes between the groups only when both are present.
    pub fn needs_separator(&self) -> bool {
        !self.folders.is_empty() && !self.files.is_empty()
    }

    /// Consume into render order.
    pub fn into_ordered(self) -> impl Iterator<Item = ChildEntry> {
        self.folders.into_iter().chain(self.files)
    }
}

/// Read, filter, partition and sort the children of `path`.
///
/// Errors from opening the directory are returned to the caller. Errors on
/// individual entries (vanished mid-listing) drop that entry.
pub fn read_listing(path: &Path, filter: &EntryFilter<'_>) -> io::Result<Listing> {
    let mut listing = Listing::default();

    for entry in fs::read_dir(path)? {
        let Ok(entry) = entry else { continue };
        let name = entry.file_name().to_string_lossy().to_string();
        let entry_path = entry.path();

        if !filter.is_visible(&name, &entry_path) {
            continue;
        }

        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let kind = EntryKind::from_file_type(file_type);
        let child = ChildEntry {
            name,
            path: entry_path,
            kind,
        };
        match kind {
            EntryKind::Folder => listing.folders.push(child),
            EntryKind::File => listing.files.push(child),
        }
    }

    // String order is UTF-8 byte order, which matches codepoint order.
    listing.folders.sort_by(|a, b| a.name.cmp(&b.name));
    listing.files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(listing)
}

/// Source of directory listings for a renderer.
pub trait DirLister {
    fn list(&self, path: &Path, filter: &EntryFilter<'_>) -> io::Result<Listing>;
}

/// Lists directories from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path, filter: &EntryFilter<'_>) -> io::Result<Listing> {
        read_listing(path, filter)
    }
}

/// Prefix handed to the children of a node.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}

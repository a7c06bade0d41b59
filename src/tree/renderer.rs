//! TreeRenderer - depth-first, pre-order tree rendering to a line sink

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::GroveError;

use super::config::TraversalConfig;
use super::entry::{EntryKind, entry_name};
use super::filter::EntryFilter;
use super::json_types::TreeNode;
use super::traversal::{DirLister, FsLister, child_prefix};

/// Connector for a sibling that is followed by more siblings.
pub const BRANCH: &str = "├── ";
/// Connector for the last sibling at a level (and for the root).
pub const CORNER: &str = "└── ";
/// Bare line drawn between the folder group and the file group.
pub const SEPARATOR: &str = "│";
/// Placeholder child shown for a directory that could not be listed.
pub const DENIED_LABEL: &str = "[Permission Denied]";

pub fn connector(is_last: bool) -> &'static str {
    if is_last { CORNER } else { BRANCH }
}

/// Counters accumulated over one render. The root is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub dirs: usize,
    pub files: usize,
    pub denied: usize,
}

/// Sink for rendered lines, called in depth-first pre-order.
pub trait TreeOutput {
    /// One entry: `prefix + connector + name`.
    fn output_entry(
        &mut self,
        prefix: &str,
        name: &str,
        kind: EntryKind,
        is_last: bool,
    ) -> io::Result<()>;

    /// Folder/file separator: `prefix + "│"`.
    fn output_separator(&mut self, prefix: &str) -> io::Result<()>;

    /// Unlistable directory placeholder: `prefix + "└── [Permission Denied]"`.
    fn output_denied(&mut self, prefix: &str) -> io::Result<()>;

    fn finish(&mut self, _stats: &RenderStats) -> io::Result<()> {
        Ok(())
    }
}

/// Per-call recursion state. The config lives on the renderer and is shared.
#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
    path: &'a Path,
    prefix: &'a str,
    is_last: bool,
    depth: usize,
}

/// Renders a directory tree according to a [`TraversalConfig`].
pub struct TreeRenderer<L: DirLister = FsLister> {
    config: TraversalConfig,
    lister: L,
}

impl TreeRenderer<FsLister> {
    pub fn new(config: TraversalConfig) -> Self {
        Self::with_lister(config, FsLister)
    }
}

impl<L: DirLister> TreeRenderer<L> {
    /// Renderer reading directories through `lister` instead of the filesystem.
    pub fn with_lister(config: TraversalConfig, lister: L) -> Self {
        Self { config, lister }
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Render into memory and return the lines.
    pub fn render(&self, root: &Path) -> Vec<String> {
        let mut lines = crate::output::LineCollector::new();
        match self.render_to(root, &mut lines) {
            Ok(_) => lines.into_lines(),
            Err(e) => {
                warn!(error = %e, "line collection failed");
                Vec::new()
            }
        }
    }

    /// Stream the tree rooted at `root` into `output`.
    ///
    /// Returns `None` without emitting anything when the root cannot be
    /// stat'ed. A hidden or excluded root yields `Some` with no lines.
    pub fn render_to<O: TreeOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> io::Result<Option<RenderStats>> {
        let Some(kind) = root_kind(root) else {
            return Ok(None);
        };

        let mut stats = RenderStats::default();
        let name = entry_name(root);
        if EntryFilter::new(&self.config).is_visible(&name, root) {
            let frame = Frame {
                path: root,
                prefix: "",
                is_last: true,
                depth: 0,
            };
            self.render_frame(frame, &name, kind, output, &mut stats)?;
        } else {
            debug!(path = %root.display(), "root is hidden or excluded");
        }

        output.finish(&stats)?;
        Ok(Some(stats))
    }

    fn render_frame<O: TreeOutput>(
        &self,
        frame: Frame<'_>,
        name: &str,
        kind: EntryKind,
        output: &mut O,
        stats: &mut RenderStats,
    ) -> io::Result<()> {
        output.output_entry(frame.prefix, name, kind, frame.is_last)?;
        if frame.depth > 0 {
            match kind {
                EntryKind::Folder => stats.dirs += 1,
                EntryKind::File => stats.files += 1,
            }
        }

        if !kind.is_folder() || self.config.at_max_depth(frame.depth) {
            return Ok(());
        }

        let prefix = child_prefix(frame.prefix, frame.is_last);
        let filter = EntryFilter::new(&self.config);
        let listing = match self.lister.list(frame.path, &filter) {
            Ok(listing) => listing,
            Err(e) => {
                let err = GroveError::from_io(frame.path, e);
                warn!(error = %err, "cannot list directory");
                stats.denied += 1;
                return output.output_denied(&prefix);
            }
        };
        debug!(
            path = %frame.path.display(),
            depth = frame.depth,
            folders = listing.folders.len(),
            files = listing.files.len(),
            "expanding directory"
        );

        let folder_count = listing.folders.len();
        let needs_separator = listing.needs_separator();
        let total = listing.len();

        for (i, child) in listing.into_ordered().enumerate() {
            if needs_separator && i == folder_count && !prefix.is_empty() {
                output.output_separator(&prefix)?;
            }
            let child_frame = Frame {
                path: &child.path,
                prefix: &prefix,
                is_last: i == total - 1,
                depth: frame.depth + 1,
            };
            self.render_frame(child_frame, &child.name, child.kind, output, stats)?;
        }

        Ok(())
    }

    /// Build the full tree in memory for serialization.
    ///
    /// Uses the same filtering, ordering and depth rules as [`render_to`].
    ///
    /// [`render_to`]: TreeRenderer::render_to
    pub fn build(&self, root: &Path) -> Option<TreeNode> {
        let kind = root_kind(root)?;
        let name = entry_name(root);
        if !EntryFilter::new(&self.config).is_visible(&name, root) {
            return None;
        }
        Some(self.build_node(root, name, kind, 0))
    }

    fn build_node(&self, path: &Path, name: String, kind: EntryKind, depth: usize) -> TreeNode {
        if !kind.is_folder() {
            return TreeNode::File {
                name,
                path: path.to_path_buf(),
            };
        }

        let mut children = Vec::new();
        let mut permission_denied = false;

        if !self.config.at_max_depth(depth) {
            match self.lister.list(path, &EntryFilter::new(&self.config)) {
                Ok(listing) => {
                    for child in listing.into_ordered() {
                        children.push(self.build_node(&child.path, child.name, child.kind, depth + 1));
                    }
                }
                Err(e) => {
                    let err = GroveError::from_io(path, e);
                    warn!(error = %err, "cannot list directory");
                    permission_denied = true;
                }
            }
        }

        TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            children,
            permission_denied,
        }
    }
}

/// Render `root` with `config` and return the lines.
pub fn render(root: &Path, config: &TraversalConfig) -> Vec<String> {
    TreeRenderer::new(config.clone()).render(root)
}

fn root_kind(root: &Path) -> Option<EntryKind> {
    match fs::metadata(root) {
        Ok(meta) => Some(if meta.is_dir() {
            EntryKind::Folder
        } else {
            EntryKind::File
        }),
        Err(e) => {
            debug!(path = %root.display(), error = %e, "root is not accessible");
            None
        }
    }
}

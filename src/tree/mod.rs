//! Directory tree rendering
//!
//! `TreeRenderer` walks a directory depth-first and streams one line per
//! entry to a `TreeOutput` sink. It can also build the whole tree in memory
//! (`TreeRenderer::build`) for JSON output.
//!
//! Ordering: folders before files, each group sorted by name. Hidden and
//! excluded names are pruned together with everything below them.

mod config;
mod entry;
mod filter;
mod json_types;
mod renderer;
mod traversal;

pub use config::{DEFAULT_EXCLUDES, TraversalConfig, TraversalConfigBuilder, parse_exclude_list};
pub use entry::{ChildEntry, EntryKind, absolutize, entry_name};
pub use filter::{EntryFilter, is_hidden};
pub use json_types::TreeNode;
pub use renderer::{
    BRANCH, CORNER, DENIED_LABEL, RenderStats, SEPARATOR, TreeOutput, TreeRenderer, connector,
    render,
};
pub use traversal::{DirLister, FsLister, Listing, child_prefix, read_listing};

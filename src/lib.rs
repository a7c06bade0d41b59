//! Grove - a project tree visualizer with smart folder exclusion

pub mod error;
pub mod output;
pub mod prompt;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{GroveError, Result};
pub use output::{LineCollector, OutputConfig, StreamingFormatter, print_json};
pub use prompt::{PromptedConfig, prompt_for_config};
pub use tree::{
    DEFAULT_EXCLUDES, EntryKind, RenderStats, TraversalConfig, TreeNode, TreeOutput,
    TreeRenderer, render,
};

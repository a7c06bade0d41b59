//! Output configuration types

/// Configuration for console output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print a "N directories, M files" line after the tree
    pub summary: bool,
}

//! Visibility and exclusion filtering for tree entries

use std::path::Path;

use super::config::TraversalConfig;

/// Name-based filter applied identically to the root and to every listed child.
pub struct EntryFilter<'a> {
    config: &'a TraversalConfig,
}

impl<'a> EntryFilter<'a> {
    pub fn new(config: &'a TraversalConfig) -> Self {
        Self { config }
    }

    /// Check if an entry should be rendered at all.
    pub fn is_visible(&self, name: &str, path: &Path) -> bool {
        if !self.config.show_hidden() && is_hidden(name, path) {
            return false;
        }
        !self.config.is_excluded(name)
    }
}

/// Dotfiles, plus entries carrying the hidden attribute on Windows.
pub fn is_hidden(name: &str, path: &Path) -> bool {
    name.starts_with('.') || has_hidden_attribute(path)
}

#[cfg(windows)]
fn has_hidden_attribute(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    std::fs::symlink_metadata(path)
        .map(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

#[cfg(not(windows))]
fn has_hidden_attribute(_path: &Path) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotfiles_are_hidden() {
        assert!(is_hidden(".env", Path::new(".env")));
        assert!(is_hidden(".", Path::new(".")));
        assert!(!is_hidden("env.", Path::new("env.")));
        assert!(!is_hidden("src", Path::new("src")));
    }

    #[test]
    fn test_filter_respects_show_hidden() {
        let config = TraversalConfig::default();
        let filter = EntryFilter::new(&config);
        assert!(!filter.is_visible(".env", Path::new(".env")));
        assert!(filter.is_visible("src", Path::new("src")));

        let config = TraversalConfig::builder().show_hidden(true).build().unwrap();
        let filter = EntryFilter::new(&config);
        assert!(filter.is_visible(".env", Path::new(".env")));
    }

    #[test]
    fn test_exclusion_wins_over_show_hidden() {
        let config = TraversalConfig::builder().show_hidden(true).build().unwrap();
        let filter = EntryFilter::new(&config);
        assert!(!filter.is_visible(".git", Path::new(".git")));
        assert!(!filter.is_visible("node_modules", Path::new("a/b/node_modules")));
    }
}

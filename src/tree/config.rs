//! Configuration types for tree rendering

use std::collections::BTreeSet;

use crate::error::{GroveError, Result};

/// Directory names pruned unless the caller opts out.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules",
    ".vscode",
    ".git",
    "__pycache__",
    ".idea",
    "venv",
    "env",
    "dist",
    "build",
];

/// Immutable traversal policy shared by every frame of one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalConfig {
    excluded_names: BTreeSet<String>,
    show_hidden: bool,
    max_depth: Option<usize>,
}

impl TraversalConfig {
    pub fn builder() -> TraversalConfigBuilder {
        TraversalConfigBuilder::default()
    }

    pub fn excluded_names(&self) -> &BTreeSet<String> {
        &self.excluded_names
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.contains(name)
    }

    /// Whether a node at `depth` must not be expanded.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            excluded_names: default_excludes(),
            show_hidden: false,
            max_depth: None,
        }
    }
}

fn default_excludes() -> BTreeSet<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

/// Builder for [`TraversalConfig`]. Starts from the default exclusion set.
#[derive(Debug, Clone)]
pub struct TraversalConfigBuilder {
    excluded_names: BTreeSet<String>,
    show_hidden: bool,
    max_depth: Option<usize>,
}

impl Default for TraversalConfigBuilder {
    fn default() -> Self {
        Self {
            excluded_names: default_excludes(),
            show_hidden: false,
            max_depth: None,
        }
    }
}

impl TraversalConfigBuilder {
    /// Drop every exclusion collected so far, including the defaults.
    pub fn clear_excludes(mut self) -> Self {
        self.excluded_names.clear();
        self
    }

    /// Add one name to the exclusion set.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded_names.insert(name.into());
        self
    }

    pub fn excludes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    /// `Some(0)` prints only the root.
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<TraversalConfig> {
        for name in &self.excluded_names {
            if name.is_empty() {
                return Err(GroveError::InvalidConfig(
                    "exclusion names must not be empty".to_string(),
                ));
            }
            if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
                return Err(GroveError::InvalidConfig(format!(
                    "exclusion '{}' must be a single name, not a path",
                    name
                )));
            }
        }

        Ok(TraversalConfig {
            excluded_names: self.excluded_names,
            show_hidden: self.show_hidden,
            max_depth: self.max_depth,
        })
    }
}

/// Split a comma-separated exclusion list, dropping blank items.
pub fn parse_exclude_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TraversalConfig::default();
        assert!(!config.show_hidden());
        assert_eq!(config.max_depth(), None);
        assert_eq!(config.excluded_names().len(), DEFAULT_EXCLUDES.len());
        for name in DEFAULT_EXCLUDES {
            assert!(config.is_excluded(name), "{} should be excluded", name);
        }
    }

    #[test]
    fn test_builder_matches_default() {
        let built = TraversalConfig::builder().build().unwrap();
        assert_eq!(built, TraversalConfig::default());
    }

    #[test]
    fn test_builder_extends_defaults() {
        let config = TraversalConfig::builder()
            .exclude("target")
            .excludes(["coverage", "tmp"])
            .show_hidden(true)
            .max_depth(Some(3))
            .build()
            .unwrap();

        assert!(config.is_excluded("target"));
        assert!(config.is_excluded("coverage"));
        assert!(config.is_excluded("node_modules"));
        assert!(config.show_hidden());
        assert_eq!(config.max_depth(), Some(3));
    }

    #[test]
    fn test_clear_excludes() {
        let config = TraversalConfig::builder()
            .clear_excludes()
            .exclude("only")
            .build()
            .unwrap();
        assert_eq!(config.excluded_names().len(), 1);
        assert!(!config.is_excluded(".git"));
    }

    #[test]
    fn test_exclusion_is_exact() {
        let config = TraversalConfig::default();
        assert!(config.is_excluded("build"));
        assert!(!config.is_excluded("Build"));
        assert!(!config.is_excluded("builds"));
        assert!(!config.is_excluded("my_build"));
    }

    #[test]
    fn test_at_max_depth() {
        let unlimited = TraversalConfig::default();
        assert!(!unlimited.at_max_depth(1000));

        let zero = TraversalConfig::builder().max_depth(Some(0)).build().unwrap();
        assert!(zero.at_max_depth(0));

        let two = TraversalConfig::builder().max_depth(Some(2)).build().unwrap();
        assert!(!two.at_max_depth(1));
        assert!(two.at_max_depth(2));
        assert!(two.at_max_depth(3));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = TraversalConfig::builder().exclude("").build().unwrap_err();
        assert!(matches!(err, GroveError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_path_like_name() {
        let err = TraversalConfig::builder()
            .exclude("src/build")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("src/build"));
    }

    #[test]
    fn test_parse_exclude_list() {
        assert_eq!(
            parse_exclude_list("target, coverage ,,tmp"),
            vec!["target", "coverage", "tmp"]
        );
        assert!(parse_exclude_list("").is_empty());
        assert!(parse_exclude_list(" , ").is_empty());
    }
}

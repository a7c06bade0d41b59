//! JSON serialization types for tree output

use std::path::PathBuf;

use serde::Serialize;

/// TreeNode for JSON output - builds full tree in memory.
/// For console output, use `TreeRenderer::render_to` instead.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        permission_denied: bool,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let tree = TreeNode::Dir {
            name: "proj".to_string(),
            path: PathBuf::from("proj"),
            children: vec![TreeNode::File {
                name: "README.md".to_string(),
                path: PathBuf::from("proj/README.md"),
            }],
            permission_denied: false,
        };
        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(value["type"], "dir");
        assert_eq!(value["name"], "proj");
        assert_eq!(value["children"][0]["type"], "file");
        assert!(value.get("permission_denied").is_none());
    }

    #[test]
    fn test_denied_flag_serialized_when_set() {
        let tree = TreeNode::Dir {
            name: "locked".to_string(),
            path: PathBuf::from("locked"),
            children: Vec::new(),
            permission_denied: true,
        };
        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(value["permission_denied"], true);
    }
}

//! Project file tree data structures

use serde::{Deserialize, Serialize};

/// Node in the project file tree. Only folders carry children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    File {
        id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extension: Option<String>,
    },
    Folder {
        id: String,
        name: String,
        #[serde(default)]
        children: Vec<FileNode>,
    },
}

impl FileNode {
    /// Create a file node
    pub fn file(id: impl Into<String>, name: impl Into<String>, extension: Option<&str>) -> Self {
        Self::File {
            id: id.into(),
            name: name.into(),
            extension: extension.map(str::to_string),
        }
    }

    /// Create a folder node
    pub fn folder(id: impl Into<String>, name: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self::Folder {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::File { id, .. } | Self::Folder { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        match self {
            Self::File { extension, .. } => extension.as_deref(),
            Self::Folder { .. } => None,
        }
    }

    /// Name as shown in the tree, e.g. `Header.tsx`
    pub fn display_name(&self) -> String {
        match self.extension() {
            Some(ext) => format!("{}.{}", self.name(), ext),
            None => self.name().to_string(),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// Children of a folder; always empty for files
    pub fn children(&self) -> &[FileNode] {
        match self {
            Self::Folder { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    /// Find a node by ID recursively
    pub fn find_by_id(&self, id: &str) -> Option<&FileNode> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_by_id(id))
    }

    /// Visit this node and all descendants in pre-order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a FileNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// The sample project shown in the explorer
pub fn sample_project() -> Vec<FileNode> {
    vec![
        FileNode::folder(
            "1",
            "src",
            vec![
                FileNode::folder(
                    "2",
                    "components",
                    vec![
                        FileNode::file("3", "Header", Some("tsx")),
                        FileNode::file("4", "Layout", Some("tsx")),
                        FileNode::file("5", "ChatPanel", Some("tsx")),
                    ],
                ),
                FileNode::folder("6", "pages", vec![FileNode::file("7", "Index", Some("tsx"))]),
                FileNode::file("8", "App", Some("tsx")),
                FileNode::file("9", "main", Some("tsx")),
            ],
        ),
        FileNode::folder("10", "public", vec![FileNode::file("11", "favicon", Some("ico"))]),
        FileNode::file("12", "package", Some("json")),
        FileNode::file("13", "tsconfig", Some("json")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_node_creation() {
        let file = FileNode::file("f", "Header", Some("tsx"));
        assert_eq!(file.id(), "f");
        assert_eq!(file.display_name(), "Header.tsx");
        assert!(file.is_file());
        assert!(file.children().is_empty());

        let folder = FileNode::folder("d", "src", vec![file]);
        assert!(folder.is_folder());
        assert_eq!(folder.display_name(), "src");
        assert_eq!(folder.children().len(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let roots = sample_project();
        let src = &roots[0];

        assert_eq!(src.find_by_id("1").map(FileNode::name), Some("src"));
        assert_eq!(src.find_by_id("5").map(FileNode::name), Some("ChatPanel"));
        assert!(src.find_by_id("11").is_none());
        assert!(src.find_by_id("nonexistent").is_none());
    }

    #[test]
    fn test_walk_is_preorder() {
        let roots = sample_project();
        let mut ids = Vec::new();
        for root in &roots {
            root.walk(&mut |node| ids.push(node.id().to_string()));
        }
        let expected: Vec<String> = (1..=13).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_value(FileNode::file("12", "package", Some("json"))).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["extension"], "json");

        let folder: FileNode = serde_json::from_str(r#"{"type":"folder","id":"x","name":"lib"}"#).unwrap();
        assert!(folder.is_folder());
        assert!(folder.children().is_empty());
    }
}

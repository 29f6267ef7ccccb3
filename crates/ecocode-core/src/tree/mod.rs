//! File explorer state
//!
//! The tree itself is immutable; only the expanded-folder set and the
//! selected file change. [`FileTree::visible_rows`] flattens the tree into the
//! rows the explorer draws.

use crate::error::{Result, TreeError};
use crate::types::FileNode;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Horizontal indent added per nesting level, in pixels
pub const INDENT_STEP: f32 = 12.0;
/// Left padding of top-level rows, in pixels
pub const BASE_OFFSET: f32 = 8.0;

/// Folder expanded when the explorer opens
pub const DEFAULT_EXPANDED_FOLDER: &str = "1";
/// File selected when the explorer opens
pub const DEFAULT_SELECTED_FILE: &str = "3";

/// Listener notified when a file is selected
pub type SelectFileListener = Box<dyn FnMut(&FileNode) + Send>;

/// Disclosure chevron of a folder row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Down,
    Right,
}

/// Icon drawn next to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeIcon {
    FolderOpen,
    FolderClosed,
    File,
}

/// One visible row of the explorer
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub id: String,
    pub label: String,
    pub depth: usize,
    pub is_folder: bool,
    pub is_expanded: bool,
    pub is_selected: bool,
}

impl TreeRow {
    /// Chevron for folders, `None` for files
    pub fn chevron(&self) -> Option<Chevron> {
        match (self.is_folder, self.is_expanded) {
            (false, _) => None,
            (true, true) => Some(Chevron::Down),
            (true, false) => Some(Chevron::Right),
        }
    }

    pub fn icon(&self) -> TreeIcon {
        match (self.is_folder, self.is_expanded) {
            (false, _) => TreeIcon::File,
            (true, true) => TreeIcon::FolderOpen,
            (true, false) => TreeIcon::FolderClosed,
        }
    }

    /// Left padding in pixels
    pub fn indent(&self) -> f32 {
        self.depth as f32 * INDENT_STEP + BASE_OFFSET
    }
}

/// Expansion and selection state over a static project tree
pub struct FileTree {
    roots: Vec<FileNode>,
    expanded: HashSet<String>,
    selected: Option<String>,
    on_select_file: Option<SelectFileListener>,
}

impl fmt::Debug for FileTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileTree")
            .field("roots", &self.roots.len())
            .field("expanded", &self.expanded)
            .field("selected", &self.selected)
            .finish()
    }
}

impl FileTree {
    /// Create a tree with nothing expanded or selected.
    ///
    /// Fails if two nodes share an id.
    pub fn new(roots: Vec<FileNode>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut duplicate = None;
        for root in &roots {
            root.walk(&mut |node| {
                if !seen.insert(node.id()) && duplicate.is_none() {
                    duplicate = Some(node.id().to_string());
                }
            });
        }
        if let Some(id) = duplicate {
            return Err(TreeError::DuplicateId(id).into());
        }

        Ok(Self {
            roots,
            expanded: HashSet::new(),
            selected: None,
            on_select_file: None,
        })
    }

    /// The sample project with the default folder open and default file selected
    pub fn sample() -> Self {
        let mut tree = Self {
            roots: crate::types::sample_project(),
            expanded: HashSet::new(),
            selected: None,
            on_select_file: None,
        };
        tree.expanded.insert(DEFAULT_EXPANDED_FOLDER.to_string());
        tree.selected = Some(DEFAULT_SELECTED_FILE.to_string());
        tree
    }

    /// Register an external hook called on every file selection.
    ///
    /// The workbench reads the selection directly; this is for embedders.
    pub fn set_on_select_file(&mut self, listener: SelectFileListener) {
        self.on_select_file = Some(listener);
    }

    pub fn roots(&self) -> &[FileNode] {
        &self.roots
    }

    /// Find a node anywhere in the tree
    pub fn find(&self, id: &str) -> Option<&FileNode> {
        self.roots.iter().find_map(|root| root.find_by_id(id))
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selected node, if the selection still resolves
    pub fn selected_node(&self) -> Option<&FileNode> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }

    /// Flip a folder's expansion. Descendant flags are left untouched.
    pub fn toggle_folder(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
        debug!("Toggled folder {} (expanded: {})", id, self.is_expanded(id));
    }

    /// Select a file node. Folders are ignored.
    ///
    /// Returns true when the selection was applied.
    pub fn select_file(&mut self, node: &FileNode) -> bool {
        if !node.is_file() {
            return false;
        }
        self.selected = Some(node.id().to_string());
        if let Some(listener) = self.on_select_file.as_mut() {
            listener(node);
        }
        true
    }

    /// Select by id; unknown ids and folders are ignored
    pub fn select_by_id(&mut self, id: &str) -> bool {
        let Some(node) = self.find(id).cloned() else {
            return false;
        };
        self.select_file(&node)
    }

    /// Flatten the visible part of the tree in depth-first pre-order
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for root in &self.roots {
            self.flatten(root, 0, &mut rows);
        }
        rows
    }

    fn flatten(&self, node: &FileNode, depth: usize, rows: &mut Vec<TreeRow>) {
        let is_expanded = node.is_folder() && self.is_expanded(node.id());
        rows.push(TreeRow {
            id: node.id().to_string(),
            label: node.display_name(),
            depth,
            is_folder: node.is_folder(),
            is_expanded,
            is_selected: self.selected.as_deref() == Some(node.id()),
        });
        if is_expanded {
            for child in node.children() {
                self.flatten(child, depth + 1, rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn visible_ids(tree: &FileTree) -> Vec<String> {
        tree.visible_rows().into_iter().map(|row| row.id).collect()
    }

    #[test]
    fn test_sample_initial_rows() {
        let tree = FileTree::sample();
        let rows = tree.visible_rows();

        let labels: Vec<(usize, &str)> = rows.iter().map(|r| (r.depth, r.label.as_str())).collect();
        assert_eq!(
            labels,
            vec![
                (0, "src"),
                (1, "components"),
                (1, "pages"),
                (1, "App.tsx"),
                (1, "main.tsx"),
                (0, "public"),
                (0, "package.json"),
                (0, "tsconfig.json"),
            ]
        );

        assert_eq!(rows[0].chevron(), Some(Chevron::Down));
        assert_eq!(rows[0].icon(), TreeIcon::FolderOpen);
        assert_eq!(rows[1].chevron(), Some(Chevron::Right));
        assert_eq!(rows[1].icon(), TreeIcon::FolderClosed);
        assert_eq!(rows[3].chevron(), None);
        assert_eq!(rows[3].icon(), TreeIcon::File);
        assert_eq!(tree.selected_file(), Some("3"));
    }

    #[test]
    fn test_indentation() {
        let mut tree = FileTree::sample();
        tree.toggle_folder("2");
        let rows = tree.visible_rows();

        let header = rows.iter().find(|r| r.id == "3").unwrap();
        assert_eq!(header.depth, 2);
        assert_eq!(header.indent(), 32.0);
        assert!(header.is_selected);
        assert_eq!(rows[0].indent(), 8.0);
    }

    #[test]
    fn test_toggle_twice_restores_rows() {
        let mut tree = FileTree::sample();
        let before = visible_ids(&tree);

        tree.toggle_folder("10");
        assert_ne!(visible_ids(&tree), before);
        tree.toggle_folder("10");
        assert_eq!(visible_ids(&tree), before);
    }

    #[test]
    fn test_collapse_keeps_descendant_expansion() {
        let mut tree = FileTree::sample();
        tree.toggle_folder("2");
        assert!(visible_ids(&tree).contains(&"4".to_string()));

        tree.toggle_folder("1");
        assert_eq!(visible_ids(&tree), vec!["1", "10", "12", "13"]);
        assert!(tree.is_expanded("2"));

        tree.toggle_folder("1");
        assert!(visible_ids(&tree).contains(&"4".to_string()));
    }

    #[test]
    fn test_toggle_does_not_touch_selection() {
        let mut tree = FileTree::sample();
        tree.toggle_folder("1");
        assert_eq!(tree.selected_file(), Some("3"));
    }

    #[test]
    fn test_select_folder_is_ignored() {
        let mut tree = FileTree::sample();
        let folder = tree.find("6").cloned().unwrap();

        assert!(!tree.select_file(&folder));
        assert_eq!(tree.selected_file(), Some("3"));
        assert!(!tree.select_by_id("missing"));
        assert_eq!(tree.selected_file(), Some("3"));
    }

    #[test]
    fn test_select_file_notifies_listener() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut tree = FileTree::sample();
        tree.set_on_select_file(Box::new(move |node| {
            sink.lock().unwrap().push(node.display_name());
        }));

        assert!(tree.select_by_id("12"));
        assert_eq!(tree.selected_file(), Some("12"));
        assert_eq!(tree.selected_node().map(FileNode::display_name).as_deref(), Some("package.json"));

        // Folder clicks never reach the listener
        assert!(!tree.select_by_id("1"));
        assert_eq!(*seen.lock().unwrap(), vec!["package.json".to_string()]);
    }

    #[test]
    fn test_new_starts_collapsed() {
        let tree = FileTree::new(crate::types::sample_project()).unwrap();
        assert_eq!(visible_ids(&tree), vec!["1", "10", "12", "13"]);
        assert_eq!(tree.selected_file(), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let roots = vec![
            FileNode::folder("a", "src", vec![FileNode::file("b", "main", Some("rs"))]),
            FileNode::file("b", "lib", Some("rs")),
        ];
        match FileTree::new(roots) {
            Err(Error::Tree(TreeError::DuplicateId(id))) => assert_eq!(id, "b"),
            other => panic!("Expected DuplicateId error, got {:?}", other),
        }
    }
}

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::EntryKind;
use crate::error::TreeError;

/// Index of a node inside its [`Tree`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub name: String,
    /// Identity key: the root path as given, then `parent.join(name)`.
    pub path: PathBuf,
    pub parent: Option<NodeId>,
    pub kind: EntryKind,
    pub size_bytes: u64,
    /// Last entry of the parent's listing. Always false for the root.
    pub is_last_sibling: bool,
    pub children: Vec<NodeId>,
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Aggregate counters, bumped once per inserted node.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScanTotals {
    pub directories: u64,
    pub files: u64,
    pub bytes: u64,
}

impl ScanTotals {
    pub fn entries(&self) -> u64 {
        self.directories + self.files
    }
}

/// A node about to be inserted below an existing directory.
#[derive(Clone, Debug)]
pub struct NewNode {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size_bytes: u64,
    pub is_last_sibling: bool,
}

/// Arena-backed directory tree with a path index for parent lookup.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    index: HashMap<PathBuf, NodeId>,
    totals: ScanTotals,
}

impl Tree {
    pub fn new(root_path: impl Into<PathBuf>, name: impl Into<String>, kind: EntryKind) -> Self {
        let path = root_path.into();
        let root = TreeNode {
            name: name.into(),
            path: path.clone(),
            parent: None,
            kind,
            size_bytes: 0,
            is_last_sibling: false,
            children: Vec::new(),
        };

        let mut index = HashMap::new();
        index.insert(path, NodeId(0));

        Self {
            nodes: vec![root],
            index,
            totals: ScanTotals::default(),
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn find(&self, path: &Path) -> Option<NodeId> {
        self.index.get(path).copied()
    }

    pub fn totals(&self) -> ScanTotals {
        self.totals
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing was inserted below the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Append `node` to the children of the directory keyed by `parent_path`
    /// and account for it in the totals.
    pub fn insert(&mut self, parent_path: &Path, node: NewNode) -> Result<NodeId, TreeError> {
        let parent = self
            .find(parent_path)
            .ok_or_else(|| TreeError::MissingParent(parent_path.to_path_buf()))?;
        if !self.nodes[parent.0].is_dir() {
            return Err(TreeError::NotADirectory(parent_path.to_path_buf()));
        }
        if self.index.contains_key(&node.path) {
            return Err(TreeError::DuplicatePath(node.path));
        }

        let id = NodeId(self.nodes.len());
        match node.kind {
            EntryKind::Directory => self.totals.directories += 1,
            EntryKind::File => self.totals.files += 1,
        }
        self.totals.bytes += node.size_bytes;

        self.index.insert(node.path.clone(), id);
        self.nodes[parent.0].children.push(id);
        self.nodes.push(TreeNode {
            name: node.name,
            path: node.path,
            parent: Some(parent),
            kind: node.kind,
            size_bytes: node.size_bytes,
            is_last_sibling: node.is_last_sibling,
            children: Vec::new(),
        });

        Ok(id)
    }
}

mod entry;
mod tree;

pub use entry::{EntryKind, EntryMetadata, FsEntry};
pub use tree::{NewNode, NodeId, ScanTotals, Tree, TreeNode};

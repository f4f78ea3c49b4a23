pub use crate::{
    CollapseState, FolderNode, FolderStatus, LeafNode, NodePath, TableItem, TableTreeState,
    TableTreeStyle, TableTreeView, TreeEvent, TreeGlyphs, TreeNode,
};

use std::hash::Hash;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a node as child indices from the top-level sequence.
///
/// `[2, 0]` is the first child of the third top-level node. Paths are the identity
/// of a rendered folder: its collapse flag lives and dies with its path.
pub type NodePath = SmallVec<[usize; 8]>;

/// Data item shown by a leaf (a table, a view, a saved query...).
///
/// The tree never inspects the item beyond its name and identity; the item is handed
/// back untouched through the selection callback.
pub trait TableItem {
    /// Identity used to decide whether a leaf is the current selection.
    type Id: Clone + Eq + Hash;

    /// Returns the identity of the item.
    fn id(&self) -> &Self::Id;
    /// Returns the label displayed on the leaf row.
    fn name(&self) -> &str;
}

impl TableItem for String {
    type Id = Self;

    #[inline]
    fn id(&self) -> &Self::Id {
        self
    }

    #[inline]
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// Terminal entry wrapping one selectable data item.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafNode<T> {
    pub table: T,
    /// Icon drawn before the name; the glyph set's leaf icon is used when absent.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<String>,
}

impl<T> LeafNode<T> {
    pub const fn new(table: T) -> Self {
        Self { table, icon: None }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Grouping entry with ordered children and pre-computed loading/empty flags.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderNode<T> {
    pub name: String,
    /// Children in display order.
    #[cfg_attr(feature = "serde", serde(default = "Vec::new"))]
    pub items: Vec<TreeNode<T>>,
    /// Message shown instead of the generic fallback when `items` is empty.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub empty_label: Option<String>,
    /// Population of `items` is still in flight.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_loading: bool,
}

impl<T> FolderNode<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            empty_label: None,
            is_loading: false,
        }
    }

    /// Appends a child node.
    #[must_use]
    pub fn item(mut self, node: impl Into<TreeNode<T>>) -> Self {
        self.items.push(node.into());
        self
    }

    /// Appends several child nodes, keeping their order.
    #[must_use]
    pub fn items<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<TreeNode<T>>,
    {
        self.items.extend(nodes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn empty_label(mut self, label: impl Into<String>) -> Self {
        self.empty_label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }
}

/// A tree entry: exactly one of leaf or folder.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode<T> {
    Leaf(LeafNode<T>),
    Folder(FolderNode<T>),
}

impl<T> TreeNode<T> {
    /// Shorthand for a leaf without a custom icon.
    pub const fn leaf(table: T) -> Self {
        Self::Leaf(LeafNode::new(table))
    }

    /// Shorthand for an empty, not loading folder.
    pub fn folder(name: impl Into<String>) -> Self {
        Self::Folder(FolderNode::new(name))
    }

    /// Returns the displayed name (table name for leaves).
    pub fn name(&self) -> &str
    where
        T: TableItem,
    {
        match self {
            Self::Leaf(leaf) => leaf.table.name(),
            Self::Folder(folder) => &folder.name,
        }
    }
}

impl<T> From<LeafNode<T>> for TreeNode<T> {
    fn from(leaf: LeafNode<T>) -> Self {
        Self::Leaf(leaf)
    }
}

impl<T> From<FolderNode<T>> for TreeNode<T> {
    fn from(folder: FolderNode<T>) -> Self {
        Self::Folder(folder)
    }
}

/// Resolves a path against a top-level sequence.
///
/// Returns `None` when an index is out of range or the path descends through a leaf.
pub fn node_at<'a, T>(items: &'a [TreeNode<T>], path: &[usize]) -> Option<&'a TreeNode<T>> {
    let (&first, rest) = path.split_first()?;
    let mut node = items.get(first)?;
    for &idx in rest {
        match node {
            TreeNode::Folder(folder) => node = folder.items.get(idx)?,
            TreeNode::Leaf(_) => return None,
        }
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TreeNode<String>> {
        vec![
            FolderNode::new("raw")
                .item(TreeNode::leaf("events".to_string()))
                .item(FolderNode::new("nested").item(TreeNode::leaf("persons".to_string())))
                .into(),
            TreeNode::leaf("orders".to_string()),
        ]
    }

    #[test]
    fn node_at_follows_child_indices() {
        let items = sample();

        assert_eq!(node_at(&items, &[0]).map(TreeNode::name), Some("raw"));
        assert_eq!(node_at(&items, &[0, 1, 0]).map(TreeNode::name), Some("persons"));
        assert_eq!(node_at(&items, &[1]).map(TreeNode::name), Some("orders"));
    }

    #[test]
    fn node_at_rejects_bad_paths() {
        let items = sample();

        assert!(node_at(&items, &[]).is_none());
        assert!(node_at(&items, &[5]).is_none());
        assert!(node_at(&items, &[1, 0]).is_none());
        assert!(node_at(&items, &[0, 3]).is_none());
    }

    #[test]
    fn folder_builder_keeps_insertion_order() {
        let folder = FolderNode::new("marts").items(["c", "a", "b"].map(|name| {
            TreeNode::leaf(name.to_string())
        }));

        let names: Vec<_> = folder.items.iter().map(TreeNode::name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert!(!folder.is_loading);
        assert!(folder.empty_label.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_kind_tagged_nodes() {
        let json = r##"[
            {"kind": "folder", "name": "staging", "emptyLabel": "No staging tables yet"},
            {"kind": "folder", "name": "raw", "isLoading": true},
            {"kind": "leaf", "table": "orders", "icon": "#"}
        ]"##;

        let items: Vec<TreeNode<String>> = serde_json::from_str(json).unwrap();

        assert_eq!(
            items[0],
            TreeNode::Folder(FolderNode::new("staging").empty_label("No staging tables yet"))
        );
        assert_eq!(items[1], TreeNode::Folder(FolderNode::new("raw").loading(true)));
        assert_eq!(
            items[2],
            TreeNode::Leaf(LeafNode::new("orders".to_string()).icon("#"))
        );
    }
}

use crate::action::TreeEvent;
use crate::context::{RowTarget, RowView, VisibleRow};
use crate::folder::TreeFolderRow;
use crate::model::{NodePath, TableItem, TreeNode};
use crate::row::TreeRow;
use crate::state::FolderStates;

/// Container over a sequence of nodes: dispatches each node to [`TreeRow`] or
/// [`TreeFolderRow`]. Folders build a nested `TableTree` for their children.
pub struct TableTree<'a, T: TableItem> {
    items: &'a [TreeNode<T>],
    depth: u16,
    selected_row: Option<&'a T::Id>,
}

impl<'a, T: TableItem> TableTree<'a, T> {
    pub const fn new(items: &'a [TreeNode<T>]) -> Self {
        Self {
            items,
            depth: 0,
            selected_row: None,
        }
    }

    #[must_use]
    pub const fn depth(mut self, depth: u16) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn selected_row(mut self, selected_row: Option<&'a T::Id>) -> Self {
        self.selected_row = selected_row;
        self
    }

    fn is_selected(&self, item: &T) -> bool {
        self.selected_row.is_some_and(|id| id == item.id())
    }

    /// Feeds the visible rows of this sequence to `out`, in display order.
    ///
    /// `path` holds the position of the sequence's parent and is restored on return.
    pub(crate) fn collect(
        &self,
        path: &mut NodePath,
        folders: &mut FolderStates,
        out: &mut dyn FnMut(VisibleRow<'a, T>),
    ) {
        for (idx, node) in self.items.iter().enumerate() {
            path.push(idx);
            match node {
                TreeNode::Leaf(leaf) => {
                    let row = TreeRow::new(leaf, self.depth).selected(self.is_selected(&leaf.table));
                    out(VisibleRow {
                        path: path.clone(),
                        depth: self.depth,
                        view: RowView::Leaf(row),
                    });
                }
                TreeNode::Folder(folder) => {
                    let state = folders.mount(path);
                    TreeFolderRow::new(folder, self.depth, state)
                        .selected_row(self.selected_row)
                        .collect(path, folders, out);
                }
            }
            path.pop();
        }
    }

    /// Routes an activation along `rest` (child indices relative to this sequence).
    pub(crate) fn activate(
        &self,
        path: &mut NodePath,
        rest: &[usize],
        folders: &mut FolderStates,
        on_select: Option<&mut dyn FnMut(&T)>,
    ) -> TreeEvent {
        let Some((&idx, rest)) = rest.split_first() else {
            return TreeEvent::Unhandled;
        };
        path.push(idx);
        let event = match self.items.get(idx) {
            Some(TreeNode::Leaf(leaf)) if rest.is_empty() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "table_tree.select",
                    path = ?path.as_slice(),
                    name = leaf.table.name()
                );
                TreeRow::new(leaf, self.depth).activate(on_select);
                TreeEvent::Selected
            }
            Some(TreeNode::Folder(folder)) => {
                let state = folders.get(path);
                TreeFolderRow::new(folder, self.depth, state)
                    .selected_row(self.selected_row)
                    .activate(path, rest, folders, on_select)
            }
            Some(TreeNode::Leaf(_)) | None => TreeEvent::Unhandled,
        };
        path.pop();
        event
    }

    /// Flattens the visible tree, mounting every folder it renders.
    pub(crate) fn visible_rows(&self, folders: &mut FolderStates) -> Vec<VisibleRow<'a, T>> {
        let mut out = Vec::new();
        self.collect(&mut NodePath::new(), folders, &mut |row: VisibleRow<'a, T>| out.push(row));
        out
    }

    /// Like [`Self::visible_rows`], but keeps only the hit-test summary of each row.
    pub(crate) fn targets(&self, folders: &mut FolderStates, out: &mut Vec<RowTarget>) {
        self.collect(&mut NodePath::new(), folders, &mut |row: VisibleRow<'a, T>| {
            out.push(row.target());
        });
    }
}

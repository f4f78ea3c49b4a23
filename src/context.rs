use crate::folder::{FolderStatus, TreeFolderRow};
use crate::model::{NodePath, TableItem};
use crate::row::TreeRow;

/// One line of the flattened, currently visible tree.
pub struct VisibleRow<'a, T: TableItem> {
    /// Path of the leaf or folder the line belongs to (the folder for status lines).
    pub path: NodePath,
    /// Indentation level.
    pub depth: u16,
    pub view: RowView<'a, T>,
}

pub enum RowView<'a, T: TableItem> {
    Leaf(TreeRow<'a, T>),
    /// Folder header.
    Folder(TreeFolderRow<'a, T>),
    Status(FolderStatus<'a>),
}

/// Kind of a rendered line, kept between frames for hit testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Leaf,
    Folder,
    Status,
}

/// Owned summary of a rendered line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowTarget {
    pub path: NodePath,
    pub depth: u16,
    pub kind: RowKind,
}

impl<T: TableItem> VisibleRow<'_, T> {
    pub const fn kind(&self) -> RowKind {
        match self.view {
            RowView::Leaf(_) => RowKind::Leaf,
            RowView::Folder(_) => RowKind::Folder,
            RowView::Status(_) => RowKind::Status,
        }
    }

    pub fn target(&self) -> RowTarget {
        RowTarget {
            path: self.path.clone(),
            depth: self.depth,
            kind: self.kind(),
        }
    }
}

use ratatui::text::{Line, Span};

use crate::action::TreeEvent;
use crate::context::{RowView, VisibleRow};
use crate::glyphs::TreeGlyphs;
use crate::model::{FolderNode, NodePath, TableItem, TreeNode};
use crate::state::FolderStates;
use crate::style::TableTreeStyle;
use crate::tree::TableTree;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Collapse state of one rendered folder.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollapseState {
    #[default]
    Expanded,
    Collapsed,
}

impl CollapseState {
    /// Returns the other state.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    #[inline]
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }
}

/// Status line of an expanded folder without children.
///
/// Drawn one indent level below its header, where the first child would sit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FolderStatus<'a> {
    Loading,
    /// The folder's own empty label.
    Empty(&'a str),
    /// Generic fallback when the folder has no empty label.
    NoItems,
}

impl<'a> FolderStatus<'a> {
    /// Picks the status for a folder: loading wins over the empty label, which wins
    /// over the generic fallback. A blank label counts as no label.
    pub fn of<T>(folder: &'a FolderNode<T>) -> Self {
        if folder.is_loading {
            Self::Loading
        } else if let Some(label) = folder.empty_label.as_deref().filter(|l| !l.is_empty()) {
            Self::Empty(label)
        } else {
            Self::NoItems
        }
    }

    pub fn line<'g>(&self, glyphs: &TreeGlyphs<'g>, style: &TableTreeStyle<'_>, tick: usize) -> Line<'a>
    where
        'g: 'a,
    {
        match *self {
            Self::Loading => {
                let frame = glyphs.spinner_frame(tick);
                let mut spans = Vec::with_capacity(3);
                if !frame.is_empty() {
                    spans.push(Span::raw(frame));
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::raw(glyphs.loading));
                Line::from(spans).style(style.loading_style)
            }
            Self::Empty(label) => Line::from(label).style(style.empty_style),
            Self::NoItems => Line::from(glyphs.no_items).style(style.muted_style),
        }
    }
}

/// What a folder shows below its header.
pub enum FolderBody<'a, T> {
    /// Collapsed: nothing at all below the header.
    Hidden,
    Children(&'a [TreeNode<T>]),
    Status(FolderStatus<'a>),
}

/// Renderer for a folder: header with chevron and name, then either its children
/// (through a nested [`TableTree`]) or a status line.
pub struct TreeFolderRow<'a, T: TableItem> {
    item: &'a FolderNode<T>,
    depth: u16,
    state: CollapseState,
    selected_row: Option<&'a T::Id>,
}

impl<T: TableItem> Clone for TreeFolderRow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TableItem> Copy for TreeFolderRow<'_, T> {}

impl<'a, T: TableItem> TreeFolderRow<'a, T> {
    pub const fn new(item: &'a FolderNode<T>, depth: u16, state: CollapseState) -> Self {
        Self {
            item,
            depth,
            state,
            selected_row: None,
        }
    }

    /// Selection handed down to the nested tree.
    #[must_use]
    pub const fn selected_row(mut self, selected_row: Option<&'a T::Id>) -> Self {
        self.selected_row = selected_row;
        self
    }

    pub const fn item(&self) -> &'a FolderNode<T> {
        self.item
    }

    pub const fn depth(&self) -> u16 {
        self.depth
    }

    pub const fn state(&self) -> CollapseState {
        self.state
    }

    /// Decides what is rendered below the header. Non-empty `items` take precedence
    /// over the loading flag.
    pub fn body(&self) -> FolderBody<'a, T> {
        if self.state.is_collapsed() {
            FolderBody::Hidden
        } else if self.item.items.is_empty() {
            FolderBody::Status(FolderStatus::of(self.item))
        } else {
            FolderBody::Children(&self.item.items)
        }
    }

    /// Nested container for the children, one level deeper.
    fn children(&self, items: &'a [TreeNode<T>]) -> TableTree<'a, T> {
        TableTree::new(items)
            .depth(self.depth + 1)
            .selected_row(self.selected_row)
    }

    pub fn header_line<'g>(&self, glyphs: &TreeGlyphs<'g>, style: &TableTreeStyle<'_>) -> Line<'a>
    where
        'g: 'a,
    {
        Line::from(vec![
            Span::raw(glyphs.chevron(self.state.is_collapsed())),
            Span::raw(" "),
            Span::raw(self.item.name.as_str()),
        ])
        .style(style.folder_style)
    }

    pub(crate) fn collect(
        &self,
        path: &mut NodePath,
        folders: &mut FolderStates,
        out: &mut dyn FnMut(VisibleRow<'a, T>),
    ) {
        out(VisibleRow {
            path: path.clone(),
            depth: self.depth,
            view: RowView::Folder(*self),
        });
        match self.body() {
            FolderBody::Hidden => {}
            FolderBody::Children(items) => self.children(items).collect(path, folders, out),
            FolderBody::Status(status) => out(VisibleRow {
                path: path.clone(),
                depth: self.depth + 1,
                view: RowView::Status(status),
            }),
        }
    }

    /// Routes an activation: an empty `rest` is the header itself, anything else goes
    /// to the nested tree while expanded.
    pub(crate) fn activate(
        &self,
        path: &mut NodePath,
        rest: &[usize],
        folders: &mut FolderStates,
        on_select: Option<&mut dyn FnMut(&T)>,
    ) -> TreeEvent {
        if rest.is_empty() {
            return TreeEvent::Toggled(folders.toggle(path));
        }
        match self.body() {
            FolderBody::Children(items) => {
                self.children(items).activate(path, rest, folders, on_select)
            }
            FolderBody::Hidden | FolderBody::Status(_) => TreeEvent::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn folder(name: &str) -> FolderNode<String> {
        FolderNode::new(name)
    }

    #[test]
    fn collapse_state_alternates() {
        let mut state = CollapseState::default();
        assert_eq!(state, CollapseState::Expanded);

        let mut seen = Vec::new();
        for _ in 0..4 {
            state = state.toggle();
            seen.push(state);
        }

        assert_eq!(
            seen,
            vec![
                CollapseState::Collapsed,
                CollapseState::Expanded,
                CollapseState::Collapsed,
                CollapseState::Expanded,
            ]
        );
    }

    #[test]
    fn loading_beats_empty_label() {
        let node = folder("raw").loading(true).empty_label("nothing here");

        assert_eq!(FolderStatus::of(&node), FolderStatus::Loading);
    }

    #[test]
    fn empty_label_beats_fallback() {
        let node = folder("staging").empty_label("No staging tables yet");

        assert_eq!(
            FolderStatus::of(&node),
            FolderStatus::Empty("No staging tables yet")
        );
        assert_eq!(FolderStatus::of(&folder("marts")), FolderStatus::NoItems);
    }

    #[test]
    fn blank_empty_label_falls_back() {
        let node = folder("staging").empty_label("");

        assert_eq!(FolderStatus::of(&node), FolderStatus::NoItems);
    }

    #[test]
    fn status_lines_use_glyph_texts() {
        let glyphs = TreeGlyphs::ascii();
        let style = TableTreeStyle::default();

        assert_eq!(text(&FolderStatus::Loading.line(&glyphs, &style, 1)), "/ Loading...");
        assert_eq!(
            text(&FolderStatus::Empty("empty!").line(&glyphs, &style, 0)),
            "empty!"
        );
        let fallback = FolderStatus::NoItems.line(&glyphs, &style, 0);
        assert_eq!(text(&fallback), "No tables found");
        assert_eq!(fallback.style, style.muted_style);
    }

    #[test]
    fn children_take_precedence_over_loading() {
        let node = folder("raw")
            .loading(true)
            .item(TreeNode::leaf("events".to_string()));
        let row = TreeFolderRow::new(&node, 0, CollapseState::Expanded);

        assert!(matches!(row.body(), FolderBody::Children(items) if items.len() == 1));
    }

    #[test]
    fn collapsed_folder_shows_nothing_below_header() {
        let with_children = folder("raw").item(TreeNode::leaf("events".to_string()));
        let loading = folder("raw").loading(true);
        let labelled = folder("raw").empty_label("none");

        for node in [&with_children, &loading, &labelled] {
            let row = TreeFolderRow::new(node, 3, CollapseState::Collapsed);
            assert!(matches!(row.body(), FolderBody::Hidden));
        }
    }

    #[test]
    fn header_shows_state_chevron_and_name() {
        let node = folder("marts");
        let glyphs = TreeGlyphs::ascii();
        let style = TableTreeStyle::default();

        let open = TreeFolderRow::new(&node, 0, CollapseState::Expanded).header_line(&glyphs, &style);
        let shut = TreeFolderRow::new(&node, 0, CollapseState::Collapsed).header_line(&glyphs, &style);

        assert_eq!(text(&open), "v marts");
        assert_eq!(text(&shut), "> marts");
        assert_eq!(open.style, style.folder_style);
    }
}

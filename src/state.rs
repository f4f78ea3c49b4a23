use std::mem;

use ratatui::layout::{Position, Rect};
use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::action::TreeEvent;
use crate::context::{RowKind, RowTarget, VisibleRow};
use crate::folder::CollapseState;
use crate::model::{NodePath, TableItem, TreeNode};
use crate::tree::TableTree;

/// Collapse flags of the folders that are currently rendered.
///
/// Folders are expanded unless listed here. A flag lives as long as its folder stays
/// rendered: collapsing an ancestor drops the flags below it, and a render pass keeps
/// only the flags of folders it actually mounted.
#[derive(Clone, Debug, Default)]
pub(crate) struct FolderStates {
    collapsed: FxHashSet<NodePath>,
    // Collapsed folders seen by the render pass in progress.
    mounted: FxHashSet<NodePath>,
}

impl FolderStates {
    pub(crate) fn get(&self, path: &[usize]) -> CollapseState {
        if self.collapsed.contains(path) {
            CollapseState::Collapsed
        } else {
            CollapseState::Expanded
        }
    }

    /// Records that the folder at `path` is rendered and returns its state.
    pub(crate) fn mount(&mut self, path: &[usize]) -> CollapseState {
        let state = self.get(path);
        if state.is_collapsed() {
            self.mounted.insert(NodePath::from_slice(path));
        }
        state
    }

    /// Ends a render pass: folders that were not mounted lose their flags.
    pub(crate) fn finish_pass(&mut self) {
        mem::swap(&mut self.collapsed, &mut self.mounted);
        self.mounted.clear();
    }

    /// Flips the folder at `path` and returns its new state.
    pub(crate) fn toggle(&mut self, path: &[usize]) -> CollapseState {
        let state = if self.collapsed.remove(path) {
            CollapseState::Expanded
        } else {
            // Descendants are unmounted by the collapse.
            self.collapsed
                .retain(|other| !(other.len() > path.len() && other.starts_with(path)));
            self.collapsed.insert(NodePath::from_slice(path));
            CollapseState::Collapsed
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "table_tree.toggle", path = ?path, state = ?state);
        state
    }

    pub(crate) fn collapsed_len(&self) -> usize {
        self.collapsed.len()
    }
}

/// Widget state: per-folder collapse flags plus what the last frame showed.
///
/// Selection is not stored here; it belongs to the caller and is passed to the widget
/// on every frame.
#[derive(Clone, Debug, Default)]
pub struct TableTreeState {
    folders: FolderStates,
    // Rows of the last rendered frame, used for hit testing and activation.
    rows: Vec<RowTarget>,
    offset: usize,
    // Inner area of the last frame, excluding borders and scrollbar.
    viewport: Rect,
    tick: usize,
}

impl TableTreeState {
    /// Creates an empty state: every folder expanded, nothing rendered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with room for the given number of visible rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            folders: FolderStates {
                collapsed: FxHashSet::with_capacity_and_hasher(capacity, FxBuildHasher),
                mounted: FxHashSet::with_capacity_and_hasher(capacity, FxBuildHasher),
            },
            rows: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the collapse state of the folder at `path` (expanded if unknown).
    pub fn collapse_state(&self, path: &[usize]) -> CollapseState {
        self.folders.get(path)
    }

    /// Number of folders currently collapsed.
    pub fn collapsed_len(&self) -> usize {
        self.folders.collapsed_len()
    }

    /// Rows shown by the last frame, in display order.
    pub fn rows(&self) -> &[RowTarget] {
        &self.rows
    }

    pub const fn visible_len(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first row in the viewport.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Inner area the tree was last rendered into.
    pub const fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Advances the loading spinner by one frame.
    pub const fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub(crate) const fn tick_count(&self) -> usize {
        self.tick
    }

    /// Scrolls the view down by the given number of rows.
    pub fn scroll_down_by(&mut self, amount: u16) {
        let max_offset = self.max_offset(self.viewport.height as usize);
        self.offset = self.offset.saturating_add(amount as usize).min(max_offset);
    }

    /// Scrolls the view up by the given number of rows.
    pub const fn scroll_up_by(&mut self, amount: u16) {
        self.offset = self.offset.saturating_sub(amount as usize);
    }

    fn max_offset(&self, viewport_height: usize) -> usize {
        self.rows.len().saturating_sub(viewport_height.max(1))
    }

    pub(crate) fn clamp_offset(&mut self, viewport_height: usize) {
        self.offset = self.offset.min(self.max_offset(viewport_height));
    }

    pub(crate) const fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Recomputes the visible rows from the current data and collapse flags.
    ///
    /// The widget calls this on every frame; custom renderers can call it instead of
    /// drawing through [`TableTreeView`](crate::TableTreeView).
    pub fn visible_rows<'a, T: TableItem>(
        &mut self,
        items: &'a [TreeNode<T>],
        selected: Option<&'a T::Id>,
    ) -> Vec<VisibleRow<'a, T>> {
        let rows = TableTree::new(items)
            .selected_row(selected)
            .visible_rows(&mut self.folders);
        self.folders.finish_pass();
        self.rows.clear();
        self.rows.extend(rows.iter().map(VisibleRow::target));
        rows
    }

    /// Flips the folder at `path`, as a click on its header would, and refreshes the
    /// rows used for hit testing.
    pub fn toggle<T: TableItem>(&mut self, items: &[TreeNode<T>], path: &[usize]) -> CollapseState {
        let state = self.folders.toggle(path);
        self.refresh_rows(items);
        state
    }

    // Recomputes the row targets without building the per-row views.
    fn refresh_rows<T: TableItem>(&mut self, items: &[TreeNode<T>]) {
        self.rows.clear();
        TableTree::new(items).targets(&mut self.folders, &mut self.rows);
        self.folders.finish_pass();
    }

    /// Returns the index of the row at a terminal cell of the last frame.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.viewport.contains(Position::new(column, row)) {
            return None;
        }
        let idx = self.offset + (row - self.viewport.y) as usize;
        (idx < self.rows.len()).then_some(idx)
    }

    /// Activates a visible row without a selection callback.
    pub fn activate<T: TableItem>(&mut self, items: &[TreeNode<T>], row: usize) -> TreeEvent {
        self.activate_inner(items, row, None)
    }

    /// Activates a visible row: leaves report their item to `on_select`, folder
    /// headers toggle.
    pub fn activate_with<T, F>(&mut self, items: &[TreeNode<T>], row: usize, mut on_select: F) -> TreeEvent
    where
        T: TableItem,
        F: FnMut(&T),
    {
        self.activate_inner(items, row, Some(&mut on_select))
    }

    fn activate_inner<T: TableItem>(
        &mut self,
        items: &[TreeNode<T>],
        row: usize,
        on_select: Option<&mut dyn FnMut(&T)>,
    ) -> TreeEvent {
        let Some(target) = self.rows.get(row) else {
            return TreeEvent::Unhandled;
        };
        if target.kind == RowKind::Status {
            return TreeEvent::Unhandled;
        }
        let path = target.path.clone();
        let event = TableTree::new(items).activate(
            &mut NodePath::new(),
            &path,
            &mut self.folders,
            on_select,
        );
        if matches!(event, TreeEvent::Toggled(_)) {
            // Keep hit testing in line with the new shape until the next frame.
            self.refresh_rows(items);
        }
        event
    }
}

use ratatui::text::{Line, Span};

use crate::glyphs::TreeGlyphs;
use crate::model::{LeafNode, TableItem};
use crate::style::TableTreeStyle;

/// Renderer for a single selectable leaf: icon, then the item name.
///
/// Indentation is applied by the container from `depth`; the row itself only draws
/// its own content.
pub struct TreeRow<'a, T> {
    item: &'a LeafNode<T>,
    depth: u16,
    selected: bool,
}

impl<'a, T: TableItem> TreeRow<'a, T> {
    pub const fn new(item: &'a LeafNode<T>, depth: u16) -> Self {
        Self {
            item,
            depth,
            selected: false,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub const fn item(&self) -> &'a LeafNode<T> {
        self.item
    }

    pub const fn depth(&self) -> u16 {
        self.depth
    }

    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn line<'g>(&self, glyphs: &TreeGlyphs<'g>, style: &TableTreeStyle<'_>) -> Line<'a>
    where
        'g: 'a,
    {
        let icon = self.item.icon.as_deref().unwrap_or(glyphs.leaf);
        let line = Line::from(vec![
            Span::raw(icon),
            Span::raw(" "),
            Span::raw(self.item.table.name()),
        ]);
        if self.selected {
            line.style(style.selected_style)
        } else {
            line.style(style.leaf_style)
        }
    }

    /// Reports an activation of the row: the callback, if present, receives the
    /// underlying item exactly once.
    pub fn activate(&self, on_click: Option<&mut dyn FnMut(&T)>) {
        if let Some(on_click) = on_click {
            on_click(&self.item.table);
        }
    }
}

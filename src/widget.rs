use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::Buffer;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
    Table, Widget,
};

use crate::context::{RowView, VisibleRow};
use crate::glyphs::TreeGlyphs;
use crate::model::{TableItem, TreeNode};
use crate::state::TableTreeState;
use crate::style::TableTreeStyle;

/// Tree browser widget: folders with collapsible children, selectable leaves.
pub struct TableTreeView<'a, T: TableItem> {
    items: &'a [TreeNode<T>],
    selected: Option<&'a T::Id>,
    style: TableTreeStyle<'a>,
    glyphs: TreeGlyphs<'a>,
}

impl<'a, T: TableItem> TableTreeView<'a, T> {
    pub fn new(items: &'a [TreeNode<T>]) -> Self {
        Self {
            items,
            selected: None,
            style: TableTreeStyle::default(),
            glyphs: TreeGlyphs::unicode(),
        }
    }

    /// Identity of the currently selected item, owned by the caller.
    #[must_use]
    pub const fn selected(mut self, selected: Option<&'a T::Id>) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn style(mut self, style: TableTreeStyle<'a>) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn glyphs(mut self, glyphs: TreeGlyphs<'a>) -> Self {
        self.glyphs = glyphs;
        self
    }

    #[inline]
    fn row_line(&self, row: &VisibleRow<'a, T>, tick: usize) -> Line<'a> {
        let content = match &row.view {
            RowView::Leaf(leaf) => leaf.line(&self.glyphs, &self.style),
            RowView::Folder(folder) => folder.header_line(&self.glyphs, &self.style),
            RowView::Status(status) => status.line(&self.glyphs, &self.style, tick),
        };
        if row.depth == 0 {
            return content;
        }
        let mut spans = Vec::with_capacity(row.depth as usize + content.spans.len());
        for _ in 0..row.depth {
            spans.push(Span::raw(self.glyphs.indent));
        }
        spans.extend(content.spans);
        Line::from(spans).style(content.style)
    }

    #[inline]
    fn build_rows(&self, rows: &[VisibleRow<'a, T>], tick: usize) -> Vec<Row<'a>> {
        rows.iter()
            .map(|row| {
                let line = self.row_line(row, tick);
                let table_row = Row::new([Cell::from(line)]);
                match &row.view {
                    RowView::Leaf(leaf) if leaf.is_selected() => {
                        table_row.style(self.style.selected_style)
                    }
                    _ => table_row,
                }
            })
            .collect()
    }

    #[inline]
    fn render_scrollbar(
        area: Rect,
        buf: &mut Buffer,
        offset: usize,
        inner_height: usize,
        scroll_rows: usize,
    ) {
        let scroll_len = scroll_rows.saturating_add(1);
        let position = offset.min(scroll_len.saturating_sub(1));
        let mut scrollbar_state = ScrollbarState::new(scroll_len)
            .position(position)
            .viewport_content_length(inner_height);
        Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .render(area, buf, &mut scrollbar_state);
    }
}

impl<T: TableItem> StatefulWidget for TableTreeView<'_, T> {
    type State = TableTreeState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let visible = state.visible_rows(self.items, self.selected);

        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "table_tree.render",
            items = self.items.len(),
            visible_rows = visible.len(),
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        let mut block = Block::default().borders(self.style.borders);
        if let Some(title) = self.style.title.clone() {
            block = block.title(title);
        }
        block = block
            .style(self.style.block_style)
            .border_style(self.style.border_style);

        let inner_height = block.inner(area).height as usize;
        state.clamp_offset(inner_height);

        let total_rows = visible.len();
        let start = state.offset().min(total_rows);
        let end = (start + inner_height).min(total_rows);
        let rows = self.build_rows(&visible[start..end], state.tick_count());

        let scroll_rows = total_rows.saturating_sub(inner_height);
        let (table_area, table_block, scrollbar_area) = if scroll_rows > 0 {
            let table_area = Rect {
                width: area.width.saturating_sub(1),
                ..area
            };
            let scrollbar_area = Rect {
                x: area.x + area.width.saturating_sub(1),
                y: area.y,
                width: 1,
                height: area.height,
            };
            let mut table_borders = self.style.borders;
            table_borders.remove(Borders::RIGHT);
            (table_area, block.borders(table_borders), Some(scrollbar_area))
        } else {
            (area, block, None)
        };
        state.set_viewport(table_block.inner(table_area));

        let table = Table::new(rows, [Constraint::Fill(1)])
            .style(self.style.block_style)
            .block(table_block);
        Widget::render(table, table_area, buf);

        if let Some(scrollbar_area) = scrollbar_area {
            Self::render_scrollbar(scrollbar_area, buf, state.offset(), inner_height, scroll_rows);
        }
    }
}

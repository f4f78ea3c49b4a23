use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::TreeEvent;
use crate::model::{TableItem, TreeNode};
use crate::state::TableTreeState;

impl TableTreeState {
    /// Handles a mouse event against the last rendered frame.
    ///
    /// A left-button press on a row activates it: leaves report their item to
    /// `on_select`, folder headers toggle. The wheel scrolls by one row while the
    /// pointer is over the tree.
    pub fn handle_mouse<T, F>(
        &mut self,
        items: &[TreeNode<T>],
        event: MouseEvent,
        on_select: F,
    ) -> TreeEvent
    where
        T: TableItem,
        F: FnMut(&T),
    {
        let inside = self.viewport().contains((event.column, event.row).into());
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(row) = self.row_at(event.column, event.row) {
                    return self.activate_with(items, row, on_select);
                }
                TreeEvent::Unhandled
            }
            MouseEventKind::ScrollDown if inside => {
                self.scroll_down_by(1);
                TreeEvent::Scrolled
            }
            MouseEventKind::ScrollUp if inside => {
                self.scroll_up_by(1);
                TreeEvent::Scrolled
            }
            _ => TreeEvent::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::StatefulWidget;

    use super::*;
    use crate::folder::CollapseState;
    use crate::model::FolderNode;
    use crate::widget::TableTreeView;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn rendered(items: &[TreeNode<String>], area: Rect) -> TableTreeState {
        let mut state = TableTreeState::new();
        let mut buffer = Buffer::empty(area);
        TableTreeView::new(items).render(area, &mut buffer, &mut state);
        state
    }

    fn items() -> Vec<TreeNode<String>> {
        vec![
            FolderNode::new("raw")
                .item(TreeNode::leaf("events".to_string()))
                .item(TreeNode::leaf("persons".to_string()))
                .into(),
        ]
    }

    #[test]
    fn click_on_header_toggles_folder() {
        let items = items();
        let mut state = rendered(&items, Rect::new(0, 0, 20, 6));
        let mut calls = 0;

        let event = state.handle_mouse(
            &items,
            mouse(MouseEventKind::Down(MouseButton::Left), 15, 1),
            |_: &String| calls += 1,
        );

        assert_eq!(event, TreeEvent::Toggled(CollapseState::Collapsed));
        assert_eq!(calls, 0);
        assert_eq!(state.visible_len(), 1);
    }

    #[test]
    fn click_on_leaf_selects_it() {
        let items = items();
        let mut state = rendered(&items, Rect::new(0, 0, 20, 6));
        let mut picked = Vec::new();

        let event = state.handle_mouse(
            &items,
            mouse(MouseEventKind::Down(MouseButton::Left), 2, 3),
            |table: &String| picked.push(table.clone()),
        );

        assert_eq!(event, TreeEvent::Selected);
        assert_eq!(picked, vec!["persons".to_string()]);
    }

    #[test]
    fn clicks_outside_rows_are_ignored() {
        let items = items();
        let mut state = rendered(&items, Rect::new(0, 0, 20, 6));

        for (column, row) in [(0, 1), (5, 0), (5, 4)] {
            let event = state.handle_mouse(
                &items,
                mouse(MouseEventKind::Down(MouseButton::Left), column, row),
                |_: &String| {},
            );
            assert_eq!(event, TreeEvent::Unhandled);
        }
        let event = state.handle_mouse(
            &items,
            mouse(MouseEventKind::Down(MouseButton::Right), 5, 1),
            |_: &String| {},
        );
        assert_eq!(event, TreeEvent::Unhandled);
    }

    #[test]
    fn wheel_scrolls_inside_viewport() {
        let items: Vec<TreeNode<String>> =
            (0..10).map(|idx| TreeNode::leaf(format!("t{idx}"))).collect();
        let mut state = rendered(&items, Rect::new(0, 0, 20, 5));

        let event = state.handle_mouse(&items, mouse(MouseEventKind::ScrollDown, 3, 2), |_: &String| {});
        assert_eq!(event, TreeEvent::Scrolled);
        assert_eq!(state.offset(), 1);

        let event = state.handle_mouse(&items, mouse(MouseEventKind::ScrollUp, 30, 30), |_: &String| {});
        assert_eq!(event, TreeEvent::Unhandled);
        assert_eq!(state.offset(), 1);
    }
}

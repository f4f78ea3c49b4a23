// Minimal example: a tiny folder/table tree rendered with default styling.
use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::widgets::StatefulWidget;

use tui_tabletree::{FolderNode, TableTreeState, TableTreeView, TreeNode};

fn main() {
    // Leaves carry plain `String` items; the name doubles as the identity.
    let items: Vec<TreeNode<String>> = vec![
        FolderNode::new("raw")
            .item(TreeNode::leaf("events".to_string()))
            .item(TreeNode::leaf("persons".to_string()))
            .into(),
        FolderNode::new("staging")
            .empty_label("No staging tables yet")
            .into(),
        FolderNode::new("marts").loading(true).into(),
    ];

    // State holds collapse flags and must live across frames; the selection is ours.
    let mut state = TableTreeState::new();
    let selected = "events".to_string();

    // Render into an in-memory buffer (no terminal required for the example).
    let area = Rect::new(0, 0, 40, 10);
    let mut buffer = Buffer::empty(area);
    TableTreeView::new(&items)
        .selected(Some(&selected))
        .render(area, &mut buffer, &mut state);

    // A click on the first row collapses "raw".
    let event = state.activate(&items, 0);
    println!("{event:?}: {} rows visible", state.visible_len());
}

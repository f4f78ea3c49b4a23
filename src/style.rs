use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Borders;

/// Visual settings of the tree widget.
#[derive(Clone)]
pub struct TableTreeStyle<'a> {
    pub title: Option<Line<'a>>,
    pub block_style: Style,
    pub border_style: Style,
    /// Folder header (name and chevron).
    pub folder_style: Style,
    pub leaf_style: Style,
    /// Applied to the leaf whose item is the current selection, and only to it.
    pub selected_style: Style,
    pub loading_style: Style,
    /// Folder-provided empty label.
    pub empty_style: Style,
    /// Generic "no items" fallback.
    pub muted_style: Style,
    pub borders: Borders,
}

impl Default for TableTreeStyle<'_> {
    fn default() -> Self {
        Self {
            title: None,
            block_style: Style::default(),
            border_style: Style::default(),
            folder_style: Style::default().add_modifier(Modifier::BOLD),
            leaf_style: Style::default(),
            selected_style: Style::default().add_modifier(Modifier::REVERSED),
            loading_style: Style::default(),
            empty_style: Style::default(),
            muted_style: Style::default().fg(Color::DarkGray),
            borders: Borders::ALL,
        }
    }
}

// Interactive browser: loads a JSON catalog and lets you click through it.
//
// Usage: browser [CATALOG]   (default: demos/catalog.json)
// Set TABLETREE_LOG (e.g. `debug`) to write tracing output to tabletree-browser.log.
use std::env;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use tui_tabletree::{TableItem, TableTreeState, TableTreeStyle, TableTreeView, TreeNode};

#[derive(Debug, Deserialize)]
struct Table {
    id: u64,
    name: String,
    schema: String,
}

impl TableItem for Table {
    type Id = u64;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn load_catalog(path: &Path) -> Result<Vec<TreeNode<Table>>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid catalog {}", path.display()))
}

fn init_tracing() -> Result<()> {
    let Ok(filter) = env::var("TABLETREE_LOG") else {
        return Ok(());
    };
    let file = File::create("tabletree-browser.log").context("failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn style() -> TableTreeStyle<'static> {
    let mut style = TableTreeStyle::default();
    style.block_style = Style::default()
        .fg(Color::Rgb(221, 227, 235))
        .bg(Color::Rgb(24, 28, 36));
    style.border_style = Style::default().fg(Color::Rgb(92, 110, 140));
    style.folder_style = Style::default()
        .fg(Color::Rgb(229, 201, 133))
        .add_modifier(Modifier::BOLD);
    style.selected_style = Style::default()
        .fg(Color::Rgb(255, 255, 255))
        .bg(Color::Rgb(52, 66, 96))
        .add_modifier(Modifier::BOLD);
    style.loading_style = Style::default().fg(Color::Rgb(136, 192, 208));
    style.title = Some(Line::from(" Tables "));
    style
}

fn render(
    frame: &mut Frame,
    items: &[TreeNode<Table>],
    selected: Option<&Table>,
    state: &mut TableTreeState,
    style: &TableTreeStyle<'static>,
) {
    let [tree_area, status_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

    let widget = TableTreeView::new(items)
        .selected(selected.map(|table| &table.id))
        .style(style.clone());
    frame.render_stateful_widget(widget, tree_area, state);

    let status = selected.map_or_else(
        || "click a table to select it, q to quit".to_string(),
        |table| format!("selected {}.{}", table.schema, table.name),
    );
    frame.render_widget(Paragraph::new(status), status_area);
}

fn find_table(items: &[TreeNode<Table>], id: u64) -> Option<&Table> {
    items.iter().find_map(|node| match node {
        TreeNode::Leaf(leaf) if leaf.table.id == id => Some(&leaf.table),
        TreeNode::Leaf(_) => None,
        TreeNode::Folder(folder) => find_table(&folder.items, id),
    })
}

fn run_app(mut terminal: DefaultTerminal, items: &[TreeNode<Table>]) -> Result<()> {
    let style = style();
    let mut state = TableTreeState::new();
    let mut selected: Option<u64> = None;

    loop {
        let table = selected.and_then(|id| find_table(items, id));
        terminal.draw(|frame| render(frame, items, table, &mut state, &style))?;

        if !event::poll(Duration::from_millis(120))? {
            state.tick();
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                let event = state.handle_mouse(items, mouse, |table: &Table| {
                    selected = Some(table.id);
                });
                if event.is_handled() {
                    tracing::info!(?event, "tree event");
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("demos/catalog.json"), PathBuf::from);
    init_tracing()?;
    let items = load_catalog(&path)?;

    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = run_app(terminal, &items);
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();
    result
}

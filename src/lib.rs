//! Folder/table tree browser widget for ratatui: collapsible folders with loading and
//! empty states, and single selectable leaves reported through a callback.
//!
//! Feature flags:
//! - `mouse`: crossterm mouse handling via `TableTreeState::handle_mouse`.
//! - `serde`: serde support for the node types (`kind`-tagged).
//! - `tracing`: debug events for toggles, selections and render passes.

mod action;
mod context;
mod folder;
mod glyphs;
mod model;
#[cfg(feature = "mouse")]
mod mouse;
pub mod prelude;
mod row;
mod state;
mod style;
mod tree;
mod widget;

pub use action::TreeEvent;
pub use context::{RowKind, RowTarget, RowView, VisibleRow};
pub use folder::{CollapseState, FolderBody, FolderStatus, TreeFolderRow};
pub use glyphs::TreeGlyphs;
pub use model::{FolderNode, LeafNode, NodePath, TableItem, TreeNode, node_at};
pub use row::TreeRow;
pub use state::TableTreeState;
pub use style::TableTreeStyle;
pub use tree::TableTree;
pub use widget::TableTreeView;

use crate::folder::CollapseState;

/// Result of activating a row (click, tap or programmatic activation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeEvent {
    /// A leaf was activated and the selection callback (if any) was invoked.
    Selected,
    /// A folder header was activated; carries the folder's new state.
    Toggled(CollapseState),
    /// The view was scrolled; no row was activated.
    Scrolled,
    /// Nothing to do (status line, out-of-range row, stale path, outside the viewport).
    Unhandled,
}

impl TreeEvent {
    /// Returns `true` unless the event is [`TreeEvent::Unhandled`].
    #[inline]
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::Unhandled)
    }
}

/// Strings used to draw the tree: indentation, chevrons, icons and status texts.
#[derive(Clone, Copy, Debug)]
pub struct TreeGlyphs<'a> {
    /// One indentation level.
    pub indent: &'a str,
    pub expanded: &'a str,
    pub collapsed: &'a str,
    /// Icon for leaves that do not carry their own.
    pub leaf: &'a str,
    /// Spinner frames for folders that are still loading.
    pub spinner: &'a [&'a str],
    pub loading: &'a str,
    /// Shown for an empty folder without its own empty label.
    pub no_items: &'a str,
}

impl TreeGlyphs<'static> {
    pub const fn unicode() -> Self {
        Self {
            indent: "  ",
            expanded: "▼",
            collapsed: "▶",
            leaf: "▦",
            spinner: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            loading: "Loading…",
            no_items: "No tables found",
        }
    }

    pub const fn ascii() -> Self {
        Self {
            indent: "  ",
            expanded: "v",
            collapsed: ">",
            leaf: "#",
            spinner: &["|", "/", "-", "\\"],
            loading: "Loading...",
            no_items: "No tables found",
        }
    }
}

impl<'g> TreeGlyphs<'g> {
    /// Returns the chevron for the given folder state.
    #[inline]
    pub const fn chevron(&self, collapsed: bool) -> &'g str {
        if collapsed {
            self.collapsed
        } else {
            self.expanded
        }
    }

    /// Returns the spinner frame for an animation tick, or `""` without frames.
    #[inline]
    pub fn spinner_frame(&self, tick: usize) -> &'g str {
        if self.spinner.is_empty() {
            return "";
        }
        self.spinner[tick % self.spinner.len()]
    }
}

impl Default for TreeGlyphs<'static> {
    fn default() -> Self {
        Self::unicode()
    }
}

//! Selection state for the two browsing screens. The structs stay free of
//! widget code; `app.rs` reads them when rendering and routes key events
//! into them.

use std::collections::HashSet;

/// State of the playlist browser: which card is selected and which cards
/// are expanded to show their member songs.
#[derive(Default)]
pub(crate) struct PlaylistsScreen {
    pub(crate) selected: usize,
    expanded: HashSet<usize>,
}

impl PlaylistsScreen {
    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        self.selected = clamp_selection(self.selected, offset, len);
    }

    /// Expand or collapse the selected card. Each card remembers its own
    /// expansion independently, like the original's expandable cards.
    pub(crate) fn toggle_expanded(&mut self) {
        if !self.expanded.remove(&self.selected) {
            self.expanded.insert(self.selected);
        }
    }

    pub(crate) fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Clamp the selection after the playlist list has grown or shrunk.
    pub(crate) fn ensure_in_bounds(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// State of the song browser.
#[derive(Default)]
pub(crate) struct SongsScreen {
    pub(crate) selected: usize,
}

impl SongsScreen {
    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        self.selected = clamp_selection(self.selected, offset, len);
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub(crate) fn ensure_in_bounds(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

fn clamp_selection(current: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len as isize - 1;
    (current as isize + offset).clamp(0, max) as usize
}

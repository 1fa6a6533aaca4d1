//! Form state for the two data-entry screens. Forms only collect raw text
//! and manage focus; all validation happens in the library facade when the
//! user submits, so a form never rejects input beyond filtering control
//! characters.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Fields of the "add a song" form, in the order focus cycles through.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum SongField {
    #[default]
    Name,
    Artist,
    Duration,
}

/// Raw inputs for creating a song. The duration stays text until the
/// facade parses it, so a typo surfaces as a structured error rather than
/// being silently dropped at the keyboard.
#[derive(Default, Clone)]
pub(crate) struct SongForm {
    pub(crate) name: String,
    pub(crate) artist: String,
    pub(crate) duration: String,
    pub(crate) active: SongField,
}

impl SongForm {
    /// Cycle focus across the three fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            SongField::Name => SongField::Artist,
            SongField::Artist => SongField::Duration,
            SongField::Duration => SongField::Name,
        };
    }

    /// Append a character to the active field.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            SongField::Name => self.name.push(ch),
            SongField::Artist => self.artist.push(ch),
            SongField::Duration => self.duration.push(ch),
        }
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            SongField::Name => {
                self.name.pop();
            }
            SongField::Artist => {
                self.artist.pop();
            }
            SongField::Duration => {
                self.duration.pop();
            }
        }
    }

    fn value(&self, field: SongField) -> &str {
        match field {
            SongField::Name => &self.name,
            SongField::Artist => &self.artist,
            SongField::Duration => &self.duration,
        }
    }

    /// Render a styled line for the form widget.
    pub(crate) fn build_line(&self, field_name: &str, field: SongField) -> Line<'static> {
        build_field_line(field_name, self.value(field), self.active == field)
    }
}

/// Fields of the playlist screen, spanning both stacked forms: the
/// playlist adder (one field) and the attach-song form (two fields, song
/// name first like the original layout).
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum ModifierField {
    #[default]
    PlaylistName,
    AttachSong,
    AttachPlaylist,
}

/// Raw inputs for the playlist screen. Enter submits whichever of the two
/// forms holds the focused field.
#[derive(Default, Clone)]
pub(crate) struct ModifierForm {
    pub(crate) playlist_name: String,
    pub(crate) song_name: String,
    pub(crate) target_playlist: String,
    pub(crate) active: ModifierField,
}

impl ModifierForm {
    /// Cycle focus through the adder field and then the attach fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            ModifierField::PlaylistName => ModifierField::AttachSong,
            ModifierField::AttachSong => ModifierField::AttachPlaylist,
            ModifierField::AttachPlaylist => ModifierField::PlaylistName,
        };
    }

    /// Whether the focus sits in the playlist-adder form.
    pub(crate) fn in_adder(&self) -> bool {
        self.active == ModifierField::PlaylistName
    }

    /// Append a character to the active field.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            ModifierField::PlaylistName => self.playlist_name.push(ch),
            ModifierField::AttachSong => self.song_name.push(ch),
            ModifierField::AttachPlaylist => self.target_playlist.push(ch),
        }
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            ModifierField::PlaylistName => {
                self.playlist_name.pop();
            }
            ModifierField::AttachSong => {
                self.song_name.pop();
            }
            ModifierField::AttachPlaylist => {
                self.target_playlist.pop();
            }
        }
    }

    /// Reset the adder form after a successful playlist creation.
    pub(crate) fn clear_adder(&mut self) {
        self.playlist_name.clear();
    }

    /// Reset the attach form after a successful attachment.
    pub(crate) fn clear_attach(&mut self) {
        self.song_name.clear();
        self.target_playlist.clear();
    }

    fn value(&self, field: ModifierField) -> &str {
        match field {
            ModifierField::PlaylistName => &self.playlist_name,
            ModifierField::AttachSong => &self.song_name,
            ModifierField::AttachPlaylist => &self.target_playlist,
        }
    }

    /// Render a styled line for the form widget.
    pub(crate) fn build_line(&self, field_name: &str, field: ModifierField) -> Line<'static> {
        build_field_line(field_name, self.value(field), self.active == field)
    }
}

/// Shared field rendering: yellow when focused, dim placeholder when empty.
fn build_field_line(field_name: &str, value: &str, is_active: bool) -> Line<'static> {
    let display = if value.is_empty() {
        "<required>".to_string()
    } else {
        value.to_string()
    };

    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(format!("{field_name}: ")),
        Span::styled(display, style),
    ])
}

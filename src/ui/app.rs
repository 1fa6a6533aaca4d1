use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::library::Library;
use crate::models::Playlist;

use super::forms::{ModifierField, ModifierForm, SongField, SongForm};
use super::helpers::{cover_motif, feedback_message, spread};
use super::screens::{PlaylistsScreen, SongsScreen};

/// Footer space reserved for status messages and key hints.
const FOOTER_HEIGHT: u16 = 3;

/// The four top-level screens, one per tab. Keeping this explicit makes it
/// easy to reason about which rendering path runs and where key presses go.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Screen {
    Playlists,
    Songs,
    SongAdder,
    PlaylistModifier,
}

impl Screen {
    fn title(self) -> &'static str {
        match self {
            Screen::Playlists => "Playlists",
            Screen::Songs => "Songs",
            Screen::SongAdder => "Add song",
            Screen::PlaylistModifier => "Edit playlists",
        }
    }
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. Owns the library and
/// routes every key press into either navigation, a browsing screen, or a
/// form; mutations always go through the library facade.
pub struct App {
    library: Library,
    screen: Screen,
    playlists_screen: PlaylistsScreen,
    songs_screen: SongsScreen,
    song_form: SongForm,
    modifier_form: ModifierForm,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(library: Library) -> Self {
        Self {
            library,
            screen: Screen::Playlists,
            playlists_screen: PlaylistsScreen::default(),
            songs_screen: SongsScreen::default(),
            song_form: SongForm::default(),
            modifier_form: ModifierForm::default(),
            status: None,
        }
    }

    /// Handle one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match self.screen {
            Screen::Playlists => Ok(self.handle_playlists_key(code)),
            Screen::Songs => Ok(self.handle_songs_key(code)),
            Screen::SongAdder => {
                self.handle_song_adder_key(code);
                Ok(false)
            }
            Screen::PlaylistModifier => {
                self.handle_modifier_key(code);
                Ok(false)
            }
        }
    }

    fn handle_playlists_key(&mut self, code: KeyCode) -> bool {
        let len = self.library.playlists().len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.playlists_screen.move_selection(-1, len),
            KeyCode::Down => self.playlists_screen.move_selection(1, len),
            KeyCode::Enter => self.playlists_screen.toggle_expanded(),
            _ => self.handle_navigation(code),
        }
        false
    }

    fn handle_songs_key(&mut self, code: KeyCode) -> bool {
        let len = self.library.songs().len();
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => self.switch_to(Screen::Playlists),
            KeyCode::Up => self.songs_screen.move_selection(-1, len),
            KeyCode::Down => self.songs_screen.move_selection(1, len),
            KeyCode::PageUp => self.songs_screen.move_selection(-5, len),
            KeyCode::PageDown => self.songs_screen.move_selection(5, len),
            KeyCode::Home => self.songs_screen.select_first(),
            KeyCode::End => self.songs_screen.select_last(len),
            _ => self.handle_navigation(code),
        }
        false
    }

    fn handle_song_adder_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.switch_to(Screen::Playlists),
            KeyCode::Tab | KeyCode::BackTab => self.song_form.toggle_field(),
            KeyCode::Enter => self.submit_song_form(),
            KeyCode::Backspace => self.song_form.backspace(),
            KeyCode::Char(ch) => {
                self.song_form.push_char(ch);
            }
            _ => {}
        }
    }

    fn handle_modifier_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.switch_to(Screen::Playlists),
            KeyCode::Tab | KeyCode::BackTab => self.modifier_form.toggle_field(),
            KeyCode::Enter => self.submit_modifier_form(),
            KeyCode::Backspace => self.modifier_form.backspace(),
            KeyCode::Char(ch) => {
                self.modifier_form.push_char(ch);
            }
            _ => {}
        }
    }

    /// Number keys mirror the original app's four top buttons. Only the
    /// browsing screens honor them; on form screens digits are input.
    fn handle_navigation(&mut self, code: KeyCode) {
        let target = match code {
            KeyCode::Char('1') => Screen::Playlists,
            KeyCode::Char('2') => Screen::Songs,
            KeyCode::Char('3') => Screen::SongAdder,
            KeyCode::Char('4') => Screen::PlaylistModifier,
            _ => return,
        };
        self.switch_to(target);
    }

    fn switch_to(&mut self, screen: Screen) {
        self.clear_status();
        self.screen = screen;
    }

    fn submit_song_form(&mut self) {
        let result = self.library.create_song(
            &self.song_form.name,
            &self.song_form.duration,
            &self.song_form.artist,
        );
        match result {
            Ok(()) => {
                self.song_form = SongForm::default();
                self.set_status("Song added.", StatusKind::Info);
            }
            Err(err) => self.set_status(feedback_message(&err), StatusKind::Error),
        }
    }

    fn submit_modifier_form(&mut self) {
        if self.modifier_form.in_adder() {
            match self.library.create_playlist(&self.modifier_form.playlist_name) {
                Ok(()) => {
                    self.modifier_form.clear_adder();
                    self.set_status("Playlist added.", StatusKind::Info);
                }
                Err(err) => self.set_status(feedback_message(&err), StatusKind::Error),
            }
        } else {
            let result = self.library.attach_song_to_playlist(
                &self.modifier_form.target_playlist,
                &self.modifier_form.song_name,
            );
            match result {
                Ok(()) => {
                    self.modifier_form.clear_attach();
                    self.set_status("Song added to playlist.", StatusKind::Info);
                }
                Err(err) => self.set_status(feedback_message(&err), StatusKind::Error),
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    /// Render the full frame: tab bar, active screen, footer.
    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(frame.area());

        self.draw_tabs(frame, chunks[0]);
        match self.screen {
            Screen::Playlists => self.draw_playlists(frame, chunks[1]),
            Screen::Songs => self.draw_songs(frame, chunks[1]),
            Screen::SongAdder => self.draw_song_adder(frame, chunks[1]),
            Screen::PlaylistModifier => self.draw_playlist_modifier(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let screens = [
            ('1', Screen::Playlists),
            ('2', Screen::Songs),
            ('3', Screen::SongAdder),
            ('4', Screen::PlaylistModifier),
        ];

        let mut spans = Vec::new();
        for (key, screen) in screens {
            let label = format!(" {key} {} ", screen.title());
            let style = if screen == self.screen {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_playlists(&mut self, frame: &mut Frame, area: Rect) {
        self.playlists_screen
            .ensure_in_bounds(self.library.playlists().len());
        let inner_width = area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = self
            .library
            .playlists()
            .iter()
            .enumerate()
            .map(|(index, playlist)| {
                let selected = index == self.playlists_screen.selected;
                let expanded = self.playlists_screen.is_expanded(index);
                ListItem::new(Text::from(playlist_card_lines(
                    playlist,
                    inner_width,
                    selected,
                    expanded,
                )))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Playlists (Enter to expand)"),
        );
        let mut state = ListState::default().with_selected(Some(self.playlists_screen.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_songs(&mut self, frame: &mut Frame, area: Rect) {
        self.songs_screen.ensure_in_bounds(self.library.songs().len());
        let inner_width = area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = self
            .library
            .songs()
            .iter()
            .enumerate()
            .map(|(index, song)| {
                let selected = index == self.songs_screen.selected;
                let title_style = if selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let lines = vec![
                    Line::from(Span::styled(
                        spread(&song.name, &song.format_duration(), inner_width),
                        title_style,
                    )),
                    Line::from(Span::styled(
                        song.artist.clone(),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(""),
                ];
                ListItem::new(Text::from(lines))
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Songs"));
        let mut state = ListState::default().with_selected(Some(self.songs_screen.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_song_adder(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            self.song_form.build_line("Song name", SongField::Name),
            self.song_form.build_line("Artist", SongField::Artist),
            self.song_form
                .build_line("Duration (seconds)", SongField::Duration),
            Line::from(""),
            hint_line("Enter adds the song, Tab switches fields."),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Add a song"))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn draw_playlist_modifier(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(6)])
            .split(area);

        let adder = Paragraph::new(vec![
            self.modifier_form
                .build_line("Playlist name", ModifierField::PlaylistName),
            Line::from(""),
            hint_line("Enter creates an empty playlist."),
        ])
        .block(Block::default().borders(Borders::ALL).title("New playlist"));
        frame.render_widget(adder, halves[0]);

        let attach = Paragraph::new(vec![
            self.modifier_form
                .build_line("Song name", ModifierField::AttachSong),
            self.modifier_form
                .build_line("Playlist", ModifierField::AttachPlaylist),
            Line::from(""),
            hint_line("Enter attaches the song to the playlist."),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Add song to playlist"),
        );
        frame.render_widget(attach, halves[1]);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(status) => Line::from(Span::styled(status.text.clone(), status.kind.style())),
            None => hint_line(match self.screen {
                Screen::Playlists => "Up/Down select, 2 songs, 3 add song, 4 playlists, q quit",
                Screen::Songs => "Up/Down select, 1 playlists, 3 add song, 4 playlists, q quit",
                Screen::SongAdder | Screen::PlaylistModifier => {
                    "Tab next field, Enter submit, Esc back"
                }
            }),
        };
        let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}

/// Dimmed single-line hint used in forms and the footer.
fn hint_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

/// Build the text block for one playlist card: motif plus name, the stats
/// row, and the member songs when expanded.
fn playlist_card_lines(
    playlist: &Playlist,
    width: usize,
    selected: bool,
    expanded: bool,
) -> Vec<Line<'static>> {
    let title_style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", cover_motif(playlist.cover())),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(playlist.name().to_string(), title_style),
        ]),
        Line::from(Span::styled(
            format!(
                "{}, {}",
                playlist.format_song_count(),
                playlist.format_duration()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if expanded {
        for song in playlist.songs() {
            let left = format!("  {} - {}", song.name, song.artist);
            lines.push(Line::from(Span::raw(spread(
                &left,
                &song.format_duration(),
                width,
            ))));
        }
    }

    lines.push(Line::from(""));
    lines
}

//! The application service the UI talks to. All user-visible validation
//! lives here: the catalogs store and look up, the screens render, and
//! this facade decides whether a mutation is allowed. Every operation
//! either fully applies its effect or applies none.

use std::rc::Rc;

use thiserror::Error;

use crate::catalog::{seed_catalogs, PlaylistCatalog, PlaylistNotFound, SongCatalog, SongNotFound};
use crate::models::{Cover, Playlist, Song};

/// Everything that can go wrong with a library mutation. All variants are
/// user-correctable; the UI turns them into footer messages and the inputs
/// stay on screen for another attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// A required text input was blank. Carries the field's display name.
    #[error("{0} is required")]
    EmptyField(&'static str),
    /// The name is already taken within the relevant catalog.
    #[error("{0} already exists")]
    DuplicateName(String),
    /// The duration text does not parse as an integer.
    #[error("{0:?} is not a whole number of seconds")]
    InvalidNumber(String),
    #[error(transparent)]
    SongNotFound(#[from] SongNotFound),
    #[error(transparent)]
    PlaylistNotFound(#[from] PlaylistNotFound),
}

/// Owns both catalogs and exposes the handful of operations the screens
/// call. Single-threaded by design: every mutation runs synchronously in
/// response to one key press, so no synchronization is needed. That would
/// change if the library ever served concurrent users.
#[derive(Debug, Default)]
pub struct Library {
    songs: SongCatalog,
    playlists: PlaylistCatalog,
}

impl Library {
    /// An empty library. Mostly useful in tests; the binary starts seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// A library pre-populated with the demo content.
    pub fn seeded() -> Self {
        let (songs, playlists) = seed_catalogs();
        Self { songs, playlists }
    }

    /// Validate and add a new song to the catalog.
    ///
    /// Empty-field checks run name, artist, duration, so when several
    /// fields are blank the name complaint wins; screens show a single
    /// message and this ordering is what users have always seen. The
    /// duplicate check runs before the duration parse, and the parse
    /// accepts any integer, zero or negative included.
    pub fn create_song(
        &mut self,
        name: &str,
        duration_text: &str,
        artist: &str,
    ) -> Result<(), LibraryError> {
        if name.is_empty() {
            return Err(LibraryError::EmptyField("Song name"));
        }
        if artist.is_empty() {
            return Err(LibraryError::EmptyField("Artist"));
        }
        if duration_text.is_empty() {
            return Err(LibraryError::EmptyField("Duration"));
        }
        if self.songs.exists(name) {
            return Err(LibraryError::DuplicateName(name.to_string()));
        }
        let duration = duration_text
            .parse::<i64>()
            .map_err(|_| LibraryError::InvalidNumber(duration_text.to_string()))?;

        self.songs.insert(Rc::new(Song::new(name, duration, artist)));
        Ok(())
    }

    /// Validate and add a new, empty playlist with the default cover.
    pub fn create_playlist(&mut self, name: &str) -> Result<(), LibraryError> {
        if name.is_empty() {
            return Err(LibraryError::EmptyField("Playlist name"));
        }
        if self.playlists.exists(name) {
            return Err(LibraryError::DuplicateName(name.to_string()));
        }

        self.playlists
            .insert(Playlist::new(name, Cover::default(), Vec::new()));
        Ok(())
    }

    /// Attach an existing song to an existing playlist.
    ///
    /// A blank song name outranks a blank playlist name, and the playlist
    /// lookup runs before the song lookup, so a missing playlist wins when
    /// both are missing. Both orderings are observable through the single
    /// message the screens display.
    pub fn attach_song_to_playlist(
        &mut self,
        playlist_name: &str,
        song_name: &str,
    ) -> Result<(), LibraryError> {
        if song_name.is_empty() {
            return Err(LibraryError::EmptyField("Song name"));
        }
        if playlist_name.is_empty() {
            return Err(LibraryError::EmptyField("Playlist name"));
        }

        let playlist = self.playlists.find_mut(playlist_name)?;
        let song = Rc::clone(self.songs.find(song_name)?);
        playlist.add_song(song);
        Ok(())
    }

    /// All songs in catalog order. Read-only; no validation.
    pub fn songs(&self) -> &[Rc<Song>] {
        self.songs.songs()
    }

    /// All playlists in catalog order. Read-only; no validation.
    pub fn playlists(&self) -> &[Playlist] {
        self.playlists.playlists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_song_rejects_blank_fields_with_name_winning() {
        let mut library = Library::new();

        let err = library.create_song("", "", "").unwrap_err();
        assert_eq!(err, LibraryError::EmptyField("Song name"));

        let err = library.create_song("Tune", "", "").unwrap_err();
        assert_eq!(err, LibraryError::EmptyField("Artist"));

        let err = library.create_song("Tune", "", "Someone").unwrap_err();
        assert_eq!(err, LibraryError::EmptyField("Duration"));

        assert!(library.songs().is_empty(), "no partial effect on failure");
    }

    #[test]
    fn create_song_rejects_unparseable_durations() {
        let mut library = Library::new();
        let err = library.create_song("Tune", "abc", "Someone").unwrap_err();
        assert_eq!(err, LibraryError::InvalidNumber("abc".to_string()));
        assert!(library.songs().is_empty());
    }

    #[test]
    fn create_song_accepts_zero_and_negative_durations() {
        // No range check: anything that parses as an integer goes in.
        let mut library = Library::new();
        library.create_song("Silence", "0", "Nobody").unwrap();
        library.create_song("Antimatter", "-5", "Nobody").unwrap();
        assert_eq!(library.songs().len(), 2);
        assert_eq!(library.songs()[1].duration, -5);
    }

    #[test]
    fn create_song_rejects_duplicate_names_before_parsing() {
        let mut library = Library::new();
        library.create_song("Tune", "120", "Someone").unwrap();

        // The duplicate check fires even though this duration is garbage.
        let err = library.create_song("Tune", "abc", "Else").unwrap_err();
        assert_eq!(err, LibraryError::DuplicateName("Tune".to_string()));
        assert_eq!(library.songs().len(), 1);
    }

    #[test]
    fn create_playlist_validates_name_and_uniqueness() {
        let mut library = Library::seeded();

        let err = library.create_playlist("").unwrap_err();
        assert_eq!(err, LibraryError::EmptyField("Playlist name"));

        let before = library.playlists().len();
        let err = library.create_playlist("Sweet Piano").unwrap_err();
        assert_eq!(err, LibraryError::DuplicateName("Sweet Piano".to_string()));
        assert_eq!(library.playlists().len(), before, "catalog size unchanged");

        library.create_playlist("Late Night").unwrap();
        let playlist = library.playlists().last().unwrap();
        assert_eq!(playlist.name(), "Late Night");
        assert!(playlist.songs().is_empty());
        assert_eq!(playlist.cover(), Cover::default());
    }

    #[test]
    fn attach_rejects_blank_names_with_song_winning() {
        let mut library = Library::seeded();

        let err = library.attach_song_to_playlist("", "").unwrap_err();
        assert_eq!(err, LibraryError::EmptyField("Song name"));

        let err = library
            .attach_song_to_playlist("", "La Havane")
            .unwrap_err();
        assert_eq!(err, LibraryError::EmptyField("Playlist name"));
    }

    #[test]
    fn attach_reports_missing_playlist_before_missing_song() {
        let mut library = Library::seeded();

        // The song exists; the playlist check still runs first.
        let err = library
            .attach_song_to_playlist("NoSuchPlaylist", "La Havane")
            .unwrap_err();
        assert_eq!(
            err,
            LibraryError::PlaylistNotFound(PlaylistNotFound("NoSuchPlaylist".to_string()))
        );

        // Both missing: the playlist complaint wins.
        let err = library
            .attach_song_to_playlist("NoSuchPlaylist", "NoSuchSong")
            .unwrap_err();
        assert!(matches!(err, LibraryError::PlaylistNotFound(_)));

        let err = library
            .attach_song_to_playlist("Sweet Piano", "NoSuchSong")
            .unwrap_err();
        assert_eq!(
            err,
            LibraryError::SongNotFound(SongNotFound("NoSuchSong".to_string()))
        );
    }

    #[test]
    fn attach_updates_count_and_duration() {
        let mut library = Library::seeded();
        library
            .attach_song_to_playlist("Sweet Piano", "Gamesofluck")
            .unwrap();

        let playlist = library.playlists().first().unwrap();
        assert_eq!(playlist.total_duration(), 1490);
        assert_eq!(playlist.format_song_count(), "7 songs");
        assert_eq!(playlist.format_duration(), "24 min");
    }

    #[test]
    fn attach_allows_the_same_song_twice() {
        let mut library = Library::seeded();
        library
            .attach_song_to_playlist("Sweet Piano", "La Havane")
            .unwrap();
        library
            .attach_song_to_playlist("Sweet Piano", "La Havane")
            .unwrap();

        let playlist = library.playlists().first().unwrap();
        assert_eq!(playlist.format_song_count(), "8 songs");
        assert_eq!(playlist.total_duration(), 1142 + 186 + 186);
    }

    #[test]
    fn a_song_can_belong_to_several_playlists() {
        let mut library = Library::seeded();
        library.create_playlist("Favorites").unwrap();
        library
            .attach_song_to_playlist("Favorites", "La Havane")
            .unwrap();

        // Still a member of Sweet Piano, now also of Favorites, and both
        // point at the same catalog entry.
        let sweet = &library.playlists()[0].songs()[0];
        let favorites = &library.playlists()[2].songs()[0];
        assert!(Rc::ptr_eq(sweet, favorites));
    }
}

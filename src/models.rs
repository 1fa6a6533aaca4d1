//! Domain models shared by the catalogs, the library facade, and the TUI.
//! These types stay light-weight data holders so the other layers can focus
//! on validation and presentation. The formatting helpers live here because
//! every view that shows a duration or a song count renders the exact same
//! strings; keeping them next to the data avoids drift between screens.

use std::rc::Rc;

/// An immutable song. Songs are owned canonically by the song catalog and
/// shared into playlists via `Rc`, so one song can sit in any number of
/// playlists without being copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Display name, also the lookup key within the song catalog.
    pub name: String,
    /// Length in seconds. Signed because the facade accepts any text that
    /// parses as an integer; it performs no range check.
    pub duration: i64,
    /// Artist credit shown under the name in list views.
    pub artist: String,
}

impl Song {
    pub fn new(name: impl Into<String>, duration: i64, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration,
            artist: artist.into(),
        }
    }

    /// Render the duration as `M:SS`, minutes unpadded and seconds always
    /// two digits: 186 becomes `3:06`, 59 becomes `0:59`.
    pub fn format_duration(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }
}

/// Opaque reference to a playlist's display art. The TUI resolves the index
/// against its art table; nothing in the domain looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cover(pub usize);

impl Cover {
    /// Art assigned to the playlists seeded at startup.
    pub const CLASSIC: Cover = Cover(0);
}

impl Default for Cover {
    /// Art assigned to playlists the user creates.
    fn default() -> Self {
        Cover(1)
    }
}

/// A named, ordered collection of songs. The cached total duration is kept
/// in lockstep with the member list: summed once at construction, then
/// bumped incrementally on every `add_song`, never recomputed by rescan.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    cover: Cover,
    songs: Vec<Rc<Song>>,
    total_duration: i64,
}

impl Playlist {
    /// Build a playlist from an initial member list, which may be empty.
    /// Membership order is insertion order and duplicates are permitted.
    pub fn new(name: impl Into<String>, cover: Cover, songs: Vec<Rc<Song>>) -> Self {
        let total_duration = songs.iter().map(|song| song.duration).sum();
        Self {
            name: name.into(),
            cover,
            songs,
            total_duration,
        }
    }

    /// Lookup key within the playlist catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cover(&self) -> Cover {
        self.cover
    }

    /// Append a song and grow the cached total by its duration. Always
    /// succeeds; the same song may be added more than once.
    pub fn add_song(&mut self, song: Rc<Song>) {
        self.total_duration += song.duration;
        self.songs.push(song);
    }

    /// Current member list in insertion order.
    pub fn songs(&self) -> &[Rc<Song>] {
        &self.songs
    }

    /// Sum of member durations in seconds.
    pub fn total_duration(&self) -> i64 {
        self.total_duration
    }

    /// Render the total duration. Above one hour the minutes component is
    /// TOTAL minutes, not the remainder after whole hours, so 3700 seconds
    /// renders as `1 h 61 min`. Existing displays depend on this exact
    /// string; see DESIGN.md before changing it.
    pub fn format_duration(&self) -> String {
        if self.total_duration > 3600 {
            format!(
                "{} h {} min",
                self.total_duration / 3600,
                self.total_duration / 60
            )
        } else {
            format!("{} min", self.total_duration / 60)
        }
    }

    /// Render the member count as `N songs`. No singular form.
    pub fn format_song_count(&self) -> String {
        format!("{} songs", self.songs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(name: &str, duration: i64) -> Rc<Song> {
        Rc::new(Song::new(name, duration, "Tester"))
    }

    #[test]
    fn song_duration_pads_seconds_to_two_digits() {
        assert_eq!(Song::new("a", 65, "x").format_duration(), "1:05");
        assert_eq!(Song::new("b", 59, "x").format_duration(), "0:59");
        assert_eq!(Song::new("c", 186, "x").format_duration(), "3:06");
        assert_eq!(Song::new("d", 600, "x").format_duration(), "10:00");
    }

    #[test]
    fn playlist_sums_initial_songs_at_construction() {
        let playlist = Playlist::new(
            "Mix",
            Cover::default(),
            vec![song("a", 100), song("b", 42)],
        );
        assert_eq!(playlist.total_duration(), 142);
    }

    #[test]
    fn add_song_keeps_total_in_lockstep_after_every_mutation() {
        let mut playlist = Playlist::new("Mix", Cover::default(), vec![song("a", 30)]);
        assert_eq!(playlist.total_duration(), 30);

        playlist.add_song(song("b", 90));
        assert_eq!(playlist.total_duration(), 120);

        // Duplicates are allowed and counted twice.
        playlist.add_song(song("b", 90));
        assert_eq!(playlist.total_duration(), 210);
        assert_eq!(playlist.songs().len(), 3);
    }

    #[test]
    fn short_playlist_renders_total_minutes() {
        let playlist = Playlist::new("Mix", Cover::default(), vec![song("a", 1142)]);
        assert_eq!(playlist.format_duration(), "19 min");
    }

    #[test]
    fn exactly_one_hour_stays_on_the_minutes_path() {
        let playlist = Playlist::new("Mix", Cover::default(), vec![song("a", 3600)]);
        assert_eq!(playlist.format_duration(), "60 min");
    }

    #[test]
    fn long_playlist_renders_total_minutes_next_to_hours() {
        // 3700 seconds is 1 h and 61 total minutes; the minutes component
        // is deliberately not the remainder after hours.
        let playlist = Playlist::new("Mix", Cover::default(), vec![song("a", 3700)]);
        assert_eq!(playlist.format_duration(), "1 h 61 min");
    }

    #[test]
    fn song_count_has_no_singular_form() {
        let mut playlist = Playlist::new("Mix", Cover::default(), Vec::new());
        assert_eq!(playlist.format_song_count(), "0 songs");
        playlist.add_song(song("a", 10));
        assert_eq!(playlist.format_song_count(), "1 songs");
    }

    #[test]
    fn membership_preserves_insertion_order() {
        let mut playlist = Playlist::new("Mix", Cover::default(), vec![song("a", 1)]);
        playlist.add_song(song("b", 2));
        playlist.add_song(song("c", 3));
        let names: Vec<&str> = playlist.songs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}

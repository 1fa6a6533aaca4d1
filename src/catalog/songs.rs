//! The canonical song collection. Playlists never own songs themselves;
//! they hold `Rc` handles into this catalog, so the catalog's iteration
//! order is the display order everywhere songs are listed.

use std::rc::Rc;

use thiserror::Error;

use crate::models::Song;

/// Lookup failure for a song name. Carries the name so presentation can
/// echo it back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no song named {0}")]
pub struct SongNotFound(pub String);

/// Insertion-ordered collection of songs keyed by exact, case-sensitive
/// name. Lives for the whole process; there is no teardown.
#[derive(Debug, Default)]
pub struct SongCatalog {
    songs: Vec<Rc<Song>>,
}

impl SongCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a song with exactly this name is present.
    pub fn exists(&self, name: &str) -> bool {
        self.songs.iter().any(|song| song.name == name)
    }

    /// Look up a song by name.
    pub fn find(&self, name: &str) -> Result<&Rc<Song>, SongNotFound> {
        self.songs
            .iter()
            .find(|song| song.name == name)
            .ok_or_else(|| SongNotFound(name.to_string()))
    }

    /// Append a song. Callers are expected to have checked `exists` first;
    /// the catalog itself does not reject duplicate names. The library
    /// facade is the only writer and performs that check.
    pub fn insert(&mut self, song: Rc<Song>) {
        self.songs.push(song);
    }

    /// All songs in insertion order.
    pub fn songs(&self) -> &[Rc<Song>] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Song;

    #[test]
    fn exists_reflects_inserts_exactly() {
        let mut catalog = SongCatalog::new();
        assert!(!catalog.exists("La Havane"));

        catalog.insert(Rc::new(Song::new("La Havane", 186, "Sofiane Pamart")));
        assert!(catalog.exists("La Havane"));
        assert!(!catalog.exists("la havane"), "matching is case-sensitive");
        assert!(!catalog.exists("Medellin"));
    }

    #[test]
    fn find_returns_the_inserted_song_or_the_missing_name() {
        let mut catalog = SongCatalog::new();
        catalog.insert(Rc::new(Song::new("Overnight", 220, "Parcels")));

        let song = catalog.find("Overnight").unwrap();
        assert_eq!(song.duration, 220);

        let err = catalog.find("Hideout").unwrap_err();
        assert_eq!(err, SongNotFound("Hideout".to_string()));
    }

    #[test]
    fn iteration_order_is_insertion_order() {
        let mut catalog = SongCatalog::new();
        catalog.insert(Rc::new(Song::new("b", 1, "x")));
        catalog.insert(Rc::new(Song::new("a", 2, "x")));
        let names: Vec<&str> = catalog.songs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }
}

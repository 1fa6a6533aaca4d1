//! The canonical playlist collection, symmetric to the song catalog. The
//! mutable lookup exists because attaching a song mutates the playlist in
//! place while the song catalog is only read.

use thiserror::Error;

use crate::models::Playlist;

/// Lookup failure for a playlist name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no playlist named {0}")]
pub struct PlaylistNotFound(pub String);

/// Insertion-ordered collection of playlists keyed by exact,
/// case-sensitive name.
#[derive(Debug, Default)]
pub struct PlaylistCatalog {
    playlists: Vec<Playlist>,
}

impl PlaylistCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a playlist with exactly this name is present.
    pub fn exists(&self, name: &str) -> bool {
        self.playlists.iter().any(|playlist| playlist.name() == name)
    }

    /// Look up a playlist by name.
    pub fn find(&self, name: &str) -> Result<&Playlist, PlaylistNotFound> {
        self.playlists
            .iter()
            .find(|playlist| playlist.name() == name)
            .ok_or_else(|| PlaylistNotFound(name.to_string()))
    }

    /// Look up a playlist for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Result<&mut Playlist, PlaylistNotFound> {
        self.playlists
            .iter_mut()
            .find(|playlist| playlist.name() == name)
            .ok_or_else(|| PlaylistNotFound(name.to_string()))
    }

    /// Append a playlist. Same contract as the song catalog: the facade
    /// checks `exists` beforehand, the catalog does not re-validate.
    pub fn insert(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// All playlists in insertion order.
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

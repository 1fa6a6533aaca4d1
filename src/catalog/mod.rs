//! In-memory catalogs split across logical submodules. Each catalog owns
//! the canonical, insertion-ordered collection of one entity type and is
//! the uniqueness boundary for that type's names.

mod playlists;
mod seed;
mod songs;

pub use playlists::{PlaylistCatalog, PlaylistNotFound};
pub use seed::seed_catalogs;
pub use songs::{SongCatalog, SongNotFound};

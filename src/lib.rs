//! Core library surface for the playlist manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so
//! the `bin` target as well as potential external tooling can reuse the
//! same pieces: the domain models, the in-memory catalogs, and the facade
//! that owns all validation.

pub mod catalog;
pub mod library;
pub mod models;
pub mod ui;

/// The facade other layers drive, plus its structured error type.
pub use library::{Library, LibraryError};

/// The primary domain types that other layers manipulate.
pub use models::{Cover, Playlist, Song};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};

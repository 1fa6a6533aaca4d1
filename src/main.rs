//! Binary entry point that glues the in-memory library to the TUI. The
//! bootstrapping pipeline is short: seed the catalogs with the demo
//! content, hydrate the app state, and drive the Ratatui event loop until
//! the user exits.
use playlist_manager::{run_app, App, Library};

/// Seed the library and launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal terminal-setup problems (raw
/// mode, alternate screen) to the shell instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let library = Library::seeded();
    let mut app = App::new(library);
    run_app(&mut app)
}

//! Terminal presentation layer split across logical submodules. Nothing in
//! here contains business rules; every mutation goes through the library
//! facade and every message shown to the user is derived from the facade's
//! structured errors.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;

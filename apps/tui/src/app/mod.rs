// App module for ratatui_reg-form
// Handles application state and form logic

pub mod form;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen, EntryRow};

// UI module for ratatui_reg-form
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Entry => screens::entry::render_entry(app, f),
        AppScreen::Confirmation => screens::confirmation::render_confirmation(app, f),
    }
}

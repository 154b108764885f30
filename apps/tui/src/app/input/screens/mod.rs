use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod confirmation;
mod entry;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    match app.screen {
        AppScreen::Entry => entry::handle_entry_input(app, key),
        AppScreen::Confirmation => confirmation::handle_confirmation_input(app, key),
    }
}

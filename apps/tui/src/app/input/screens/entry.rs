use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, EntryRow};
use crate::domain::Field;
use crossterm::event::KeyCode;

pub fn handle_entry_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            if app.editing {
                app.editing = false;
            } else {
                app.running = false;
            }
        }
        KeyCode::Up if !app.editing => {
            app.entry_index = wrap_decrement(app.entry_index, EntryRow::COUNT);
        }
        KeyCode::Down if !app.editing => {
            app.entry_index = wrap_increment(app.entry_index, EntryRow::COUNT);
        }
        KeyCode::Enter => handle_enter(app),
        KeyCode::Char('q') if !app.editing => {
            app.running = false;
        }
        KeyCode::Char('t' | 'T')
            if !app.editing && app.focused_row() == EntryRow::Field(Field::Password) =>
        {
            app.password_visible = !app.password_visible;
        }
        _ => {
            if app.editing {
                handle_edit_key(app, key);
            }
        }
    }
}

fn handle_enter(app: &mut App) {
    match app.focused_row() {
        EntryRow::Submit => {
            app.editing = false;
            app.submit_form();
        }
        EntryRow::Field(_) => {
            app.editing = !app.editing;
        }
    }
}

/// Keystrokes while a row is in edit mode. Country and city are closed
/// selects cycled with the arrow keys; everything else is free text.
fn handle_edit_key(app: &mut App, key: KeyCode) {
    let Some(field) = app.focused_row().field() else {
        return;
    };

    match (field, key) {
        (Field::Country, KeyCode::Left) => app.cycle_country(false),
        (Field::Country, KeyCode::Right) => app.cycle_country(true),
        (Field::City, KeyCode::Left) => app.cycle_city(false),
        (Field::City, KeyCode::Right) => app.cycle_city(true),
        (Field::Country | Field::City, _) => {}
        (_, KeyCode::Char(ch)) => {
            let mut value = app.form.fields().get(field).to_string();
            value.push(ch);
            app.form.set_field(field, value);
        }
        (_, KeyCode::Backspace) => {
            let mut value = app.form.fields().get(field).to_string();
            value.pop();
            app.form.set_field(field, value);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountryCityTable;

    fn app() -> App {
        App::new(CountryCityTable::builtin())
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_entry_input(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_edits_only_the_focused_field() {
        let mut app = app();
        handle_entry_input(&mut app, KeyCode::Enter); // edit firstName
        type_text(&mut app, "Ann");
        handle_entry_input(&mut app, KeyCode::Enter); // confirm

        assert_eq!(app.form.fields().first_name, "Ann");
        assert_eq!(app.form.fields().last_name, "");
        assert!(!app.editing);
    }

    #[test]
    fn backspace_removes_the_last_character() {
        let mut app = app();
        handle_entry_input(&mut app, KeyCode::Enter);
        type_text(&mut app, "Anna");
        handle_entry_input(&mut app, KeyCode::Backspace);

        assert_eq!(app.form.fields().first_name, "Ann");
    }

    #[test]
    fn select_rows_cycle_instead_of_accepting_text() {
        let mut app = app();
        app.entry_index = 7; // country row
        handle_entry_input(&mut app, KeyCode::Enter);
        type_text(&mut app, "Atlantis");
        assert_eq!(app.form.fields().country, "", "selects reject free text");

        handle_entry_input(&mut app, KeyCode::Right);
        assert_eq!(app.form.fields().country, "India");
    }

    #[test]
    fn password_visibility_toggles_on_the_password_row_only() {
        let mut app = app();
        handle_entry_input(&mut app, KeyCode::Char('t'));
        assert!(!app.password_visible, "toggle is scoped to the password row");

        app.entry_index = 4; // password row
        handle_entry_input(&mut app, KeyCode::Char('t'));
        assert!(app.password_visible);
        handle_entry_input(&mut app, KeyCode::Char('t'));
        assert!(!app.password_visible);
    }

    #[test]
    fn enter_on_the_submit_row_runs_validation_without_navigating_when_invalid() {
        let mut app = app();
        app.entry_index = EntryRow::COUNT - 1;
        handle_entry_input(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, crate::app::state::AppScreen::Entry);
        assert!(!app.form.errors().is_empty());
    }

    #[test]
    fn esc_leaves_edit_mode_before_quitting() {
        let mut app = app();
        handle_entry_input(&mut app, KeyCode::Enter);
        assert!(app.editing);

        handle_entry_input(&mut app, KeyCode::Esc);
        assert!(!app.editing);
        assert!(app.running);

        handle_entry_input(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn focus_wraps_across_all_rows() {
        let mut app = app();
        handle_entry_input(&mut app, KeyCode::Up);
        assert_eq!(app.focused_row(), EntryRow::Submit);
        handle_entry_input(&mut app, KeyCode::Down);
        assert_eq!(app.entry_index, 0);
    }
}

use crate::app::form::FormState;
use crate::domain::{CountryCityTable, Field, Snapshot};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Entry,
    Confirmation,
}

/// A focusable row on the entry screen: one per field, plus the submit row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRow {
    Field(Field),
    Submit,
}

impl EntryRow {
    pub const COUNT: usize = Field::ALL.len() + 1;

    pub const fn from_index(index: usize) -> Self {
        if index < Field::ALL.len() {
            Self::Field(Field::ALL[index])
        } else {
            Self::Submit
        }
    }

    pub const fn field(self) -> Option<Field> {
        match self {
            Self::Field(field) => Some(field),
            Self::Submit => None,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub form: FormState,
    pub table: CountryCityTable,
    pub submitted: Option<Snapshot>,
    pub status_message: String,
    pub entry_index: usize,
    pub editing: bool,
    pub password_visible: bool,
}

impl App {
    pub fn new(table: CountryCityTable) -> Self {
        Self {
            running: true,
            screen: AppScreen::Entry,
            form: FormState::new(),
            table,
            submitted: None,
            status_message: String::new(),
            entry_index: 0,
            editing: false,
            password_visible: false,
        }
    }

    pub const fn focused_row(&self) -> EntryRow {
        EntryRow::from_index(self.entry_index)
    }

    /// Runs a validation pass over the live fields. On success, switches to
    /// the confirmation screen carrying a snapshot of the submitted values;
    /// on failure, the form keeps its error set and nothing navigates.
    pub fn submit_form(&mut self) {
        match self.form.submit() {
            Some(snapshot) => {
                self.status_message.clear();
                self.go_to_confirmation(snapshot);
            }
            None => {
                self.status_message = "Fix the highlighted fields before submitting".to_string();
            }
        }
    }

    /// Switches the active view to the confirmation screen. Trusts the
    /// caller; no validation happens here.
    pub fn go_to_confirmation(&mut self, snapshot: Snapshot) {
        self.submitted = Some(snapshot);
        self.screen = AppScreen::Confirmation;
    }

    /// Returns to the entry screen with a fresh controller and default
    /// field values. The previous snapshot is discarded.
    pub fn reset_entry(&mut self) {
        self.form = FormState::new();
        self.submitted = None;
        self.screen = AppScreen::Entry;
        self.entry_index = 0;
        self.editing = false;
        self.password_visible = false;
        self.status_message.clear();
    }

    /// Country options as rendered: a leading unselected choice, then the
    /// table's countries in order.
    pub fn country_options(&self) -> Vec<String> {
        let mut options = vec![String::new()];
        options.extend(self.table.countries().iter().map(ToString::to_string));
        options
    }

    /// City options for the currently selected country. A country outside
    /// the table (or none) offers only the unselected choice.
    pub fn city_options(&self) -> Vec<String> {
        let mut options = vec![String::new()];
        options.extend(
            self.table
                .cities(self.form.fields().get(Field::Country))
                .iter()
                .cloned(),
        );
        options
    }

    pub fn cycle_country(&mut self, forward: bool) {
        let next = Self::cycle(
            &self.country_options(),
            self.form.fields().get(Field::Country),
            forward,
        );
        // A stale city from the previous country is left as-is.
        self.form.set_field(Field::Country, next);
    }

    pub fn cycle_city(&mut self, forward: bool) {
        let next = Self::cycle(
            &self.city_options(),
            self.form.fields().get(Field::City),
            forward,
        );
        self.form.set_field(Field::City, next);
    }

    fn cycle(options: &[String], current: &str, forward: bool) -> String {
        let position = options
            .iter()
            .position(|option| option == current)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };
        options[next].clone()
    }
}

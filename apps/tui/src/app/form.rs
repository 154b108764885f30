use crate::domain::{ErrorSet, Field, FieldSet, Snapshot};
use crate::validate::validate;

/// Lifecycle of one form controller instance. `Submitted` is terminal; a
/// fresh controller is built when the user navigates back to the entry view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

/// Holds the live field values and the error set from the last submit
/// attempt. All field mutation goes through `set_field`, which touches
/// exactly one field and never re-runs validation on its own.
#[derive(Debug)]
pub struct FormState {
    fields: FieldSet,
    errors: ErrorSet,
    phase: FormPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldSet::default(),
            errors: ErrorSet::new(),
            phase: FormPhase::Editing,
        }
    }

    pub const fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub const fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Raw, unvalidated write of one field. Prior errors for the field are
    /// left in place until the next submit recomputes the error set.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.phase == FormPhase::Submitted {
            return;
        }
        self.fields.set(field, value);
    }

    /// Live validity check, recomputed on every call. The entry screen
    /// calls this each render to decide the submit row's enabled state.
    pub fn submit_enabled(&self) -> bool {
        validate(&self.fields).is_empty()
    }

    /// Runs a full validation pass. On success the stored error set is
    /// emptied, the phase becomes `Submitted`, and a snapshot of the field
    /// values is returned for the confirmation view. On failure the fresh
    /// error set replaces the old one and no snapshot is produced.
    pub fn submit(&mut self) -> Option<Snapshot> {
        if self.phase == FormPhase::Submitted {
            return None;
        }

        self.errors = validate(&self.fields);
        if self.errors.is_empty() {
            self.phase = FormPhase::Submitted;
            Some(Snapshot::take(&self.fields))
        } else {
            None
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

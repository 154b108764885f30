use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::domain::{ErrorSet, FieldSet};
use crate::ui;
use crate::validate::validate;

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }
    Ok(())
}

#[derive(serde::Serialize)]
pub struct HeadlessReport {
    pub valid: bool,
    pub errors: ErrorSet,
}

pub fn build_headless_report(fields: &FieldSet) -> HeadlessReport {
    let errors = validate(fields);
    HeadlessReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Validate a field set without starting the UI and print a report.
/// Returns whether the field set passed validation.
pub fn run_headless(fields: &FieldSet, json: bool) -> Result<bool> {
    let report = build_headless_report(fields);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\nRegistration Check");
        println!("==================");
        if report.valid {
            println!("All fields pass validation.");
        } else {
            for (field, message) in &report.errors {
                println!("- {}: {message}", field.key());
            }
            println!(
                "\n{} field(s) failed validation.",
                report.errors.len()
            );
        }
    }

    Ok(report.valid)
}

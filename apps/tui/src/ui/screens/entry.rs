use crate::app::state::EntryRow;
use crate::app::App;
use crate::domain::Field;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_entry(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let form_area = Rect {
        x: area.width.saturating_sub(64) / 2,
        y: area.height.saturating_sub(32) / 2,
        width: 64.min(area.width),
        height: 32.min(area.height),
    };

    let block = Block::default()
        .title("Registration")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Field rows with inline errors
            Constraint::Length(3), // Submit
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help text
        ])
        .split(form_area);

    let row_style = |row: EntryRow| {
        let is_selected = app.focused_row() == row;
        let is_editing = is_selected && app.editing;

        if is_editing {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let mut lines = Vec::new();
    for field in Field::ALL {
        let row = EntryRow::Field(field);
        let prefix = if app.focused_row() == row && app.editing {
            "► "
        } else if app.focused_row() == row {
            "> "
        } else {
            "  "
        };

        lines.push(TextLine::from(vec![
            Span::styled(format!("{prefix}{}: ", field.label()), row_style(row)),
            Span::styled(field_display(app, field), row_style(row)),
        ]));

        // Errors from the last submit attempt sit directly under their row.
        if let Some(message) = app.form.error(field) {
            lines.push(TextLine::from(Span::styled(
                format!("    {message}"),
                Style::default().fg(Color::Red),
            )));
        }
    }
    f.render_widget(Paragraph::new(Text::from(lines)), chunks[0]);

    // The submit row's enabled state tracks the live field values, so it is
    // recomputed every render rather than on submit only.
    let enabled = app.form.submit_enabled();
    let submit_style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        row_style(EntryRow::Submit).fg(Color::Green)
    };
    let submit_block = Block::default()
        .borders(Borders::ALL)
        .border_style(submit_style);
    let submit_label = if enabled {
        "Submit Form"
    } else {
        "Submit Form (complete the fields above)"
    };
    let submit = Paragraph::new(Text::from(Span::styled(submit_label, submit_style)))
        .block(submit_block)
        .alignment(Alignment::Center);
    f.render_widget(submit, chunks[1]);

    if !app.status_message.is_empty() {
        let status = Paragraph::new(app.status_message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red));
        f.render_widget(status, chunks[2]);
    }

    let help_text = if app.editing {
        match app.focused_row() {
            EntryRow::Field(Field::Country | Field::City) => {
                "Editing: ←/→ cycle options, Enter confirm, Esc cancel"
            }
            _ => "Editing: type to edit, Enter confirm, Esc cancel",
        }
    } else if app.focused_row() == EntryRow::Field(Field::Password) {
        "Navigate: ↑/↓ select, Enter edit, t show/hide password, Esc quit"
    } else {
        "Navigate: ↑/↓ select, Enter edit/submit, Esc quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(help, chunks[3]);
}

/// Value as shown on screen: passwords are masked unless toggled visible,
/// empty selects show their placeholder option.
fn field_display(app: &App, field: Field) -> String {
    let value = app.form.fields().get(field);
    match field {
        Field::Password if !app.password_visible => "*".repeat(value.chars().count()),
        Field::Country if value.is_empty() => "--Choose Country--".to_string(),
        Field::City if value.is_empty() => "--Choose City--".to_string(),
        _ => value.to_string(),
    }
}

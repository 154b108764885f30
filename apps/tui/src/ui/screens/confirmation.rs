use crate::app::App;
use crate::domain::Field;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_confirmation(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    let view_area = centered_rect(70, 90, area);
    f.render_widget(ClearWidget, view_area);

    let block = Block::default()
        .title("Your Submitted Information")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    // Reached without a snapshot (nothing submitted yet), this renders a
    // placeholder instead of failing.
    let Some(snapshot) = &app.submitted else {
        let placeholder = Paragraph::new(Text::from(vec![
            TextLine::from("Nothing submitted yet."),
            TextLine::from(""),
            TextLine::from("Press Enter to go to the form, q to quit."),
        ]))
        .block(block)
        .style(Style::default().fg(Color::Gray));
        f.render_widget(placeholder, view_area);
        return;
    };

    let mut lines: Vec<TextLine<'_>> = Field::ALL
        .iter()
        .map(|field| {
            TextLine::from(format!(
                "{}: {}",
                field.label(),
                snapshot.fields.get(*field)
            ))
        })
        .collect();

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(format!(
        "Submitted at: {}",
        snapshot.submitted_at
    )));
    lines.push(TextLine::from(""));

    let json = serde_json::to_string_pretty(&snapshot.fields)
        .unwrap_or_else(|_| "{}".to_string());
    for json_line in json.lines() {
        lines.push(TextLine::from(json_line.to_string()));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from("Press Enter for a new form, q to quit."));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, view_area);
}

use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};

/// Set up the terminal: raw mode first, then the alternate screen, rolling
/// back the earlier steps when a later one fails.
pub fn setup(debug: bool) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    if debug {
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        eprintln!("Terminal size: {width}x{height}");
    }

    if let Err(e) = enable_raw_mode() {
        return Err(color_eyre::eyre::eyre!("Failed to enable raw mode: {e}"));
    }

    let mut out = stdout();
    if let Err(e) = execute!(out, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(color_eyre::eyre::eyre!(
            "Failed to enter alternate screen: {e}"
        ));
    }

    let backend = CrosstermBackend::new(out);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(color_eyre::eyre::eyre!("Failed to create terminal: {e}"));
        }
    };

    if let Err(e) = terminal.clear() {
        eprintln!("Warning: failed to clear terminal: {e}");
    }
    if let Err(e) = execute!(stdout(), cursor::Hide) {
        eprintln!("Warning: failed to hide cursor: {e}");
    }

    Ok(terminal)
}

/// Restore the terminal, tolerating partial failures so a broken teardown
/// step never masks the app's own result.
pub fn cleanup(raw_mode: bool, alternate_screen: bool) {
    let mut out = stdout();

    if let Err(e) = execute!(out, cursor::Show) {
        eprintln!("Warning: failed to show cursor: {e}");
    }

    if alternate_screen {
        if let Err(e) = execute!(out, LeaveAlternateScreen) {
            eprintln!("Warning: failed to leave alternate screen: {e}");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            eprintln!("Warning: failed to disable raw mode: {e}");
        }
    }

    let _ = execute!(out, cursor::MoveToNextLine(1));
    let _ = out.flush();
}

use clap::Parser;
use color_eyre::Result;
use ratatui_reg_form::app::App;
use ratatui_reg_form::cli::CliArgs;
use ratatui_reg_form::domain::FieldSet;
use ratatui_reg_form::{config, event, terminal};
use std::io::Read;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Resolve the country/city table up front: a broken override aborts
    // startup in every mode, headless included
    let table = config::init_app_config()?;

    // Headless mode: validate a field set and exit
    if args.headless || !is_terminal() {
        let fields = read_headless_fields(args.input.as_deref())?;
        let valid = event::run_headless(&fields, args.json)?;
        if !valid {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut app = App::new(table);

    // Setup terminal
    let mut terminal = terminal::setup(config::debug_enabled())?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

/// Field set JSON from a file, or stdin when no path is given. Missing
/// keys fall back to the field defaults.
fn read_headless_fields(path: Option<&str>) -> Result<FieldSet> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if raw.trim().is_empty() {
        return Ok(FieldSet::default());
    }
    Ok(serde_json::from_str(&raw)?)
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

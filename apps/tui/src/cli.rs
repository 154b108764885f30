use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "ratatui_reg-form", version, about = "Registration Form TUI")]
pub struct CliArgs {
    /// Validate a field set and exit without starting the UI
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Field set JSON for headless mode (defaults to stdin)
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Override the country/city table with a JSON file
    #[arg(long, value_name = "PATH")]
    pub countries: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.countries {
            std::env::set_var("REGFORM_COUNTRIES", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

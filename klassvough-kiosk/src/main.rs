use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use leadform_wizard_ratatui::KioskApp;

mod admin;
mod config;
mod logging;

use config::Config;

#[derive(Parser)]
#[command(name = "klassvough-kiosk")]
#[command(about = "KlassVough lead capture kiosk")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Open with the admin table visible (1, true or yes)
    #[arg(long, value_name = "TOKEN")]
    admin: Option<String>,

    /// Page URL whose `admin` query parameter enables the admin table
    #[arg(long, value_name = "URL")]
    page_url: Option<String>,

    /// Directory lead files are written to (overrides the config)
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let logging = logging::init_logging(&config, cli.debug)?;
    if let Some(path) = &logging.log_file_path {
        tracing::info!(path = %path.display(), "logging to file");
    }

    let admin = admin::admin_on_load(cli.admin.as_deref(), cli.page_url.as_deref());
    let export_dir = cli.export_dir.unwrap_or_else(|| config.export_path());
    tracing::info!(admin, export_dir = %export_dir.display(), "starting kiosk");

    let mut app = KioskApp::new(config.brand())
        .with_admin(admin)
        .with_export_dir(&export_dir)
        .with_thank_you_delay(config.thank_you_delay());
    if let Some(dir) = &config.export.fallback_dir {
        app = app.with_fallback_dir(dir);
    }

    let leads = app.run().context("kiosk terminal failed")?;
    tracing::info!(count = leads.len(), "kiosk closed");

    println!("{} lead(s) collected this session.", leads.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "klassvough-kiosk",
            "--config",
            "kiosk.toml",
            "--admin",
            "1",
            "--page-url",
            "https://klassvough.com/?admin=yes",
            "--export-dir",
            "/srv/leads",
            "--debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("kiosk.toml")));
        assert_eq!(cli.admin.as_deref(), Some("1"));
        assert_eq!(cli.page_url.as_deref(), Some("https://klassvough.com/?admin=yes"));
        assert_eq!(cli.export_dir, Some(PathBuf::from("/srv/leads")));
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["klassvough-kiosk"]);
        assert!(cli.config.is_none());
        assert!(cli.admin.is_none());
        assert!(cli.page_url.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

//! Runs the kiosk against a temporary export directory.
//!
//! Run with: cargo run -p leadform-wizard-ratatui --example kiosk

use leadform_wizard_ratatui::{BrandConfig, KioskApp};

fn main() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;

    let leads = KioskApp::new(BrandConfig::default())
        .with_admin(true)
        .with_export_dir(dir.path())
        .run()?;

    println!("\n=== {} lead(s) collected ===", leads.len());
    for lead in &leads {
        println!("{} <{}> {}", lead.name(), lead.email(), lead.phone());
    }
    println!("Files written to {}", dir.path().display());

    Ok(())
}

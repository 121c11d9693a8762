//! Ratatui kiosk frontend for leadform.
//!
//! Runs the lead wizard full-screen in the terminal: a hero screen, one
//! question per screen, a thank-you screen that returns to the hero on its
//! own, and an admin table toggled with Ctrl+Shift+A.
//!
//! ```rust,no_run
//! use leadform_wizard_ratatui::{BrandConfig, KioskApp};
//!
//! let leads = KioskApp::new(BrandConfig::default())
//!     .with_export_dir("leads")
//!     .run()?;
//! println!("{} leads collected", leads.len());
//! # Ok::<(), leadform_wizard_ratatui::RatatuiError>(())
//! ```

mod backend;
pub mod brand;
pub mod keys;

pub use backend::{BRAND_PURPLE, Kiosk, KioskApp, RatatuiError, Theme};
pub use brand::{BrandConfig, LogoArt, LogoSource};
pub use keys::{Action, map_key};

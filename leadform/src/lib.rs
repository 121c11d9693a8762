//! # leadform
//!
//! A five-step lead capture wizard. Presentation-agnostic.
//!
//! This crate holds everything behind the kiosk screens: the step state
//! machine, the export formats and the export side effect. Frontends feed it
//! key presses and the current time and render whatever [`Wizard::phase`]
//! says.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use leadform::{Advance, Phase, RecordingTarget, Wizard};
//!
//! let mut wizard = Wizard::new(RecordingTarget::new());
//! wizard.start();
//! for answer in ["Ana Souza", "11912345678", "ana@exemplo.com", "Campinas/SP"] {
//!     wizard.set_text(answer);
//!     wizard.advance(Utc::now());
//! }
//! wizard.set_consent(true);
//!
//! let outcome = wizard.advance(Utc::now());
//! assert!(matches!(outcome, Advance::Submitted { .. }));
//! assert!(matches!(wizard.phase(), Phase::ShowingThankYou { .. }));
//! assert_eq!(wizard.leads().len(), 1);
//! ```
//!
//! ## Frontends
//!
//! - `leadform-wizard-ratatui` - terminal kiosk

// Re-export all types from leadform-types
pub use leadform_types::*;

pub mod serialize;
pub use serialize::{lead_file_name, to_csv, to_plain_text};

pub mod export;
pub use export::{DirectoryTarget, ExportOutcome, download_text, export_lead};

pub mod wizard;
pub use wizard::{Advance, DEFAULT_THANK_YOU_DELAY_MS, Phase, Wizard};

// Export target for testing frontends without writing files
mod test_target;
pub use test_target::RecordingTarget;

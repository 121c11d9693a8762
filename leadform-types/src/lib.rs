//! Core types for the leadform crate.
//!
//! This crate provides the foundational types for the lead wizard:
//! - `Lead` and `LeadDraft` - A submitted lead and the values being edited
//! - `FieldId` - The five wizard steps, in order, with their copy
//! - `format_phone_br` - Phone masking
//! - `validate_lead` and `ValidationErrors` - Per-field validation
//! - `ExportTarget` trait - For implementing places a lead file can go

mod field;
pub use field::FieldId;

mod phone;
pub use phone::{digits_only, format_phone_br};

mod validation;
pub use validation::{
    FieldError, FieldErrorKind, MIN_PHONE_DIGITS, MIN_TEXT_CHARS, ValidationErrors,
    is_valid_email, validate_field, validate_lead,
};

mod lead;
pub use lead::{Lead, LeadDraft};

mod error;
pub use error::ExportError;

mod traits;
pub use traits::ExportTarget;

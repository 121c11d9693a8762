use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{FieldId, LeadDraft, digits_only};

/// Minimum trimmed length for name and city.
pub const MIN_TEXT_CHARS: usize = 2;

/// Minimum number of digits for a phone number (DDD + 8 digits).
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// Blank, or shorter than [`MIN_TEXT_CHARS`] once trimmed.
    EmptyOrTooShort,
    /// Does not have the expected shape (phone digits, email address).
    InvalidFormat,
    /// Consent was not given.
    NotGiven,
}

/// A validation failure for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldError {
    pub field: FieldId,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: FieldId, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Message shown inline under the field.
    pub fn message(&self) -> &'static str {
        match self.field {
            FieldId::Name => "Informe seu nome completo.",
            FieldId::Phone => "Informe um telefone válido.",
            FieldId::Email => "E-mail inválido.",
            FieldId::City => "Informe sua cidade.",
            FieldId::Consent => "É necessário consentir.",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors for the currently invalid fields of a draft.
///
/// A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field, error);
    }

    /// Error for `field`, if it is invalid.
    pub fn get(&self, field: FieldId) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// Invalid fields in wizard order.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a single field of `draft`.
pub fn validate_field(field: FieldId, draft: &LeadDraft) -> Option<FieldError> {
    let kind = match field {
        FieldId::Name => too_short(&draft.name),
        FieldId::Phone => {
            (digits_only(&draft.phone).len() < MIN_PHONE_DIGITS)
                .then_some(FieldErrorKind::InvalidFormat)
        }
        FieldId::Email => (!is_valid_email(&draft.email)).then_some(FieldErrorKind::InvalidFormat),
        FieldId::City => too_short(&draft.city),
        FieldId::Consent => (!draft.consent).then_some(FieldErrorKind::NotGiven),
    };
    kind.map(|kind| FieldError::new(field, kind))
}

/// Validate every field of `draft`. Never fails; an empty result means valid.
pub fn validate_lead(draft: &LeadDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in FieldId::ALL {
        if let Some(error) = validate_field(field, draft) {
            errors.insert(error);
        }
    }
    errors
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

fn too_short(value: &str) -> Option<FieldErrorKind> {
    (value.trim().chars().count() < MIN_TEXT_CHARS).then_some(FieldErrorKind::EmptyOrTooShort)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_has_no_errors() {
        let draft = LeadDraft {
            name: "Jo".into(),
            phone: "(11) 91234-5678".into(),
            email: "a@b.co".into(),
            city: "SP".into(),
            consent: true,
        };
        assert!(validate_lead(&draft).is_empty());
    }

    #[test]
    fn every_field_invalid() {
        let draft = LeadDraft {
            name: String::new(),
            phone: "123".into(),
            email: "bad".into(),
            city: String::new(),
            consent: false,
        };
        let errors = validate_lead(&draft);
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.get(FieldId::Name).map(|e| e.kind),
            Some(FieldErrorKind::EmptyOrTooShort)
        );
        assert_eq!(
            errors.get(FieldId::Phone).map(|e| e.kind),
            Some(FieldErrorKind::InvalidFormat)
        );
        assert_eq!(
            errors.get(FieldId::Email).map(|e| e.kind),
            Some(FieldErrorKind::InvalidFormat)
        );
        assert_eq!(
            errors.get(FieldId::City).map(|e| e.kind),
            Some(FieldErrorKind::EmptyOrTooShort)
        );
        assert_eq!(
            errors.get(FieldId::Consent).map(|e| e.kind),
            Some(FieldErrorKind::NotGiven)
        );
    }

    #[test]
    fn names_are_trimmed_before_counting() {
        let draft = LeadDraft::new().with_name("  A  ");
        assert!(validate_field(FieldId::Name, &draft).is_some());
        let draft = LeadDraft::new().with_name(" Zé ");
        assert!(validate_field(FieldId::Name, &draft).is_none());
    }

    #[test]
    fn phone_needs_ten_digits() {
        let draft = LeadDraft::new().with_phone("112345678");
        assert!(validate_field(FieldId::Phone, &draft).is_some());
        let draft = LeadDraft::new().with_phone("1123456789");
        assert!(validate_field(FieldId::Phone, &draft).is_none());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("voce@exemplo.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("voce@exemplo"));
        assert!(!is_valid_email("voce exemplo@x.com"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn messages_are_localized() {
        let error = FieldError::new(FieldId::Email, FieldErrorKind::InvalidFormat);
        assert_eq!(error.to_string(), "E-mail inválido.");
        let error = FieldError::new(FieldId::Consent, FieldErrorKind::NotGiven);
        assert_eq!(error.message(), "É necessário consentir.");
    }

    #[test]
    fn errors_iterate_in_wizard_order() {
        let errors = validate_lead(&LeadDraft::new());
        let fields: Vec<FieldId> = errors.fields().collect();
        assert_eq!(fields, FieldId::ALL.to_vec());
    }
}

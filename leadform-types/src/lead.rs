use chrono::{DateTime, Utc};

use crate::{FieldId, ValidationErrors, format_phone_br, validate_lead};

/// The five editable values of a lead before submission.
///
/// The phone draft always holds the masked form: [`LeadDraft::set_text`]
/// re-applies [`format_phone_br`] on every edit, so the value that is
/// validated and stored is the one the user sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub consent: bool,
}

impl LeadDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style name setter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_text(FieldId::Name, name);
        self
    }

    /// Builder-style phone setter. The value is masked.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.set_text(FieldId::Phone, phone);
        self
    }

    /// Builder-style email setter.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.set_text(FieldId::Email, email);
        self
    }

    /// Builder-style city setter.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.set_text(FieldId::City, city);
        self
    }

    /// Builder-style consent setter.
    pub fn with_consent(mut self, consent: bool) -> Self {
        self.consent = consent;
        self
    }

    /// Text value of a field. Consent has no text and yields `None`.
    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => Some(&self.name),
            FieldId::Phone => Some(&self.phone),
            FieldId::Email => Some(&self.email),
            FieldId::City => Some(&self.city),
            FieldId::Consent => None,
        }
    }

    /// Replace the text of a field. Ignored for consent.
    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::Name => self.name = value,
            FieldId::Phone => self.phone = format_phone_br(&value),
            FieldId::Email => self.email = value,
            FieldId::City => self.city = value,
            FieldId::Consent => {}
        }
    }

    /// Reset every value, consent included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One completed, validated submission.
///
/// A `Lead` can only be obtained through [`Lead::from_draft`], which refuses
/// drafts with validation errors. Fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    name: String,
    phone: String,
    email: String,
    city: String,
    consent: bool,
    created_at: DateTime<Utc>,
}

impl Lead {
    /// Validate `draft` and stamp it with `created_at`.
    ///
    /// Returns every validation error if any field is invalid.
    pub fn from_draft(
        draft: &LeadDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationErrors> {
        let errors = validate_lead(draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            city: draft.city.clone(),
            consent: draft.consent,
            created_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_draft() -> LeadDraft {
        LeadDraft::new()
            .with_name("Jo")
            .with_phone("11912345678")
            .with_email("a@b.co")
            .with_city("SP")
            .with_consent(true)
    }

    #[test]
    fn phone_is_masked_on_set() {
        let draft = LeadDraft::new().with_phone("11912345678");
        assert_eq!(draft.phone, "(11) 91234-5678");
        assert_eq!(draft.text(FieldId::Phone), Some("(11) 91234-5678"));
    }

    #[test]
    fn consent_has_no_text() {
        let mut draft = valid_draft();
        assert_eq!(draft.text(FieldId::Consent), None);
        draft.set_text(FieldId::Consent, "ignored");
        assert!(draft.consent);
    }

    #[test]
    fn clear_resets_everything() {
        let mut draft = valid_draft();
        draft.clear();
        assert_eq!(draft, LeadDraft::default());
    }

    #[test]
    fn lead_from_valid_draft() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 8, 9, 10).unwrap();
        let lead = Lead::from_draft(&valid_draft(), at).unwrap();
        assert_eq!(lead.name(), "Jo");
        assert_eq!(lead.phone(), "(11) 91234-5678");
        assert_eq!(lead.email(), "a@b.co");
        assert_eq!(lead.city(), "SP");
        assert!(lead.consent());
        assert_eq!(lead.created_at(), at);
    }

    #[test]
    fn lead_from_invalid_draft_is_refused() {
        let draft = valid_draft().with_consent(false);
        let errors = Lead::from_draft(&draft, Utc::now()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FieldId::Consent).is_some());
    }
}

//! The step-by-step lead wizard.
//!
//! A [`Wizard`] moves through a fixed sequence of five questions. It never
//! leaves a step whose field is invalid, and submitting the last step turns
//! the drafts into a [`Lead`], exports it, and shows a thank-you screen that
//! expires on its own.
//!
//! Time is passed in by the caller (`advance(now)`, `tick(now)`), so the
//! wizard itself never reads a clock.

use chrono::{DateTime, Duration, Utc};
use leadform_types::{
    ExportTarget, FieldError, FieldId, Lead, LeadDraft, ValidationErrors, validate_field,
    validate_lead,
};

use crate::export::{ExportOutcome, download_text, export_lead};
use crate::serialize::{CSV_EXPORT_FILE_NAME, TEXT_EXPORT_FILE_NAME, to_csv, to_plain_text};

/// How long the thank-you screen stays up by default.
pub const DEFAULT_THANK_YOU_DELAY_MS: u64 = 2000;

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Hero screen, waiting for the user to start.
    NotStarted,
    /// Asking the given question.
    OnStep(FieldId),
    /// A lead was just submitted. Returns to [`Phase::NotStarted`] at `until`.
    ///
    /// The deadline belongs to this phase: leaving it early discards the
    /// deadline, so it can never cut a later session short.
    ShowingThankYou { until: DateTime<Utc> },
}

/// Result of [`Wizard::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Not on a question; nothing happened.
    Ignored,
    /// The current field is invalid; the wizard stays on this step.
    Blocked(FieldError),
    /// Moved to the given step.
    Moved(FieldId),
    /// The lead was submitted and exported.
    Submitted { lead: Lead, export: ExportOutcome },
}

/// State of one kiosk session.
pub struct Wizard<T: ExportTarget> {
    phase: Phase,
    step: FieldId,
    drafts: LeadDraft,
    leads: Vec<Lead>,
    admin: bool,
    thank_you_delay: Duration,
    target: T,
}

impl<T: ExportTarget> Wizard<T> {
    /// Create a wizard exporting through `target`.
    pub fn new(target: T) -> Self {
        Self {
            phase: Phase::NotStarted,
            step: FieldId::Name,
            drafts: LeadDraft::new(),
            leads: Vec::new(),
            admin: false,
            thank_you_delay: Duration::milliseconds(DEFAULT_THANK_YOU_DELAY_MS as i64),
            target,
        }
    }

    /// Set how long the thank-you screen is shown.
    pub fn with_thank_you_delay(mut self, delay: std::time::Duration) -> Self {
        self.thank_you_delay = Duration::from_std(delay).unwrap_or(self.thank_you_delay);
        self
    }

    /// Start with the admin table visible.
    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The step being asked, or that will be asked once started.
    pub fn step(&self) -> FieldId {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn drafts(&self) -> &LeadDraft {
        &self.drafts
    }

    /// Leads of this session, newest first.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn export_target(&self) -> &T {
        &self.target
    }

    pub fn thank_you_delay(&self) -> Duration {
        self.thank_you_delay
    }

    /// Leave the hero screen and ask the first question.
    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            self.step = FieldId::Name;
            self.phase = Phase::OnStep(self.step);
            tracing::debug!("wizard started");
        }
    }

    /// Confirm the current step.
    ///
    /// Moves on only if the current field validates. On the last step this
    /// submits: the lead is built with `created_at = now`, exported once,
    /// prepended to [`Wizard::leads`], the drafts are cleared and the
    /// thank-you screen is shown until `now + delay`.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Advance {
        let Phase::OnStep(step) = self.phase else {
            return Advance::Ignored;
        };

        if let Some(error) = validate_field(step, &self.drafts) {
            tracing::debug!(step = %step, "advance blocked");
            return Advance::Blocked(error);
        }

        if let Some(next) = step.next() {
            self.step = next;
            self.phase = Phase::OnStep(next);
            return Advance::Moved(next);
        }

        let lead = match Lead::from_draft(&self.drafts, now) {
            Ok(lead) => lead,
            Err(errors) => {
                // An earlier step no longer validates; send the user back to it.
                let Some(first) = errors.iter().next().copied() else {
                    return Advance::Ignored;
                };
                self.step = first.field;
                self.phase = Phase::OnStep(first.field);
                return Advance::Blocked(first);
            }
        };

        self.submit(lead, now)
    }

    fn submit(&mut self, lead: Lead, now: DateTime<Utc>) -> Advance {
        let export = export_lead(&self.target, &lead);
        tracing::info!(export = ?export, total = self.leads.len() + 1, "lead submitted");

        self.leads.insert(0, lead.clone());
        self.drafts.clear();
        self.step = FieldId::Name;
        let until = now
            .checked_add_signed(self.thank_you_delay)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.phase = Phase::ShowingThankYou { until };

        Advance::Submitted { lead, export }
    }

    /// Go back one step. Does nothing on the first step.
    pub fn retreat(&mut self) {
        if let Phase::OnStep(step) = self.phase
            && let Some(prev) = step.prev()
        {
            self.step = prev;
            self.phase = Phase::OnStep(prev);
        }
    }

    /// Let time pass. Ends the thank-you screen once its deadline is reached.
    ///
    /// Returns `true` if the phase changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        match self.phase {
            Phase::ShowingThankYou { until } if now >= until => {
                self.phase = Phase::NotStarted;
                true
            }
            _ => false,
        }
    }

    /// End the thank-you screen right away.
    pub fn dismiss_thank_you(&mut self) {
        if matches!(self.phase, Phase::ShowingThankYou { .. }) {
            self.phase = Phase::NotStarted;
        }
    }

    /// Replace the text of the current step. Ignored off a text step.
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let Phase::OnStep(step) = self.phase {
            self.drafts.set_text(step, value);
        }
    }

    /// Type one character into the current text step.
    pub fn push_char(&mut self, c: char) {
        if let Phase::OnStep(step) = self.phase
            && let Some(current) = self.drafts.text(step)
        {
            let mut value = current.to_string();
            value.push(c);
            self.drafts.set_text(step, value);
        }
    }

    /// Delete the last character of the current text step.
    pub fn pop_char(&mut self) {
        if let Phase::OnStep(step) = self.phase
            && let Some(current) = self.drafts.text(step)
        {
            let mut value = current.to_string();
            value.pop();
            self.drafts.set_text(step, value);
        }
    }

    /// Set the consent checkbox.
    pub fn set_consent(&mut self, consent: bool) {
        self.drafts.consent = consent;
    }

    /// Flip the consent checkbox.
    pub fn toggle_consent(&mut self) {
        self.drafts.consent = !self.drafts.consent;
    }

    /// Errors of the current drafts, recomputed on every call.
    pub fn errors(&self) -> ValidationErrors {
        validate_lead(&self.drafts)
    }

    /// Error of the step being asked, if any.
    pub fn current_error(&self) -> Option<FieldError> {
        match self.phase {
            Phase::OnStep(step) => validate_field(step, &self.drafts),
            _ => None,
        }
    }

    /// Percentage of the wizard reached, counting the current step as done.
    pub fn progress_percent(&self) -> u8 {
        let done = (self.step.index() + 1) as f64;
        ((done / FieldId::COUNT as f64) * 100.0).round() as u8
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn set_admin(&mut self, admin: bool) {
        self.admin = admin;
    }

    /// Show or hide the admin table. Does not touch the step state.
    pub fn toggle_admin(&mut self) {
        self.admin = !self.admin;
        tracing::debug!(admin = self.admin, "admin view toggled");
    }

    /// Export every lead of the session as CSV. `None` when there are none.
    pub fn export_csv(&self) -> Option<ExportOutcome> {
        if self.leads.is_empty() {
            return None;
        }
        Some(download_text(
            &self.target,
            CSV_EXPORT_FILE_NAME,
            &to_csv(&self.leads),
        ))
    }

    /// Export every lead of the session as plain text. `None` when there are none.
    pub fn export_txt(&self) -> Option<ExportOutcome> {
        if self.leads.is_empty() {
            return None;
        }
        Some(download_text(
            &self.target,
            TEXT_EXPORT_FILE_NAME,
            &to_plain_text(&self.leads),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingTarget;
    use chrono::TimeZone;
    use leadform_types::FieldErrorKind;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 8, 9, 10).unwrap()
    }

    fn started() -> Wizard<RecordingTarget> {
        let mut wizard = Wizard::new(RecordingTarget::new());
        wizard.start();
        wizard
    }

    fn fill_and_advance(wizard: &mut Wizard<RecordingTarget>, text: &str) -> Advance {
        wizard.set_text(text);
        wizard.advance(now())
    }

    #[test]
    fn starts_on_the_hero() {
        let wizard = Wizard::new(RecordingTarget::new());
        assert_eq!(wizard.phase(), Phase::NotStarted);
        assert_eq!(wizard.step_index(), 0);
        assert!(!wizard.is_admin());
    }

    #[test]
    fn start_asks_the_name() {
        let wizard = started();
        assert_eq!(wizard.phase(), Phase::OnStep(FieldId::Name));
    }

    #[test]
    fn invalid_step_blocks() {
        let mut wizard = started();
        let outcome = fill_and_advance(&mut wizard, "A");
        assert_eq!(
            outcome,
            Advance::Blocked(FieldError::new(
                FieldId::Name,
                FieldErrorKind::EmptyOrTooShort
            ))
        );
        assert_eq!(wizard.phase(), Phase::OnStep(FieldId::Name));
        assert!(wizard.current_error().is_some());
    }

    #[test]
    fn valid_step_moves_on() {
        let mut wizard = started();
        assert_eq!(
            fill_and_advance(&mut wizard, "Ana"),
            Advance::Moved(FieldId::Phone)
        );
        assert_eq!(wizard.step_index(), 1);
    }

    #[test]
    fn retreat_is_a_no_op_on_the_first_step() {
        let mut wizard = started();
        wizard.retreat();
        assert_eq!(wizard.phase(), Phase::OnStep(FieldId::Name));

        fill_and_advance(&mut wizard, "Ana");
        wizard.retreat();
        assert_eq!(wizard.phase(), Phase::OnStep(FieldId::Name));
        assert_eq!(wizard.drafts().name, "Ana");
    }

    #[test]
    fn advance_and_retreat_do_nothing_before_start() {
        let mut wizard = Wizard::new(RecordingTarget::new());
        assert_eq!(wizard.advance(now()), Advance::Ignored);
        wizard.retreat();
        assert_eq!(wizard.phase(), Phase::NotStarted);
    }

    #[test]
    fn typing_into_the_phone_step_masks() {
        let mut wizard = started();
        fill_and_advance(&mut wizard, "Ana");
        for c in "11912345678".chars() {
            wizard.push_char(c);
        }
        assert_eq!(wizard.drafts().phone, "(11) 91234-5678");
        wizard.pop_char();
        assert_eq!(wizard.drafts().phone, "(11) 9123-4567");
    }

    #[test]
    fn errors_follow_the_drafts() {
        let mut wizard = started();
        assert!(wizard.errors().contains(FieldId::Name));
        wizard.set_text("Ana");
        assert!(!wizard.errors().contains(FieldId::Name));
        wizard.set_text("");
        assert!(wizard.errors().contains(FieldId::Name));
    }

    #[test]
    fn progress_counts_the_current_step() {
        let mut wizard = started();
        assert_eq!(wizard.progress_percent(), 20);
        fill_and_advance(&mut wizard, "Ana");
        fill_and_advance(&mut wizard, "11912345678");
        assert_eq!(wizard.progress_percent(), 60);
    }

    #[test]
    fn admin_toggle_leaves_the_step_alone() {
        let mut wizard = started();
        fill_and_advance(&mut wizard, "Ana");
        wizard.toggle_admin();
        assert!(wizard.is_admin());
        assert_eq!(wizard.phase(), Phase::OnStep(FieldId::Phone));
        wizard.toggle_admin();
        assert!(!wizard.is_admin());
    }

    #[test]
    fn bulk_exports_are_disabled_without_leads() {
        let wizard = started();
        assert_eq!(wizard.export_csv(), None);
        assert_eq!(wizard.export_txt(), None);
        assert_eq!(wizard.export_target().delivery_count(), 0);
    }

    #[test]
    fn thank_you_deadline_saturates() {
        let mut wizard = Wizard::new(RecordingTarget::new())
            .with_thank_you_delay(std::time::Duration::from_millis(9_000_000_000_000_000));
        wizard.start();
        for answer in ["Ana Souza", "11912345678", "ana@exemplo.com", "Campinas/SP"] {
            fill_and_advance(&mut wizard, answer);
        }
        wizard.set_consent(true);

        assert!(matches!(wizard.advance(now()), Advance::Submitted { .. }));
        assert_eq!(
            wizard.phase(),
            Phase::ShowingThankYou {
                until: DateTime::<Utc>::MAX_UTC
            }
        );
        assert!(!wizard.tick(now() + Duration::days(365)));
    }

    #[test]
    fn custom_thank_you_delay() {
        let wizard = Wizard::new(RecordingTarget::new())
            .with_thank_you_delay(std::time::Duration::from_millis(500));
        assert_eq!(wizard.thank_you_delay(), Duration::milliseconds(500));
    }
}

//! Newsletter - Email draft and submit path
//!
//! The draft is a controlled value: the page writes every field change into
//! it and nothing else touches it. Submitting runs the field constraint first
//! and only then the subscription handler.

use crate::domain::field::{ConstraintViolation, FieldConstraint};

/// Outcome shown to the visitor after a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    /// The exact value that was submitted
    pub email: String,
}

/// Receives submitted addresses.
///
/// A mailing-list client plugs in here; the page ships with
/// [`LocalAcknowledger`], which only acknowledges locally.
pub trait SubscriptionHandler {
    fn subscribe(&self, email: &str) -> Acknowledgement;
}

/// Acknowledges without sending anything anywhere
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalAcknowledger;

impl SubscriptionHandler for LocalAcknowledger {
    #[tracing::instrument(name = "Acknowledging newsletter signup", skip(self))]
    fn subscribe(&self, email: &str) -> Acknowledgement {
        tracing::info!("newsletter signup acknowledged locally");
        Acknowledgement {
            email: email.to_string(),
        }
    }
}

/// The single stateful entity of the page
#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    draft: String,
    constraint: FieldConstraint,
    violation: Option<ConstraintViolation>,
    acknowledgement: Option<Acknowledgement>,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            constraint: FieldConstraint::required_email(),
            ..Default::default()
        }
    }

    // ==================== Getters ====================

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn constraint(&self) -> FieldConstraint {
        self.constraint
    }

    /// Violation from the last blocked submit, cleared on the next change
    pub fn violation(&self) -> Option<ConstraintViolation> {
        self.violation
    }

    /// Acknowledgement awaiting dismissal
    pub fn acknowledgement(&self) -> Option<&Acknowledgement> {
        self.acknowledgement.as_ref()
    }

    // ==================== Setters ====================

    /// Replace the draft with the field's current value
    pub fn input(&mut self, value: &str) {
        if self.draft != value {
            self.draft.clear();
            self.draft.push_str(value);
            self.violation = None;
        }
    }

    /// Append one typed character
    pub fn push_char(&mut self, ch: char) {
        self.draft.push(ch);
        self.violation = None;
    }

    /// Validate the draft and hand it to `handler`.
    ///
    /// The handler is not called when the constraint fails. It receives the
    /// address without surrounding whitespace; the draft is left as typed
    /// either way.
    pub fn submit(
        &mut self,
        handler: &dyn SubscriptionHandler,
    ) -> Result<Acknowledgement, ConstraintViolation> {
        if let Err(violation) = self.constraint.check(&self.draft) {
            self.violation = Some(violation);
            return Err(violation);
        }

        self.violation = None;
        let acknowledgement = handler.subscribe(self.draft.trim());
        self.acknowledgement = Some(acknowledgement.clone());
        Ok(acknowledgement)
    }

    /// Close the acknowledgement
    pub fn dismiss(&mut self) {
        self.acknowledgement = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::FieldKind;
    use claims::{assert_err, assert_ok};
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingHandler {
        calls: Cell<usize>,
    }

    impl SubscriptionHandler for CountingHandler {
        fn subscribe(&self, email: &str) -> Acknowledgement {
            self.calls.set(self.calls.get() + 1);
            Acknowledgement {
                email: email.to_string(),
            }
        }
    }

    #[test]
    fn typing_updates_draft_in_order() {
        let mut form = NewsletterForm::new();
        let typed = "person@example.com";

        for (i, ch) in typed.chars().enumerate() {
            form.push_char(ch);
            assert_eq!(form.draft(), &typed[..=i]);
        }
        assert_eq!(form.draft(), typed);
    }

    #[test]
    fn field_changes_mirror_the_field_value() {
        let mut form = NewsletterForm::new();
        let typed = "ana@bestial.me";

        for end in 1..=typed.len() {
            form.input(&typed[..end]);
            assert_eq!(form.draft(), &typed[..end]);
        }

        form.input("ana@bestial.m");
        assert_eq!(form.draft(), "ana@bestial.m");
    }

    #[test]
    fn valid_submit_acknowledges_and_keeps_draft() {
        let mut form = NewsletterForm::new();
        let handler = CountingHandler::default();
        form.input("person@example.com");

        let ack = assert_ok!(form.submit(&handler));

        assert_eq!(ack.email, "person@example.com");
        assert_eq!(handler.calls.get(), 1);
        assert_eq!(form.draft(), "person@example.com");
        assert_eq!(form.acknowledgement(), Some(&ack));
    }

    #[test]
    fn surrounding_whitespace_is_not_submitted() {
        let mut form = NewsletterForm::new();
        let handler = CountingHandler::default();
        form.input("  person@example.com  ");

        let ack = assert_ok!(form.submit(&handler));

        assert_eq!(ack.email, "person@example.com");
        assert_eq!(form.draft(), "  person@example.com  ");
    }

    #[test]
    fn submit_without_at_symbol_never_reaches_handler() {
        let mut form = NewsletterForm::new();
        let handler = CountingHandler::default();
        form.input("personexample.com");

        let violation = assert_err!(form.submit(&handler));

        assert_eq!(violation, ConstraintViolation::TypeMismatch(FieldKind::Email));
        assert_eq!(handler.calls.get(), 0);
        assert!(form.acknowledgement().is_none());
        assert_eq!(form.violation(), Some(violation));
    }

    #[test]
    fn empty_submit_is_value_missing() {
        let mut form = NewsletterForm::new();
        let handler = CountingHandler::default();

        assert_eq!(form.submit(&handler), Err(ConstraintViolation::ValueMissing));
        assert_eq!(handler.calls.get(), 0);
    }

    #[test]
    fn editing_clears_violation_and_dismiss_keeps_draft() {
        let mut form = NewsletterForm::new();
        form.input("nope");
        let _ = form.submit(&LocalAcknowledger);
        assert!(form.violation().is_some());

        form.input("nope@example.com");
        assert!(form.violation().is_none());

        assert_ok!(form.submit(&LocalAcknowledger));
        form.dismiss();
        assert!(form.acknowledgement().is_none());
        assert_eq!(form.draft(), "nope@example.com");
    }
}

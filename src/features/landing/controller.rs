//! Landing Controller
//!
//! Handles newsletter submits and persisted page preferences.

use gpui::{App, Bounds, Pixels};
use tracing::{info, warn};

use crate::domain::newsletter::{LocalAcknowledger, NewsletterForm, SubscriptionHandler};
use crate::state::store::{LandingGlobalStore, update_settings_and_save};

/// Landing page controller
pub struct LandingController {
    handler: Box<dyn SubscriptionHandler>,
}

impl Default for LandingController {
    fn default() -> Self {
        Self::new(Box::new(LocalAcknowledger))
    }
}

impl LandingController {
    /// Create a controller that hands signups to `handler`
    pub fn new(handler: Box<dyn SubscriptionHandler>) -> Self {
        Self { handler }
    }

    /// Submit the newsletter draft. Returns `true` when it was acknowledged.
    pub fn submit(&self, form: &mut NewsletterForm) -> bool {
        match form.submit(self.handler.as_ref()) {
            Ok(_) => {
                info!("newsletter draft submitted");
                true
            }
            Err(violation) => {
                warn!(?violation, "newsletter draft rejected");
                false
            }
        }
    }

    /// Persist the other language
    pub fn toggle_locale(&self, cx: &App) {
        update_settings_and_save(cx, "toggle_locale", |settings, cx| {
            let locale = settings.locale().toggled();
            settings.set_locale(locale, cx);
        });
    }

    /// Persist the other page variant
    pub fn toggle_variant(&self, cx: &App) {
        update_settings_and_save(cx, "toggle_variant", |settings, cx| {
            let variant = settings.variant().toggled();
            settings.set_variant(variant, cx);
        });
    }

    /// Save window bounds right away; used while the window closes
    pub fn remember_bounds(&self, bounds: Bounds<Pixels>, cx: &mut App) {
        let Some(store) = cx.try_global::<LandingGlobalStore>().cloned() else {
            return;
        };
        let settings = store.update(cx, |settings, _| {
            settings.set_bounds(bounds);
            settings.clone()
        });
        if let Err(e) = settings.save() {
            warn!(error = %e, "failed to save window bounds");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::ConstraintViolation;
    use crate::domain::newsletter::Acknowledgement;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recording(Rc<RefCell<Vec<String>>>);

    impl SubscriptionHandler for Recording {
        fn subscribe(&self, email: &str) -> Acknowledgement {
            self.0.borrow_mut().push(email.to_string());
            Acknowledgement {
                email: email.to_string(),
            }
        }
    }

    #[test]
    fn rejected_drafts_never_reach_the_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let controller = LandingController::new(Box::new(Recording(seen.clone())));
        let mut form = NewsletterForm::new();

        assert!(!controller.submit(&mut form));
        assert_eq!(form.violation(), Some(ConstraintViolation::ValueMissing));

        form.input("no-at-sign");
        assert!(!controller.submit(&mut form));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn accepted_draft_is_handed_over_and_kept() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let controller = LandingController::new(Box::new(Recording(seen.clone())));
        let mut form = NewsletterForm::new();
        form.input("ana@bestial.me");

        assert!(controller.submit(&mut form));
        assert_eq!(*seen.borrow(), vec!["ana@bestial.me".to_string()]);
        assert_eq!(form.draft(), "ana@bestial.me");
        assert!(form.acknowledgement().is_some());
    }

    #[test]
    fn padded_draft_reaches_the_handler_trimmed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let controller = LandingController::new(Box::new(Recording(seen.clone())));
        let mut form = NewsletterForm::new();
        form.input(" ana@bestial.me\t");

        assert!(controller.submit(&mut form));
        assert_eq!(*seen.borrow(), vec!["ana@bestial.me".to_string()]);
        assert_eq!(form.draft(), " ana@bestial.me\t");
    }
}

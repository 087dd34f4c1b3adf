//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Key context set on the landing page root
pub const PAGE_CONTEXT: &str = "LandingPage";

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Page actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum PageAction {
    /// Switch between Spanish and English chrome
    ToggleLocale,
    /// Switch between the consulting and brand layouts
    ToggleVariant,
    /// Scroll back to the hero
    ScrollToTop,
    /// Close the acknowledgement dialog
    DismissDialog,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Page
        KeyBinding::new("secondary-l", PageAction::ToggleLocale, Some(PAGE_CONTEXT)),
        KeyBinding::new("secondary-shift-l", PageAction::ToggleVariant, Some(PAGE_CONTEXT)),
        KeyBinding::new("secondary-home", PageAction::ScrollToTop, Some(PAGE_CONTEXT)),
        KeyBinding::new("escape", PageAction::DismissDialog, Some(PAGE_CONTEXT)),
    ]
}

//! Domain - Pure Page Logic
//!
//! These types don't depend on GPUI: style keys, the reveal state machine,
//! field constraints, the newsletter form and the page copy.

pub mod config;
pub mod content;
pub mod field;
pub mod newsletter;
pub mod reveal;
pub mod style;
pub mod viewport;

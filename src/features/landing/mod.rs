//! Landing Feature
//!
//! The single page of the app: copy, reveals and the newsletter form.

pub mod blocks;
pub mod controller;
pub mod page;

pub use page::LandingPage;

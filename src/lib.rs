//! Bestial Landing Library
//!
//! Native rendition of the "Búscate la vida • con IA" landing page: a
//! consulting layout and a personal-brand layout sharing one component set.

rust_i18n::i18n!("locales", fallback = "es");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod state;
pub mod theme;

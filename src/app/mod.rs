//! Application Layer
//!
//! App initialization and window management.

pub mod application;

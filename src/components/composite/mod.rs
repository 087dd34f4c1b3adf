//! Composite Components
//!
//! Cards and the acknowledgement dialog.

pub mod card;
pub mod dialog;

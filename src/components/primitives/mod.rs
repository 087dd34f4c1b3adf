//! Primitive Components
//!
//! Basic building blocks: buttons and inputs.

pub mod button;
pub mod input;

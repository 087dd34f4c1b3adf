//! Theme - Colors and Typography

pub mod colors;
pub mod palette;
pub mod typography;

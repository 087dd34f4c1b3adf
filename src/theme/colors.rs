//! Colors - Brand Theme Colors

use gpui::{Hsla, Rgba, rgb, rgba};

use crate::theme::palette;

/// Brand color palette - All colors are accessed via associated functions
pub struct BrandColors;

impl BrandColors {
    // Background colors
    /// Page background
    pub fn background() -> Rgba { rgb(palette::ZINC_50) }
    /// Card and panel surface
    pub fn surface() -> Rgba { rgb(palette::WHITE) }
    /// Translucent surface used by pills, the header and the tagline band
    pub fn surface_translucent() -> Rgba { rgba(0xffffff99) }
    /// Header background (70% white)
    pub fn header_bg() -> Rgba { rgba(0xffffffb3) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(palette::ZINC_900) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(palette::ZINC_600) }
    /// Muted text (footnotes)
    pub fn text_muted() -> Rgba { rgb(palette::ZINC_500) }

    // Accent colors
    /// Gradient start
    pub fn accent_indigo() -> Rgba { rgb(palette::INDIGO_600) }
    /// Gradient middle
    pub fn accent_fuchsia() -> Rgba { rgb(palette::FUCHSIA_600) }
    /// Soft gradient tones for the hero visual frame
    pub fn soft_indigo() -> Rgba { rgb(palette::INDIGO_200) }
    pub fn soft_fuchsia() -> Rgba { rgb(palette::FUCHSIA_200) }
    pub fn soft_rose() -> Rgba { rgb(palette::ROSE_200) }

    // Status colors
    /// Constraint violation text
    pub fn danger() -> Rgba { rgb(palette::ROSE_600) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(palette::ZINC_200) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(palette::INDIGO_600) }

    // Overlay
    /// Dialog backdrop
    pub fn backdrop() -> Rgba { rgba(0x00000088) }
}

/// Convert Rgba to Hsla for gradient stops
impl BrandColors {
    pub fn soft_indigo_hsla() -> Hsla {
        Hsla::from(Self::soft_indigo())
    }

    pub fn soft_rose_hsla() -> Hsla {
        Hsla::from(Self::soft_rose())
    }
}

/// Resolve a raw palette value
pub fn hex(value: u32) -> Rgba {
    rgb(value)
}

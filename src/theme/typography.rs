//! Typography - Text sizes and roles

/// Size and line height of one kind of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRole {
    pub size: f32,
    /// Multiple of `size`
    pub leading: f32,
}

impl TextRole {
    pub const fn new(size: f32, leading: f32) -> Self {
        Self { size, leading }
    }

    pub fn line_height(&self) -> f32 {
        self.size * self.leading
    }
}

/// Typography constants
pub struct Typography;

impl Typography {
    // Tailwind size scale
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_3XL: f32 = 30.0;
    pub const TEXT_6XL: f32 = 60.0;

    pub const LEADING_TIGHT: f32 = 1.25;
    pub const LEADING_RELAXED: f32 = 1.625;

    /// Hero headline
    pub const DISPLAY: TextRole = TextRole::new(Self::TEXT_6XL, Self::LEADING_TIGHT);
    /// Section titles
    pub const HEADING: TextRole = TextRole::new(Self::TEXT_3XL, Self::LEADING_TIGHT);
    /// Hero lead paragraph
    pub const LEAD: TextRole = TextRole::new(Self::TEXT_LG, Self::LEADING_RELAXED);
    /// Section descriptions
    pub const BODY: TextRole = TextRole::new(Self::TEXT_BASE, Self::LEADING_RELAXED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_is_set_tight() {
        assert_eq!(Typography::DISPLAY.line_height(), 75.0);
        assert_eq!(Typography::BODY.line_height(), 26.0);
    }
}

//! Viewport - Vertical intersection math

/// A vertical span in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f32,
    pub bottom: f32,
}

impl Extent {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self {
            top,
            bottom: bottom.max(top),
        }
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Length of the overlap with `other`
    pub fn overlap(&self, other: &Extent) -> f32 {
        (self.bottom.min(other.bottom) - self.top.max(other.top)).max(0.0)
    }

    /// Whether enough of `self` is inside `viewport`.
    ///
    /// `threshold` is the visible fraction required, measured against the
    /// smaller of the item and the viewport so that items taller than the
    /// window can still trigger.
    pub fn intersects(&self, viewport: &Extent, threshold: f32) -> bool {
        let reference = self.height().min(viewport.height());
        if reference <= 0.0 {
            return false;
        }
        self.overlap(viewport) / reference >= threshold
    }
}

/// Scroll offset that puts an item's top edge at the top of the viewport.
///
/// Offsets follow the scroll container convention: zero at the start of the
/// content, negative as the content moves up. `item_top` is measured in the
/// same coordinates as `viewport_top`, with `current_offset` already applied.
pub fn anchor_offset(viewport_top: f32, item_top: f32, current_offset: f32) -> f32 {
    (current_offset - (item_top - viewport_top)).min(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Extent = Extent { top: 0.0, bottom: 800.0 };

    #[test]
    fn item_below_fold_does_not_intersect() {
        let item = Extent::new(900.0, 1300.0);
        assert!(!item.intersects(&VIEWPORT, 0.15));
    }

    #[test]
    fn item_peeking_past_threshold_intersects() {
        let item = Extent::new(700.0, 1100.0);
        assert!(item.intersects(&VIEWPORT, 0.15));
        assert!(!item.intersects(&VIEWPORT, 0.5));
    }

    #[test]
    fn tall_item_uses_viewport_as_reference() {
        let item = Extent::new(-2000.0, 3000.0);
        assert!(item.intersects(&VIEWPORT, 1.0));
    }

    #[test]
    fn zero_height_never_intersects() {
        let item = Extent::new(100.0, 100.0);
        assert!(!item.intersects(&VIEWPORT, 0.0));
        assert_eq!(Extent::new(10.0, 5.0).height(), 0.0);
    }

    #[test]
    fn anchor_offset_aligns_item_top() {
        // Item 1200px down the content, nothing scrolled yet
        assert_eq!(anchor_offset(56.0, 1256.0, 0.0), -1200.0);
        // Already scrolled 500px: the item now sits 700px below the top
        assert_eq!(anchor_offset(56.0, 756.0, -500.0), -1200.0);
        assert_eq!(anchor_offset(56.0, 156.0, 0.0), -100.0);
        // Never past the start of the content
        assert_eq!(anchor_offset(56.0, 60.0, 10.0), 0.0);
    }
}

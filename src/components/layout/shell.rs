//! Shell Component
//!
//! The window-filling backdrop every page is drawn on. Children stack
//! vertically; overlays such as the dialog position against it.

use gpui::{
    AnyElement, App, Window, div, linear_color_stop, linear_gradient, prelude::*,
};

use crate::theme::colors::BrandColors;

/// Application shell wrapper
#[derive(IntoElement, Default)]
pub struct Shell {
    children: Vec<AnyElement>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParentElement for Shell {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(linear_gradient(
                180.0,
                linear_color_stop(BrandColors::surface(), 0.0),
                linear_color_stop(BrandColors::background(), 1.0),
            ))
            .text_color(BrandColors::text_primary())
            .children(self.children)
    }
}

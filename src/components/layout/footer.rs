//! Footer Component

use gpui::{App, SharedString, Window, div, prelude::*, px};
use gpui_component::h_flex;

use crate::components::layout::{NavigateHandler, centered, column};
use crate::theme::colors::BrandColors;
use crate::theme::typography::Typography;

/// Copyright line and secondary links
#[derive(IntoElement)]
pub struct Footer {
    copyright: SharedString,
    links: Vec<(SharedString, SharedString)>,
    on_navigate: NavigateHandler,
}

impl Footer {
    pub fn new(copyright: impl Into<SharedString>, on_navigate: NavigateHandler) -> Self {
        Self {
            copyright: copyright.into(),
            links: Vec::new(),
            on_navigate,
        }
    }

    pub fn link(mut self, label: impl Into<SharedString>, anchor: impl Into<SharedString>) -> Self {
        self.links.push((label.into(), anchor.into()));
        self
    }
}

impl RenderOnce for Footer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let links = self.links.into_iter().enumerate().map(|(ix, (label, anchor))| {
            let on_navigate = self.on_navigate.clone();
            div()
                .id(("footer-link", ix))
                .cursor_pointer()
                .hover(|s| s.text_color(BrandColors::text_primary()))
                .on_click(move |_, window, cx| on_navigate(&anchor, window, cx))
                .child(label)
        });

        div()
            .w_full()
            .border_t_1()
            .border_color(BrandColors::border())
            .child(centered(
                column().py_10().child(
                    h_flex()
                        .justify_between()
                        .items_center()
                        .gap_4()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(BrandColors::text_secondary())
                        .child(self.copyright)
                        .child(h_flex().gap_4().children(links)),
                ),
            ))
    }
}

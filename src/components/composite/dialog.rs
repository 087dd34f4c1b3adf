//! Dialog Component
//!
//! A modal acknowledgement drawn over the page.

use gpui::{
    AnyElement, App, ClickEvent, FontWeight, SharedString, Window, div, prelude::*, px,
};
use gpui_component::{Icon, h_flex, v_flex};

use crate::assets::BrandIcon;
use crate::components::primitives::button::Button;
use crate::domain::style::ButtonSize;
use crate::theme::colors::BrandColors;
use crate::theme::typography::Typography;

type CloseHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Dialog component
#[derive(IntoElement)]
pub struct Dialog {
    title: SharedString,
    close_label: SharedString,
    children: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
}

impl Dialog {
    pub fn new(title: impl Into<SharedString>, close_label: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            close_label: close_label.into(),
            children: Vec::new(),
            on_close: None,
        }
    }

    /// Set the close handler, run by the close button, the corner icon and
    /// clicks on the backdrop
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl ParentElement for Dialog {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Dialog {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close.map(std::rc::Rc::new);
        let close = move || {
            let on_close = on_close.clone();
            move |_event: &ClickEvent, window: &mut Window, cx: &mut App| {
                if let Some(handler) = &on_close {
                    handler(window, cx);
                }
            }
        };

        // Backdrop
        div()
            .id("dialog-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(BrandColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .on_click(close())
            .child(
                v_flex()
                    .id("dialog")
                    .occlude()
                    .bg(BrandColors::surface())
                    .rounded(px(24.0))
                    .shadow_lg()
                    .min_w(px(360.0))
                    .max_w(px(520.0))
                    // Clicks inside the dialog stay inside
                    .on_click(|_, _, cx| cx.stop_propagation())
                    .child(
                        h_flex()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(BrandColors::border())
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_LG))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(BrandColors::text_primary())
                                    .child(self.title),
                            )
                            .child(
                                div()
                                    .id("dialog-close-icon")
                                    .size(px(28.0))
                                    .rounded(px(6.0))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .cursor_pointer()
                                    .hover(|s| s.bg(BrandColors::background()))
                                    .on_click(close())
                                    .child(Icon::from(BrandIcon::Close).size_4()),
                            ),
                    )
                    .child(
                        v_flex()
                            .px_6()
                            .py_4()
                            .gap_4()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(BrandColors::text_secondary())
                            .children(self.children),
                    )
                    .child(
                        h_flex().px_6().pb_6().justify_end().child(
                            Button::new("dialog-close", self.close_label)
                                .size(ButtonSize::Small)
                                .on_click(close()),
                        ),
                    ),
            )
    }
}

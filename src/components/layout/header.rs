//! Header Component
//!
//! Sticky bar with the logo, in-page navigation, locale and layout switchers
//! and the header call to action.

use gpui::{
    AnyElement, App, ClickEvent, FontWeight, SharedString, Window, div, img, prelude::*, px,
};
use gpui_component::{Icon, h_flex};

use crate::assets::{BrandIcon, LOGO_PATH};
use crate::components::layout::{NavigateHandler, centered};
use crate::constants::HEADER_HEIGHT;
use crate::domain::content::TOP_ANCHOR;
use crate::helpers::PageAction;
use crate::i18n::{Locale, tr};
use crate::theme::colors::BrandColors;
use crate::theme::typography::Typography;

/// Header component
#[derive(IntoElement)]
pub struct Header {
    brand: SharedString,
    links: Vec<(SharedString, SharedString)>,
    locale: Locale,
    cta: Option<AnyElement>,
    on_navigate: NavigateHandler,
}

impl Header {
    pub fn new(brand: impl Into<SharedString>, locale: Locale, on_navigate: NavigateHandler) -> Self {
        Self {
            brand: brand.into(),
            links: Vec::new(),
            locale,
            cta: None,
            on_navigate,
        }
    }

    /// Add a navigation link to `anchor`
    pub fn link(mut self, label: impl Into<SharedString>, anchor: impl Into<SharedString>) -> Self {
        self.links.push((label.into(), anchor.into()));
        self
    }

    /// Call to action at the right edge
    pub fn cta(mut self, cta: impl IntoElement) -> Self {
        self.cta = Some(cta.into_any_element());
        self
    }

    fn navigate(&self, anchor: SharedString) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
        let on_navigate = self.on_navigate.clone();
        move |_, window, cx| on_navigate(&anchor, window, cx)
    }

    fn render_switch(
        id: &'static str,
        label: SharedString,
        icon: Option<BrandIcon>,
        action: PageAction,
    ) -> impl IntoElement {
        h_flex()
            .id(id)
            .gap_1()
            .items_center()
            .px_2()
            .py_1()
            .rounded(px(6.0))
            .text_size(px(Typography::TEXT_XS))
            .text_color(BrandColors::text_secondary())
            .cursor_pointer()
            .hover(|s| s.bg(BrandColors::surface()))
            .on_click(move |_, window, cx| window.dispatch_action(Box::new(action), cx))
            .children(icon.map(|icon| Icon::from(icon).size_4()))
            .child(label)
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let home = self.navigate(TOP_ANCHOR.into());
        let links: Vec<_> = self
            .links
            .iter()
            .enumerate()
            .map(|(ix, (label, anchor))| {
                div()
                    .id(("nav-link", ix))
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(BrandColors::text_secondary())
                    .cursor_pointer()
                    .hover(|s| s.text_color(BrandColors::text_primary()))
                    .on_click(self.navigate(anchor.clone()))
                    .child(label.clone())
            })
            .collect();

        let language = SharedString::from(format!(
            "{} · {}",
            tr(self.locale, "header.language"),
            self.locale.toggled().display_name()
        ));

        div()
            .w_full()
            .h(px(HEADER_HEIGHT))
            .flex_none()
            .flex()
            .items_center()
            .bg(BrandColors::header_bg())
            .border_b_1()
            .border_color(BrandColors::border())
            .child(
                centered(
                    h_flex()
                        .items_center()
                        .justify_between()
                        // Left side: logo and brand
                        .child(
                            h_flex()
                                .id("brand")
                                .gap_2()
                                .items_center()
                                .cursor_pointer()
                                .on_click(home)
                                .child(img(LOGO_PATH).size(px(28.0)))
                                .child(
                                    div()
                                        .font_weight(FontWeight::BOLD)
                                        .text_color(BrandColors::text_primary())
                                        .child(self.brand),
                                ),
                        )
                        // Center: in-page navigation
                        .child(h_flex().gap_6().items_center().children(links))
                        // Right side: switchers and call to action
                        .child(
                            h_flex()
                                .gap_2()
                                .items_center()
                                .child(Self::render_switch(
                                    "locale-switch",
                                    language,
                                    Some(BrandIcon::Languages),
                                    PageAction::ToggleLocale,
                                ))
                                .child(Self::render_switch(
                                    "variant-switch",
                                    tr(self.locale, "header.switch_variant"),
                                    None,
                                    PageAction::ToggleVariant,
                                ))
                                .children(self.cta),
                        ),
                ),
            )
    }
}

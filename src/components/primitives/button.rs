//! Button Component

use gpui::{
    App, ClickEvent, ElementId, FontWeight, SharedString, StyleRefinement, Window, div,
    prelude::*, px,
};
use gpui_component::{Icon, StyledExt};

use crate::assets::BrandIcon;
use crate::domain::content::IconPosition;
use crate::domain::style::{ButtonSize, ButtonStyle, ButtonVariant, StyleDescriptor};
use crate::error::Result;
use crate::theme::colors::hex;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    icon: Option<BrandIcon>,
    icon_position: IconPosition,
    button_style: ButtonStyle,
    disabled: bool,
    style: StyleRefinement,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            icon: None,
            icon_position: IconPosition::Trailing,
            button_style: ButtonStyle::default(),
            disabled: false,
            style: StyleRefinement::default(),
            on_click: None,
        }
    }

    /// Create a square button showing only `icon`
    pub fn icon_only(id: impl Into<ElementId>, icon: BrandIcon) -> Self {
        Self {
            label: None,
            icon: Some(icon),
            ..Self::new(id, "")
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.button_style.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.button_style.size = size;
        self
    }

    /// Set variant and size together
    pub fn button_style(mut self, style: ButtonStyle) -> Self {
        self.button_style = style;
        self
    }

    /// Set variant and size from their keys
    pub fn style_keys(self, variant: &str, size: &str) -> Result<Self> {
        Ok(self.button_style(ButtonStyle::from_keys(variant, size)?))
    }

    /// Icon after the label
    pub fn icon(mut self, icon: BrandIcon) -> Self {
        self.icon = Some(icon);
        self.icon_position = IconPosition::Trailing;
        self
    }

    /// Icon before the label
    pub fn leading_icon(mut self, icon: BrandIcon) -> Self {
        self.icon = Some(icon);
        self.icon_position = IconPosition::Leading;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Descriptor the button renders with, before caller overrides
    pub fn resolved(&self) -> StyleDescriptor {
        self.button_style.resolve()
    }
}

impl Styled for Button {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let descriptor = self.resolved();
        let height = descriptor.height.unwrap_or(40.0);
        let icon_only = self.label.is_none();

        let icon = self.icon.map(|icon| {
            let icon = Icon::from(icon);
            let icon = match self.button_style.size {
                ButtonSize::Large => icon.size_5(),
                ButtonSize::Small | ButtonSize::Medium => icon.size_4(),
            };
            match descriptor.foreground {
                Some(fg) => icon.text_color(hex(fg)),
                None => icon,
            }
        });
        let (leading, trailing) = match self.icon_position {
            IconPosition::Leading => (icon, None),
            IconPosition::Trailing => (None, icon),
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .gap_2()
            .h(px(height))
            .font_weight(FontWeight::MEDIUM)
            .when(icon_only, |el| el.w(px(height)))
            .when_some(descriptor.padding_x.filter(|_| !icon_only), |el, x| el.px(px(x)))
            .when_some(descriptor.text_size, |el, size| el.text_size(px(size)))
            .when_some(descriptor.radius, |el, radius| el.rounded(px(radius)))
            .when_some(descriptor.background, |el, bg| el.bg(hex(bg)))
            .when_some(descriptor.foreground, |el, fg| el.text_color(hex(fg)))
            .when_some(descriptor.border, |el, border| {
                el.border_1().border_color(hex(border))
            })
            .children(leading)
            .children(self.label)
            .children(trailing);

        if self.disabled {
            element = element.opacity(descriptor.disabled_opacity.unwrap_or(0.5));
        } else {
            element = element
                .cursor_pointer()
                .when_some(descriptor.hover_background, |el, hover| {
                    el.hover(move |s| s.bg(hex(hover)))
                });

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element.refine_style(&self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    // `assert_ok!`/`assert_err!` format the value on failure.
    impl std::fmt::Debug for Button {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Button").field("id", &self.id).finish_non_exhaustive()
        }
    }

    #[test]
    fn keys_pick_the_descriptor() {
        let button = assert_ok!(Button::new("apply", "Aplicar").style_keys("outline", "sm"));
        let descriptor = button.resolved();
        assert_eq!(descriptor, ButtonStyle::new(ButtonVariant::Outline, ButtonSize::Small).resolve());
        assert_eq!(descriptor.height, Some(32.0));
    }

    #[test]
    fn bad_keys_fail_at_construction() {
        assert_err!(Button::new("apply", "Aplicar").style_keys("outline", "icon"));
    }

    #[test]
    fn icon_only_buttons_have_no_label() {
        let button = Button::icon_only("link", BrandIcon::Link).variant(ButtonVariant::Outline);
        assert!(button.label.is_none());
        assert_eq!(button.icon, Some(BrandIcon::Link));
    }
}

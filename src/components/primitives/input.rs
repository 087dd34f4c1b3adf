//! Input Component
//!
//! A single-line field on top of `gpui_component`'s input. The caller owns
//! the `InputState` and listens to its change events; this component only
//! adds the baseline look and the standard constraint prompt.

use gpui::{App, Entity, Focusable, StyleRefinement, Window, div, prelude::*, px};
use gpui_component::input::{Input as FieldInput, InputState};
use gpui_component::{Icon, StyledExt, v_flex};

use crate::assets::BrandIcon;
use crate::domain::field::{ConstraintViolation, FieldConstraint, FieldKind};
use crate::i18n::{Locale, tr};
use crate::theme::colors::BrandColors;
use crate::theme::typography::Typography;

/// Baseline field height
const FIELD_HEIGHT: f32 = 44.0;

/// A controlled text field
#[derive(IntoElement)]
pub struct Input {
    state: Entity<InputState>,
    constraint: FieldConstraint,
    violation: Option<ConstraintViolation>,
    locale: Locale,
    style: StyleRefinement,
}

impl Input {
    pub fn new(state: &Entity<InputState>) -> Self {
        Self {
            state: state.clone(),
            constraint: FieldConstraint::default(),
            violation: None,
            locale: Locale::default(),
            style: StyleRefinement::default(),
        }
    }

    /// Field kind and required flag
    pub fn constraint(mut self, constraint: FieldConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Show the standard prompt for `violation`
    pub fn violation(mut self, violation: Option<ConstraintViolation>) -> Self {
        self.violation = violation;
        self
    }

    /// Locale of the constraint prompt
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Styled for Input {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Input {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let focused = self.state.focus_handle(cx).is_focused(window);
        let border = match (self.violation, focused) {
            (Some(_), _) => BrandColors::danger(),
            (None, true) => BrandColors::border_focus(),
            (None, false) => BrandColors::border(),
        };
        let prompt = self
            .violation
            .map(|violation| tr(self.locale, violation.message_key()));
        let prefix = (self.constraint.kind == FieldKind::Email).then(|| {
            Icon::from(BrandIcon::Mail)
                .size_4()
                .text_color(BrandColors::text_muted())
        });

        v_flex()
            .flex_1()
            .gap_1()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .w_full()
                    .h(px(FIELD_HEIGHT))
                    .px_3()
                    .rounded(px(6.0))
                    .border_1()
                    .border_color(border)
                    .bg(BrandColors::surface())
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(BrandColors::text_primary())
                    .children(prefix)
                    .child(FieldInput::new(&self.state).appearance(false))
                    .refine_style(&self.style),
            )
            .when_some(prompt, |el, prompt| {
                el.child(
                    div()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(BrandColors::danger())
                        .child(prompt),
                )
            })
    }
}

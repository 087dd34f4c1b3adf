//! Section Component
//!
//! The titled content block the page is made of. Each filled slot is one
//! step of the entrance reveal: eyebrow, title, description, the call to
//! action row, then the body.

use gpui::{AnyElement, App, Div, FontWeight, SharedString, Window, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

use crate::components::layout::{centered, column};
use crate::domain::reveal::{RevealFrame, SectionSlot, SlotPresence};
use crate::theme::colors::BrandColors;
use crate::theme::typography::Typography;

/// Section wrapper
#[derive(IntoElement)]
pub struct Section {
    id: SharedString,
    eyebrow: Option<SharedString>,
    title: SharedString,
    description: Option<SharedString>,
    primary: Option<AnyElement>,
    secondary: Option<AnyElement>,
    body: Vec<AnyElement>,
    aside: Vec<AnyElement>,
    framed: bool,
    frame: Option<RevealFrame>,
}

impl Section {
    pub fn new(id: impl Into<SharedString>, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            eyebrow: None,
            title: title.into(),
            description: None,
            primary: None,
            secondary: None,
            body: Vec::new(),
            aside: Vec::new(),
            framed: false,
            frame: None,
        }
    }

    /// Small label above the title
    pub fn eyebrow(mut self, eyebrow: impl Into<SharedString>) -> Self {
        self.eyebrow = Some(eyebrow.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn primary(mut self, cta: impl IntoElement) -> Self {
        self.primary = Some(cta.into_any_element());
        self
    }

    pub fn secondary(mut self, cta: impl IntoElement) -> Self {
        self.secondary = Some(cta.into_any_element());
        self
    }

    /// Second column next to the body
    pub fn aside(mut self, child: impl IntoElement) -> Self {
        self.aside.push(child.into_any_element());
        self
    }

    /// Draw the section inside a tinted frame
    pub fn framed(mut self, framed: bool) -> Self {
        self.framed = framed;
        self
    }

    /// Reveal progress to draw with. Without one the section is fully shown.
    pub fn reveal(mut self, frame: RevealFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Which slots are filled
    pub fn presence(&self) -> SlotPresence {
        SlotPresence {
            eyebrow: self.eyebrow.is_some(),
            description: self.description.is_some(),
            actions: self.primary.is_some() || self.secondary.is_some(),
            body: !self.body.is_empty() || !self.aside.is_empty(),
        }
    }
}

impl ParentElement for Section {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.body.extend(elements);
    }
}

/// Wrap `child` in the fade-and-rise of `step`
pub fn revealed(frame: &RevealFrame, step: usize, child: impl IntoElement) -> Div {
    div()
        .relative()
        .top(px(frame.rise(step)))
        .opacity(frame.opacity(step))
        .child(child)
}

impl RenderOnce for Section {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let presence = self.presence();
        let frame = self
            .frame
            .unwrap_or_else(|| RevealFrame::settled(presence.steps()));
        let step = |slot| presence.step(slot).unwrap_or_default();

        let eyebrow = self.eyebrow.map(|eyebrow| {
            revealed(
                &frame,
                step(SectionSlot::Eyebrow),
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(BrandColors::accent_indigo())
                    .child(eyebrow.to_uppercase()),
            )
        });

        let title = revealed(
            &frame,
            step(SectionSlot::Title),
            div()
                .text_size(px(Typography::HEADING.size))
                .font_weight(FontWeight::BOLD)
                .line_height(px(Typography::HEADING.line_height()))
                .text_color(BrandColors::text_primary())
                .child(self.title),
        );

        let description = self.description.map(|description| {
            revealed(
                &frame,
                step(SectionSlot::Description),
                div()
                    .max_w(px(720.0))
                    .line_height(px(Typography::BODY.line_height()))
                    .text_color(BrandColors::text_secondary())
                    .child(description),
            )
        });

        let actions = presence.actions.then(|| {
            revealed(
                &frame,
                step(SectionSlot::Actions),
                h_flex()
                    .gap_3()
                    .flex_wrap()
                    .children(self.primary)
                    .children(self.secondary),
            )
        });

        let body = presence.body.then(|| {
            let layout = if self.aside.is_empty() {
                v_flex().gap_6().children(self.body)
            } else {
                h_flex()
                    .gap_10()
                    .items_start()
                    .child(v_flex().flex_1().gap_6().children(self.body))
                    .child(v_flex().flex_1().gap_6().children(self.aside))
            };
            revealed(&frame, step(SectionSlot::Body), layout.pt_4())
        });

        let content = v_flex()
            .gap_3()
            .children(eyebrow)
            .child(title)
            .children(description)
            .children(actions)
            .children(body);

        let content = if self.framed {
            div()
                .p_8()
                .rounded(px(24.0))
                .border_1()
                .border_color(BrandColors::border())
                .bg(BrandColors::background())
                .child(content)
        } else {
            content
        };

        div()
            .id(self.id)
            .w_full()
            .child(centered(column().py_16().child(content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_tracks_filled_slots() {
        let section = Section::new("membresia", "Membresía: Sombra con foco")
            .description("Recursos y sesiones")
            .framed(true);
        assert_eq!(
            section.presence().slots(),
            vec![SectionSlot::Title, SectionSlot::Description]
        );

        let section = section.eyebrow("Salud");
        assert_eq!(section.presence().step(SectionSlot::Title), Some(1));
    }
}

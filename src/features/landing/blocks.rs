//! Landing Blocks
//!
//! Turns the declarative page copy into components.

use std::rc::Rc;

use gpui::{
    AlignItems, AnyElement, App, Div, ElementId, Entity, FontWeight, HighlightStyle, SharedString, StyledText,
    Window, div, img, linear_color_stop, linear_gradient, prelude::*, px,
};
use gpui_component::input::InputState;
use gpui_component::{Icon, h_flex, v_flex};

use crate::assets::BrandIcon;
use crate::components::composite::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::layout::section::{Section, revealed};
use crate::components::layout::{NavigateHandler, centered, column};
use crate::components::primitives::button::Button;
use crate::components::primitives::input::Input;
use crate::domain::content::{
    Block, CardBlock, Cta, DocumentsBlock, Feature, Hero, IconPosition, NewsletterBlock, RichText,
    SectionContent,
};
use crate::domain::field::{ConstraintViolation, FieldConstraint};
use crate::domain::reveal::{HeroSlot, RevealFrame};
use crate::i18n::Locale;
use crate::theme::colors::BrandColors;
use crate::theme::typography::Typography;

/// Corner radius of call-to-action buttons on the page (rounded-2xl)
const CTA_RADIUS: f32 = 16.0;

/// The page's email field, handed to the newsletter block
pub struct NewsletterBinding {
    pub state: Entity<InputState>,
    pub constraint: FieldConstraint,
    pub violation: Option<ConstraintViolation>,
    pub on_submit: Rc<dyn Fn(&mut Window, &mut App) + 'static>,
}

/// What block renderers need from the page
pub struct BlockContext {
    pub locale: Locale,
    pub on_navigate: NavigateHandler,
    pub newsletter: NewsletterBinding,
}

fn element_id(key: &str, suffix: impl std::fmt::Display) -> ElementId {
    ElementId::Name(format!("{key}-{suffix}").into())
}

/// Button for a call to action
pub fn cta_button(id: ElementId, cta: &Cta, on_navigate: &NavigateHandler) -> Button {
    let button = match cta.icon {
        Some(icon) if cta.is_icon_only() => Button::icon_only(id, icon),
        icon => {
            let button = Button::new(id, cta.label.clone().unwrap_or_default());
            match (icon, cta.icon_position) {
                (Some(icon), IconPosition::Leading) => button.leading_icon(icon),
                (Some(icon), IconPosition::Trailing) => button.icon(icon),
                (None, _) => button,
            }
        }
    };
    let button = button.button_style(cta.style()).rounded(px(CTA_RADIUS));

    match &cta.target {
        Some(target) => {
            let target = SharedString::from(target.clone());
            let on_navigate = on_navigate.clone();
            button.on_click(move |_, window, cx| on_navigate(&target, window, cx))
        }
        None => {
            let label = cta.label.clone().unwrap_or_default();
            button.on_click(move |_, _, _| {
                tracing::info!(cta = %label, "call to action has no in-page target");
            })
        }
    }
}

/// Text with bold runs
pub fn rich_text(source: &str) -> StyledText {
    let rich = RichText::parse(source);
    let bold = HighlightStyle {
        font_weight: Some(FontWeight::BOLD),
        ..Default::default()
    };
    StyledText::new(rich.text).with_highlights(rich.strong.into_iter().map(|run| (run, bold)))
}

fn icon_text(icon: Option<BrandIcon>, text: &str) -> impl IntoElement {
    h_flex()
        .gap_2()
        .items_center()
        .children(icon.map(|icon| Icon::from(icon).size_4()))
        .child(SharedString::from(text.to_string()))
}

fn check_item(text: &str) -> impl IntoElement {
    h_flex()
        .gap_2()
        .items_center()
        .text_size(px(Typography::TEXT_SM))
        .child(
            Icon::from(BrandIcon::CheckCircle)
                .size_4()
                .text_color(BrandColors::accent_indigo()),
        )
        .child(SharedString::from(text.to_string()))
}

// ==================== Hero ====================

/// Hero block, one reveal step per filled slot
pub fn hero(hero: &Hero, frame: &RevealFrame, ctx: &BlockContext) -> AnyElement {
    let presence = hero.presence();
    let step = |slot: HeroSlot| presence.step(slot);

    let pills = h_flex().gap_2().children(hero.pills.iter().map(|pill| {
        div()
            .px_3()
            .py_1()
            .rounded_full()
            .border_1()
            .border_color(BrandColors::border())
            .bg(BrandColors::surface_translucent())
            .text_size(px(Typography::TEXT_XS))
            .font_weight(FontWeight::MEDIUM)
            .child(icon_text(pill.icon, &pill.text))
    }));

    let headline = format!("{}{}{}", hero.headline, hero.accent, hero.suffix);
    let accent_start = hero.headline.len();
    let accent = HighlightStyle {
        color: Some(BrandColors::accent_fuchsia().into()),
        ..Default::default()
    };
    let headline = div()
        .text_size(px(Typography::DISPLAY.size))
        .font_weight(FontWeight::EXTRA_BOLD)
        .line_height(px(Typography::DISPLAY.line_height()))
        .child(
            StyledText::new(headline)
                .with_highlights([(accent_start..accent_start + hero.accent.len(), accent)]),
        );

    let lead = div()
        .text_size(px(Typography::LEAD.size))
        .line_height(px(Typography::LEAD.line_height()))
        .text_color(BrandColors::text_secondary())
        .child(SharedString::from(hero.lead.clone()));

    let actions = h_flex()
        .gap_3()
        .flex_wrap()
        .children(
            hero.primary
                .iter()
                .map(|cta| cta_button("hero-primary".into(), cta, &ctx.on_navigate)),
        )
        .children(
            hero.secondary
                .iter()
                .map(|cta| cta_button("hero-secondary".into(), cta, &ctx.on_navigate)),
        );

    let trust = hero.trust.as_ref().map(|trust| {
        div()
            .text_size(px(Typography::TEXT_SM))
            .text_color(BrandColors::text_muted())
            .child(icon_text(trust.icon, &trust.text))
    });

    let visual = div()
        .size(px(420.0))
        .flex_none()
        .rounded(px(24.0))
        .p_1()
        .bg(linear_gradient(
            135.0,
            linear_color_stop(BrandColors::soft_indigo_hsla(), 0.0),
            linear_color_stop(BrandColors::soft_rose_hsla(), 1.0),
        ))
        .child(
            v_flex()
                .size_full()
                .rounded(px(22.0))
                .bg(BrandColors::surface())
                .items_center()
                .justify_center()
                .p_8()
                .gap_4()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_6XL))
                        .child(SharedString::from(hero.visual.glyphs.clone())),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(BrandColors::text_secondary())
                        .text_center()
                        .child(SharedString::from(hero.visual.caption.clone())),
                ),
        );

    centered(
        column().pt_16().pb_12().child(
            h_flex()
                .gap_8()
                .items_center()
                .child(
                    v_flex()
                        .flex_1()
                        .gap_5()
                        .children(step(HeroSlot::Pills).map(|ix| revealed(frame, ix, pills)))
                        .children(step(HeroSlot::Headline).map(|ix| revealed(frame, ix, headline)))
                        .children(step(HeroSlot::Lead).map(|ix| revealed(frame, ix, lead)))
                        .children(
                            step(HeroSlot::Actions).map(|ix| revealed(frame, ix, actions.pt_3())),
                        )
                        .children(
                            step(HeroSlot::Trust)
                                .zip(trust)
                                .map(|(ix, trust)| revealed(frame, ix, trust)),
                        ),
                )
                .children(step(HeroSlot::Visual).map(|ix| revealed(frame, ix, visual))),
        ),
    )
    .into_any_element()
}

/// Quote band under the hero
pub fn tagline(text: &str, frame: &RevealFrame) -> AnyElement {
    centered(
        column().py_4().child(revealed(
            frame,
            0,
            div()
                .p_6()
                .rounded(px(16.0))
                .border_1()
                .border_color(BrandColors::border())
                .bg(BrandColors::surface_translucent())
                .text_center()
                .text_color(BrandColors::text_secondary())
                .child(SharedString::from(text.to_string())),
        )),
    )
    .into_any_element()
}

// ==================== Sections ====================

/// Section wrapper filled from the copy
pub fn section(content: &SectionContent, frame: RevealFrame, ctx: &BlockContext) -> Section {
    let key = content.id.as_str();
    let mut section = Section::new(content.id.clone(), content.title.clone())
        .framed(content.framed)
        .reveal(frame);

    if let Some(eyebrow) = &content.eyebrow {
        section = section.eyebrow(eyebrow.clone());
    }
    if let Some(description) = &content.description {
        section = section.description(description.clone());
    }
    if let Some(cta) = &content.primary {
        section = section.primary(cta_button(element_id(key, "primary"), cta, &ctx.on_navigate));
    }
    if let Some(cta) = &content.secondary {
        section =
            section.secondary(cta_button(element_id(key, "secondary"), cta, &ctx.on_navigate));
    }

    let body = content
        .body
        .iter()
        .enumerate()
        .map(|(ix, b)| block(b, &format!("{key}-body-{ix}"), ctx));
    let section = section.children(body);

    content
        .aside
        .iter()
        .enumerate()
        .fold(section, |section, (ix, b)| {
            section.aside(block(b, &format!("{key}-aside-{ix}"), ctx))
        })
}

fn block(block: &Block, key: &str, ctx: &BlockContext) -> AnyElement {
    match block {
        Block::Features { items } => features(items).into_any_element(),
        Block::Card(card) => offer_card(card, key, ctx).into_any_element(),
        Block::Cards { cards } => cards_row()
            .children(cards.iter().enumerate().map(|(ix, card)| {
                offer_card(card, &format!("{key}-{ix}"), ctx).flex_1()
            }))
            .into_any_element(),
        Block::Checklist { items } => v_flex()
            .gap_2()
            .children(items.iter().map(|item| check_item(item)))
            .into_any_element(),
        Block::Documents(documents) => documents_card(documents, key, ctx).into_any_element(),
        Block::Panel { paragraphs } => div()
            .p_6()
            .rounded(px(24.0))
            .border_1()
            .border_color(BrandColors::border())
            .bg(BrandColors::surface_translucent())
            .child(
                v_flex()
                    .gap_2()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(BrandColors::text_secondary())
                    .children(paragraphs.iter().map(|p| rich_text(p))),
            )
            .into_any_element(),
        Block::Note { text } => note(text).into_any_element(),
        Block::Newsletter(newsletter) => newsletter_form(newsletter, key, ctx),
        Block::Portrait { image, caption } => v_flex()
            .gap_2()
            .items_center()
            .child(
                img(SharedString::from(image.clone()))
                    .w(px(320.0))
                    .h(px(400.0))
                    .rounded(px(24.0)),
            )
            .children(caption.clone().map(|caption| note(&caption)))
            .into_any_element(),
        Block::Quote { text, attribution } => v_flex()
            .gap_2()
            .pl_4()
            .border_l_4()
            .border_color(BrandColors::soft_fuchsia())
            .child(
                div()
                    .italic()
                    .text_size(px(Typography::TEXT_XL))
                    .child(SharedString::from(format!("“{text}”"))),
            )
            .children(attribution.clone().map(|who| note(&format!("— {who}"))))
            .into_any_element(),
    }
}

/// Row of offer cards sharing the tallest card's height
fn cards_row() -> Div {
    let mut row = h_flex().gap_6();
    row.style().align_items = Some(AlignItems::Stretch);
    row
}

fn note(text: &str) -> impl IntoElement + use<> {
    div()
        .text_size(px(Typography::TEXT_XS))
        .text_color(BrandColors::text_muted())
        .child(SharedString::from(text.to_string()))
}

fn features(items: &[Feature]) -> impl IntoElement {
    v_flex().gap_6().children(items.iter().map(|item| {
        h_flex()
            .gap_3()
            .items_start()
            .child(div().flex_none().mt_1().child(Icon::from(item.icon).size_5()))
            .child(
                v_flex()
                    .gap_1()
                    .child(
                        div()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(SharedString::from(item.title.clone())),
                    )
                    .children(item.body.as_ref().map(|body| {
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(BrandColors::text_secondary())
                            .child(SharedString::from(body.clone()))
                    })),
            )
    }))
}

fn offer_card(card: &CardBlock, key: &str, ctx: &BlockContext) -> Card {
    let mut title = CardTitle::new(card.title.clone());
    if let Some(icon) = card.icon {
        title = title.icon(icon);
    }

    let bullets = (!card.bullets.is_empty()).then(|| {
        v_flex().gap_1().pl_2().children(
            card.bullets
                .iter()
                .map(|bullet| SharedString::from(format!("• {bullet}"))),
        )
    });
    let checks = (!card.checks.is_empty())
        .then(|| v_flex().gap_2().children(card.checks.iter().map(|c| check_item(c))));
    let actions = (!card.actions.is_empty()).then(|| {
        h_flex().gap_2().pt_2().children(
            card.actions
                .iter()
                .enumerate()
                .map(|(ix, cta)| cta_button(element_id(key, ix), cta, &ctx.on_navigate)),
        )
    });

    Card::new().header(CardHeader::new(title)).content(
        CardContent::new()
            .flex_1()
            .children(card.paragraphs.iter().map(|p| rich_text(p)))
            .children(bullets)
            .children(checks)
            .children(actions),
    )
}

fn documents_card(documents: &DocumentsBlock, key: &str, ctx: &BlockContext) -> Card {
    let mut title = CardTitle::new(documents.title.clone());
    if let Some(icon) = documents.icon {
        title = title.icon(icon);
    }

    let rows = documents.items.iter().enumerate().map(|(ix, item)| {
        h_flex()
            .justify_between()
            .items_center()
            .gap_4()
            .child(SharedString::from(item.name.clone()))
            .child(cta_button(element_id(key, ix), &item.action, &ctx.on_navigate))
    });

    Card::new().header(CardHeader::new(title)).content(
        CardContent::new()
            .children(rows)
            .children(documents.note.as_ref().map(|text| note(text))),
    )
}

fn newsletter_form(newsletter: &NewsletterBlock, key: &str, ctx: &BlockContext) -> AnyElement {
    let binding = &ctx.newsletter;
    let on_submit = binding.on_submit.clone();
    let submit = cta_button(element_id(key, "submit"), &newsletter.submit, &ctx.on_navigate)
        .on_click(move |_, window, cx| on_submit(window, cx));

    v_flex()
        .gap_2()
        .child(
            h_flex()
                .max_w(px(512.0))
                .gap_3()
                .items_start()
                .child(
                    Input::new(&binding.state)
                        .constraint(binding.constraint)
                        .violation(binding.violation)
                        .locale(ctx.locale)
                        .rounded(px(CTA_RADIUS)),
                )
                .child(submit),
        )
        .children(newsletter.note.as_ref().map(|text| note(text)))
        .into_any_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_cards_stretch_to_the_tallest() {
        let mut row = cards_row();
        assert_eq!(row.style().align_items, Some(AlignItems::Stretch));
    }
}

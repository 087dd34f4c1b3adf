//! Card Component
//!
//! A framed container with typed slots. The header always renders above the
//! content, whatever order the slots were attached in.

use gpui::{
    AnyElement, App, FontWeight, SharedString, StyleRefinement, Window, div, prelude::*, px,
};
use gpui_component::{Icon, StyledExt, h_flex, v_flex};

use crate::assets::BrandIcon;
use crate::theme::colors::BrandColors;
use crate::theme::typography::Typography;

/// Slot kinds, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlotKind {
    Header,
    Content,
}

/// Card heading with an optional icon
#[derive(IntoElement)]
pub struct CardTitle {
    icon: Option<BrandIcon>,
    text: SharedString,
}

impl CardTitle {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            icon: None,
            text: text.into(),
        }
    }

    pub fn icon(mut self, icon: BrandIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl RenderOnce for CardTitle {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        h_flex()
            .gap_2()
            .items_center()
            .text_size(px(Typography::TEXT_LG))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(BrandColors::text_primary())
            .children(self.icon.map(|icon| Icon::from(icon).size_5()))
            .child(self.text)
    }
}

/// Header slot, separated from the body by a bottom border
#[derive(IntoElement)]
pub struct CardHeader {
    title: CardTitle,
    children: Vec<AnyElement>,
}

impl CardHeader {
    pub fn new(title: CardTitle) -> Self {
        Self {
            title,
            children: Vec::new(),
        }
    }
}

impl ParentElement for CardHeader {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for CardHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        v_flex()
            .gap_1()
            .px_6()
            .pt_6()
            .pb_4()
            .border_b_1()
            .border_color(BrandColors::border())
            .child(self.title)
            .children(self.children)
    }
}

/// Padded body slot
#[derive(IntoElement, Default)]
pub struct CardContent {
    children: Vec<AnyElement>,
    style: StyleRefinement,
}

impl CardContent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParentElement for CardContent {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for CardContent {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for CardContent {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        v_flex()
            .gap_3()
            .p_6()
            .text_size(px(Typography::TEXT_SM))
            .text_color(BrandColors::text_secondary())
            .children(self.children)
            .refine_style(&self.style)
    }
}

/// Outer frame
#[derive(IntoElement, Default)]
pub struct Card {
    header: Option<CardHeader>,
    contents: Vec<CardContent>,
    style: StyleRefinement,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header slot
    pub fn header(mut self, header: CardHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Append a content slot
    pub fn content(mut self, content: CardContent) -> Self {
        self.contents.push(content);
        self
    }

    /// Slots in the order they render
    pub fn slot_kinds(&self) -> Vec<CardSlotKind> {
        self.header
            .iter()
            .map(|_| CardSlotKind::Header)
            .chain(self.contents.iter().map(|_| CardSlotKind::Content))
            .collect()
    }
}

impl Styled for Card {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        v_flex()
            .rounded(px(24.0))
            .border_1()
            .border_color(BrandColors::border())
            .bg(BrandColors::surface())
            .shadow_sm()
            .overflow_hidden()
            .children(self.header)
            .children(self.contents)
            .refine_style(&self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_renders_before_content_regardless_of_attach_order() {
        let card = Card::new()
            .content(CardContent::new())
            .header(CardHeader::new(CardTitle::new("Documentos y frameworks")))
            .content(CardContent::new());

        assert_eq!(
            card.slot_kinds(),
            vec![CardSlotKind::Header, CardSlotKind::Content, CardSlotKind::Content]
        );
    }

    #[test]
    fn header_slot_is_replaced_not_duplicated() {
        let card = Card::new()
            .header(CardHeader::new(CardTitle::new("Uno")))
            .header(CardHeader::new(CardTitle::new("Dos").icon(BrandIcon::Bot)));

        assert_eq!(card.slot_kinds(), vec![CardSlotKind::Header]);
    }

    #[test]
    fn content_only_card() {
        let card = Card::new().content(CardContent::new());
        assert_eq!(card.slot_kinds(), vec![CardSlotKind::Content]);
    }
}

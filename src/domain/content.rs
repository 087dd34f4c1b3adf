//! Content - Declarative page copy
//!
//! Each page variant is a TOML document compiled into the binary. Parsing
//! resolves style keys and icon names; `validate` then checks the links
//! between the parts so that a bad document fails at startup instead of
//! rendering a broken page.

use std::collections::HashSet;
use std::ops::Range;

use serde::Deserialize;

use crate::assets::{Assets, BrandIcon};
use crate::domain::config::PageVariant;
use crate::domain::reveal::{HeroPresence, SlotPresence};
use crate::domain::style::{ButtonSize, ButtonStyle, ButtonVariant};
use crate::error::{Error, Result};

const CONSULTING: &str = include_str!("../../content/consulting.toml");
const BRAND: &str = include_str!("../../content/brand.toml");

/// Anchor that scrolls back to the start of the page
pub const TOP_ANCHOR: &str = "top";

/// The complete copy of one page variant
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageContent {
    pub brand: Brand,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    pub header_cta: Option<Cta>,
    pub hero: Hero,
    pub tagline: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionContent>,
    pub footer: Footer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Brand {
    pub name: String,
    pub logo_alt: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub anchor: String,
}

/// Which side of the label an icon sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Leading,
    #[default]
    Trailing,
}

/// Call-to-action button
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cta {
    pub label: Option<String>,
    pub icon: Option<BrandIcon>,
    #[serde(default)]
    pub icon_position: IconPosition,
    #[serde(default)]
    pub variant: ButtonVariant,
    #[serde(default)]
    pub size: ButtonSize,
    /// Section anchor scrolled to on click
    pub target: Option<String>,
}

impl Cta {
    pub fn style(&self) -> ButtonStyle {
        ButtonStyle::new(self.variant, self.size)
    }

    /// A button with an icon and no label
    pub fn is_icon_only(&self) -> bool {
        self.label.is_none() && self.icon.is_some()
    }
}

/// Short text with an optional icon in front
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconText {
    pub icon: Option<BrandIcon>,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    #[serde(default)]
    pub pills: Vec<IconText>,
    pub headline: String,
    /// Gradient-filled part of the headline
    pub accent: String,
    #[serde(default)]
    pub suffix: String,
    pub lead: String,
    pub primary: Option<Cta>,
    pub secondary: Option<Cta>,
    pub trust: Option<IconText>,
    pub visual: HeroVisual,
}

impl Hero {
    pub fn presence(&self) -> HeroPresence {
        HeroPresence {
            pills: !self.pills.is_empty(),
            actions: self.primary.is_some() || self.secondary.is_some(),
            trust: self.trust.is_some(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroVisual {
    pub glyphs: String,
    pub caption: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionContent {
    pub id: String,
    /// Extra anchors that land on this section
    #[serde(default)]
    pub aliases: Vec<String>,
    pub eyebrow: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub primary: Option<Cta>,
    pub secondary: Option<Cta>,
    /// Draw the section inside a tinted frame
    #[serde(default)]
    pub framed: bool,
    #[serde(default)]
    pub body: Vec<Block>,
    #[serde(default)]
    pub aside: Vec<Block>,
}

impl SectionContent {
    pub fn slot_presence(&self) -> SlotPresence {
        SlotPresence {
            eyebrow: self.eyebrow.is_some(),
            description: self.description.is_some(),
            actions: self.primary.is_some() || self.secondary.is_some(),
            body: !self.body.is_empty() || !self.aside.is_empty(),
        }
    }

    fn anchors(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.body.iter().chain(self.aside.iter())
    }

    fn ctas(&self) -> impl Iterator<Item = &Cta> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .chain(self.blocks().flat_map(Block::ctas))
    }
}

/// Content placed inside a section column
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum Block {
    /// Icon, title and short body per item
    Features { items: Vec<Feature> },
    Card(CardBlock),
    /// A row of equal cards
    Cards { cards: Vec<CardBlock> },
    /// Items with a check mark
    Checklist { items: Vec<String> },
    Documents(DocumentsBlock),
    /// Paragraphs on a translucent surface
    Panel { paragraphs: Vec<String> },
    /// Small print
    Note { text: String },
    Newsletter(NewsletterBlock),
    Portrait { image: String, caption: Option<String> },
    Quote { text: String, attribution: Option<String> },
}

impl Block {
    fn ctas(&self) -> Vec<&Cta> {
        match self {
            Block::Card(card) => card.actions.iter().collect(),
            Block::Cards { cards } => cards.iter().flat_map(|c| c.actions.iter()).collect(),
            Block::Documents(docs) => docs.items.iter().map(|item| &item.action).collect(),
            Block::Newsletter(newsletter) => vec![&newsletter.submit],
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub icon: BrandIcon,
    pub title: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardBlock {
    pub icon: Option<BrandIcon>,
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Plain bullets
    #[serde(default)]
    pub bullets: Vec<String>,
    /// Bullets with a check mark
    #[serde(default)]
    pub checks: Vec<String>,
    #[serde(default)]
    pub actions: Vec<Cta>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentsBlock {
    pub icon: Option<BrandIcon>,
    pub title: String,
    pub items: Vec<DocumentItem>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentItem {
    pub name: String,
    pub action: Cta,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewsletterBlock {
    pub placeholder: String,
    pub submit: Cta,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    #[serde(default)]
    pub links: Vec<NavLink>,
}

/// Where an anchor lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget {
    Top,
    Section(usize),
}

impl PageContent {
    /// The embedded document for `variant`
    pub fn for_variant(variant: PageVariant) -> Result<Self> {
        match variant {
            PageVariant::Consulting => Self::from_toml(CONSULTING),
            PageVariant::Brand => Self::from_toml(BRAND),
        }
    }

    /// Parse and validate a content document
    pub fn from_toml(source: &str) -> Result<Self> {
        let content: PageContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Map an anchor (with or without a leading `#`) to its target
    pub fn resolve(&self, anchor: &str) -> Option<AnchorTarget> {
        let anchor = anchor.trim_start_matches('#');
        if anchor == TOP_ANCHOR {
            return Some(AnchorTarget::Top);
        }
        self.sections
            .iter()
            .position(|section| section.anchors().any(|a| a == anchor))
            .map(AnchorTarget::Section)
    }

    /// The newsletter block and the section holding it
    pub fn newsletter(&self) -> Option<(usize, &NewsletterBlock)> {
        self.sections.iter().enumerate().find_map(|(ix, section)| {
            section.blocks().find_map(|block| match block {
                Block::Newsletter(newsletter) => Some((ix, newsletter)),
                _ => None,
            })
        })
    }

    fn ctas(&self) -> impl Iterator<Item = &Cta> {
        self.header_cta
            .iter()
            .chain(self.hero.primary.iter())
            .chain(self.hero.secondary.iter())
            .chain(self.sections.iter().flat_map(SectionContent::ctas))
    }

    /// Check ids, link targets and block rules
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            for anchor in section.anchors() {
                if anchor.is_empty() || anchor == TOP_ANCHOR || !seen.insert(anchor) {
                    return Err(Error::DuplicateSection {
                        id: anchor.to_string(),
                    });
                }
            }
        }

        let links = self.nav.iter().chain(self.footer.links.iter());
        let targets = links
            .map(|link| link.anchor.as_str())
            .chain(self.ctas().filter_map(|cta| cta.target.as_deref()));
        for anchor in targets {
            if self.resolve(anchor).is_none() {
                return Err(Error::UnknownAnchor {
                    anchor: anchor.trim_start_matches('#').to_string(),
                });
            }
        }

        if let Some(cta) = self.ctas().find(|cta| cta.label.is_none() && cta.icon.is_none()) {
            return Err(Error::Invalid {
                message: format!("call to action without label or icon: {cta:?}"),
            });
        }

        let newsletters = self
            .sections
            .iter()
            .flat_map(SectionContent::blocks)
            .filter(|block| matches!(block, Block::Newsletter(_)))
            .count();
        if newsletters > 1 {
            return Err(Error::Invalid {
                message: format!("{newsletters} newsletter blocks, at most one is allowed"),
            });
        }

        let images = self.sections.iter().flat_map(SectionContent::blocks);
        for block in images {
            if let Block::Portrait { image, .. } = block
                && Assets::get(image).is_none()
            {
                return Err(Error::Invalid {
                    message: format!("portrait image `{image}` is not embedded"),
                });
            }
        }

        Ok(())
    }
}

/// Text with `**strong**` runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText {
    pub text: String,
    /// Byte ranges of strong runs inside `text`
    pub strong: Vec<Range<usize>>,
}

impl RichText {
    /// Strip the `**` markers and record the runs they enclosed. An unclosed
    /// marker runs to the end of the text.
    pub fn parse(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut strong = Vec::new();
        let mut open: Option<usize> = None;

        for (ix, part) in source.split("**").enumerate() {
            if ix > 0 {
                match open.take() {
                    Some(start) => strong.push(start..text.len()),
                    None => open = Some(text.len()),
                }
            }
            text.push_str(part);
        }
        if let Some(start) = open
            && start < text.len()
        {
            strong.push(start..text.len());
        }
        strong.retain(|run| !run.is_empty());

        Self { text, strong }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reveal::HeroSlot;
    use claims::{assert_err, assert_ok, assert_some, assert_some_eq};

    const MINIMAL: &str = r#"
        [brand]
        name = "Bestial"
        logo_alt = "Bestial.me"

        [[nav]]
        label = "Contacto"
        anchor = "contacto"

        [hero]
        headline = "Búscate la vida."
        accent = "Con IA"
        lead = "Lead"
        visual = { glyphs = "*", caption = "caption" }

        [[sections]]
        id = "contacto"
        aliases = ["docs"]
        title = "Contacto"

        [[sections.body]]
        kind = "newsletter"
        placeholder = "Tu email"
        submit = { label = "Enviar", icon = "mail", icon_position = "leading" }

        [footer]
        links = [{ label = "Inicio", anchor = "top" }]
    "#;

    #[test]
    fn both_variants_load() {
        for variant in [PageVariant::Consulting, PageVariant::Brand] {
            let content = assert_ok!(PageContent::for_variant(variant));
            assert!(content.newsletter().is_some(), "{variant} has no newsletter");
            assert!(!content.sections.is_empty());
        }
    }

    #[test]
    fn consulting_variant_keeps_its_anchors() {
        let content = assert_ok!(PageContent::for_variant(PageVariant::Consulting));
        for anchor in ["#programas", "#membresia", "#docs", "#caso", "#contacto"] {
            assert!(content.resolve(anchor).is_some(), "{anchor} does not resolve");
        }
    }

    #[test]
    fn brand_sections_all_have_eyebrows() {
        let content = assert_ok!(PageContent::for_variant(PageVariant::Brand));
        let ids: Vec<_> = content.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            ["profesion", "salud", "vida", "formacion", "biblioteca", "about", "newsletter"]
        );
        assert!(content.sections.iter().all(|s| s.eyebrow.is_some()));
    }

    #[test]
    fn minimal_document_resolves_anchors() {
        let content = assert_ok!(PageContent::from_toml(MINIMAL));
        assert_some_eq!(content.resolve("top"), AnchorTarget::Top);
        assert_some_eq!(content.resolve("#docs"), AnchorTarget::Section(0));
        assert_eq!(content.resolve("precios"), None);

        let (section, newsletter) = assert_some!(content.newsletter());
        assert_eq!(section, 0);
        assert_eq!(newsletter.submit.icon_position, IconPosition::Leading);
        assert_eq!(newsletter.submit.style(), ButtonStyle::default());
    }

    #[test]
    fn unknown_style_key_is_rejected() {
        let source = MINIMAL.replace(
            r#"icon_position = "leading""#,
            r#"icon_position = "leading", variant = "destructive""#,
        );
        assert_err!(PageContent::from_toml(&source));
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let source = MINIMAL.replace(r#"icon = "mail""#, r#"icon = "envelope""#);
        assert_err!(PageContent::from_toml(&source));
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        let source = MINIMAL.replace(r#"anchor = "contacto""#, r#"anchor = "precios""#);
        let err = assert_err!(PageContent::from_toml(&source));
        assert!(matches!(err, Error::UnknownAnchor { anchor } if anchor == "precios"));
    }

    #[test]
    fn duplicate_anchor_is_rejected() {
        let source = MINIMAL.replace(r#"aliases = ["docs"]"#, r#"aliases = ["contacto"]"#);
        let err = assert_err!(PageContent::from_toml(&source));
        assert!(matches!(err, Error::DuplicateSection { .. }));
    }

    #[test]
    fn second_newsletter_is_rejected() {
        let source = MINIMAL.replace(
            "[footer]",
            r#"
            [[sections.aside]]
            kind = "newsletter"
            placeholder = "Otra vez"
            submit = { label = "Enviar" }

            [footer]
            "#,
        );
        assert_err!(PageContent::from_toml(&source));
    }

    #[test]
    fn empty_cta_is_rejected() {
        let source = MINIMAL.replace(
            r#"submit = { label = "Enviar", icon = "mail", icon_position = "leading" }"#,
            r#"submit = { size = "sm" }"#,
        );
        assert_err!(PageContent::from_toml(&source));
    }

    #[test]
    fn slot_presence_follows_the_copy() {
        let content = assert_ok!(PageContent::from_toml(MINIMAL));
        let presence = content.sections[0].slot_presence();
        assert!(!presence.eyebrow);
        assert!(presence.body);
        assert_eq!(presence.steps(), 2);
    }

    #[test]
    fn bare_hero_visual_follows_the_lead() {
        let content = assert_ok!(PageContent::from_toml(MINIMAL));
        let presence = content.hero.presence();
        assert_some_eq!(presence.step(HeroSlot::Lead), 1);
        assert_some_eq!(presence.step(HeroSlot::Visual), 2);
        assert_eq!(presence.timeline().steps(), 3);
    }

    #[test]
    fn strong_runs_are_extracted() {
        let rich = RichText::parse("Integro un **copiloto de IA** para tu **equipo**.");
        assert_eq!(rich.text, "Integro un copiloto de IA para tu equipo.");
        assert_eq!(rich.strong.len(), 2);
        assert_eq!(&rich.text[rich.strong[0].clone()], "copiloto de IA");
        assert_eq!(&rich.text[rich.strong[1].clone()], "equipo");

        let plain = RichText::parse("Sin marcas");
        assert!(plain.strong.is_empty());

        let unclosed = RichText::parse("Principio: **gestionar");
        assert_eq!(&unclosed.text[unclosed.strong[0].clone()], "gestionar");
    }
}

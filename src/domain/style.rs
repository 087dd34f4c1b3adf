//! Style - Button Style Keys and Descriptors
//!
//! A button's look is the base fragment, then the variant fragment, then the
//! size fragment. Keys are parsed up front; an unknown key is a configuration
//! error rather than a missing fragment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::theme::palette;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ButtonVariant {
    /// Solid dark button (`default` / `primary`)
    #[default]
    Primary,
    /// Bordered button on a light surface
    Outline,
    /// Text-only button
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [Self::Primary, Self::Outline, Self::Ghost];

    /// Canonical key
    pub fn key(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "default",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }

    /// Style fragment for this variant
    pub fn fragment(self) -> StyleFragment {
        match self {
            ButtonVariant::Primary => StyleFragment {
                token: "variant.default",
                descriptor: StyleDescriptor {
                    background: Some(palette::BLACK),
                    foreground: Some(palette::WHITE),
                    hover_background: Some(palette::NEAR_BLACK),
                    ..StyleDescriptor::EMPTY
                },
            },
            ButtonVariant::Outline => StyleFragment {
                token: "variant.outline",
                descriptor: StyleDescriptor {
                    foreground: Some(palette::ZINC_900),
                    border: Some(palette::ZINC_300),
                    hover_background: Some(palette::ZINC_50),
                    ..StyleDescriptor::EMPTY
                },
            },
            ButtonVariant::Ghost => StyleFragment {
                token: "variant.ghost",
                descriptor: StyleDescriptor {
                    foreground: Some(palette::ZINC_900),
                    hover_background: Some(palette::ZINC_100),
                    ..StyleDescriptor::EMPTY
                },
            },
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        match key {
            "default" | "primary" => Ok(ButtonVariant::Primary),
            "outline" => Ok(ButtonVariant::Outline),
            "ghost" => Ok(ButtonVariant::Ghost),
            _ => Err(Error::UnknownStyleKey {
                kind: "button variant",
                key: key.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ButtonVariant {
    type Error = Error;

    fn try_from(key: String) -> Result<Self> {
        key.parse()
    }
}

impl From<ButtonVariant> for String {
    fn from(variant: ButtonVariant) -> Self {
        variant.key().to_string()
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ButtonSize {
    /// Small button (`sm`)
    Small,
    /// Medium button (`md`, default)
    #[default]
    Medium,
    /// Large button (`lg`)
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Canonical key
    pub fn key(self) -> &'static str {
        match self {
            ButtonSize::Small => "sm",
            ButtonSize::Medium => "md",
            ButtonSize::Large => "lg",
        }
    }

    /// Style fragment for this size
    pub fn fragment(self) -> StyleFragment {
        let (token, height, padding_x, text_size) = match self {
            ButtonSize::Small => ("size.sm", 32.0, 12.0, 14.0),
            ButtonSize::Medium => ("size.md", 40.0, 16.0, 15.0),
            ButtonSize::Large => ("size.lg", 48.0, 20.0, 16.0),
        };

        StyleFragment {
            token,
            descriptor: StyleDescriptor {
                height: Some(height),
                padding_x: Some(padding_x),
                text_size: Some(text_size),
                ..StyleDescriptor::EMPTY
            },
        }
    }
}

impl FromStr for ButtonSize {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        match key {
            "sm" | "small" => Ok(ButtonSize::Small),
            "md" | "medium" => Ok(ButtonSize::Medium),
            "lg" | "large" => Ok(ButtonSize::Large),
            _ => Err(Error::UnknownStyleKey {
                kind: "button size",
                key: key.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ButtonSize {
    type Error = Error;

    fn try_from(key: String) -> Result<Self> {
        key.parse()
    }
}

impl From<ButtonSize> for String {
    fn from(size: ButtonSize) -> Self {
        size.key().to_string()
    }
}

/// Resolved visual properties. `None` leaves the property to earlier fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleDescriptor {
    pub background: Option<u32>,
    pub foreground: Option<u32>,
    pub border: Option<u32>,
    pub hover_background: Option<u32>,
    pub height: Option<f32>,
    pub padding_x: Option<f32>,
    pub text_size: Option<f32>,
    pub radius: Option<f32>,
    pub disabled_opacity: Option<f32>,
}

impl StyleDescriptor {
    pub const EMPTY: StyleDescriptor = StyleDescriptor {
        background: None,
        foreground: None,
        border: None,
        hover_background: None,
        height: None,
        padding_x: None,
        text_size: None,
        radius: None,
        disabled_opacity: None,
    };

    /// Overlay `other` on top of `self`
    pub fn merge(self, other: StyleDescriptor) -> StyleDescriptor {
        StyleDescriptor {
            background: other.background.or(self.background),
            foreground: other.foreground.or(self.foreground),
            border: other.border.or(self.border),
            hover_background: other.hover_background.or(self.hover_background),
            height: other.height.or(self.height),
            padding_x: other.padding_x.or(self.padding_x),
            text_size: other.text_size.or(self.text_size),
            radius: other.radius.or(self.radius),
            disabled_opacity: other.disabled_opacity.or(self.disabled_opacity),
        }
    }
}

/// One named entry of a style table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleFragment {
    pub token: &'static str,
    pub descriptor: StyleDescriptor,
}

/// The fixed fragment every button starts from
pub const BUTTON_BASE: StyleFragment = StyleFragment {
    token: "button.base",
    descriptor: StyleDescriptor {
        background: None,
        foreground: Some(palette::ZINC_900),
        border: None,
        hover_background: None,
        height: Some(40.0),
        padding_x: Some(16.0),
        text_size: Some(15.0),
        radius: Some(6.0),
        disabled_opacity: Some(0.5),
    },
};

/// A validated variant/size pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonStyle {
    #[serde(default)]
    pub variant: ButtonVariant,
    #[serde(default)]
    pub size: ButtonSize,
}

impl ButtonStyle {
    pub fn new(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self { variant, size }
    }

    /// Parse both keys, rejecting anything outside the style tables
    pub fn from_keys(variant: &str, size: &str) -> Result<Self> {
        Ok(Self {
            variant: variant.parse()?,
            size: size.parse()?,
        })
    }

    /// Base, variant and size fragments, in application order
    pub fn fragments(&self) -> [StyleFragment; 3] {
        [BUTTON_BASE, self.variant.fragment(), self.size.fragment()]
    }

    /// Fold the fragments into one descriptor
    pub fn resolve(&self) -> StyleDescriptor {
        self.fragments()
            .iter()
            .fold(StyleDescriptor::EMPTY, |acc, fragment| acc.merge(fragment.descriptor))
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.fragments().iter().map(|f| f.token).collect();
        write!(f, "{}", tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn every_combination_has_one_fragment_from_each_table() {
        let variant_tokens: Vec<_> = ButtonVariant::ALL.iter().map(|v| v.fragment().token).collect();
        let size_tokens: Vec<_> = ButtonSize::ALL.iter().map(|s| s.fragment().token).collect();

        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let fragments = ButtonStyle::new(variant, size).fragments();
                let tokens: Vec<_> = fragments.iter().map(|f| f.token).collect();

                assert_eq!(tokens.iter().filter(|t| **t == BUTTON_BASE.token).count(), 1);
                assert_eq!(tokens.iter().filter(|t| variant_tokens.contains(t)).count(), 1);
                assert_eq!(tokens.iter().filter(|t| size_tokens.contains(t)).count(), 1);
                assert_eq!(tokens[1], variant.fragment().token);
                assert_eq!(tokens[2], size.fragment().token);
            }
        }
    }

    #[test]
    fn display_joins_tokens_in_order() {
        let style = ButtonStyle::new(ButtonVariant::Outline, ButtonSize::Small);
        assert_eq!(style.to_string(), "button.base variant.outline size.sm");
    }

    #[test]
    fn keys_accept_aliases() {
        assert_eq!(assert_ok!("primary".parse::<ButtonVariant>()), ButtonVariant::Primary);
        assert_eq!(assert_ok!("default".parse::<ButtonVariant>()), ButtonVariant::Primary);
        assert_eq!(assert_ok!("small".parse::<ButtonSize>()), ButtonSize::Small);
        assert_eq!(assert_ok!("lg".parse::<ButtonSize>()), ButtonSize::Large);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_err!("icon".parse::<ButtonSize>());
        assert_err!("link".parse::<ButtonVariant>());
        assert_err!(ButtonStyle::from_keys("outline", "xl"));

        let err = ButtonStyle::from_keys("shiny", "md").unwrap_err();
        assert!(err.to_string().contains("shiny"));
    }

    #[test]
    fn later_fragments_override_earlier_ones() {
        let resolved = ButtonStyle::new(ButtonVariant::Primary, ButtonSize::Large).resolve();
        assert_eq!(resolved.height, Some(48.0));
        assert_eq!(resolved.foreground, Some(palette::WHITE));
        assert_eq!(resolved.radius, Some(6.0));

        let ghost = ButtonStyle::new(ButtonVariant::Ghost, ButtonSize::Medium).resolve();
        assert_eq!(ghost.background, None);
        assert_eq!(ghost.border, None);
    }

    #[test]
    fn style_deserializes_from_keys() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            style: ButtonStyle,
        }

        let parsed: Wrapper = assert_ok!(toml::from_str("style = { variant = \"outline\", size = \"sm\" }"));
        assert_eq!(parsed.style, ButtonStyle::new(ButtonVariant::Outline, ButtonSize::Small));

        assert_err!(toml::from_str::<Wrapper>("style = { variant = \"neon\" }"));
    }
}

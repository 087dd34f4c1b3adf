//! Embedded assets for the landing page
//!
//! Uses rust-embed to bundle icons, the logo and the portrait at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

use crate::error::Error;

/// Logo path inside the embedded assets
pub const LOGO_PATH: &str = "brand/logo.svg";

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
#[include = "brand/**/*.svg"]
#[include = "images/**/*"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icons referenced by the page content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BrandIcon {
    ArrowRight,
    Sparkles,
    ShieldCheck,
    FileText,
    CreditCard,
    Rocket,
    Brain,
    Bot,
    Building,
    Users,
    TrendingUp,
    ShoppingCart,
    Download,
    Mail,
    Calendar,
    CheckCircle,
    Link,
    HeartPulse,
    Leaf,
    GraduationCap,
    BookOpen,
    User,
    Languages,
    Close,
}

impl BrandIcon {
    const NAMES: [(&'static str, BrandIcon); 24] = [
        ("arrow-right", BrandIcon::ArrowRight),
        ("sparkles", BrandIcon::Sparkles),
        ("shield-check", BrandIcon::ShieldCheck),
        ("file-text", BrandIcon::FileText),
        ("credit-card", BrandIcon::CreditCard),
        ("rocket", BrandIcon::Rocket),
        ("brain", BrandIcon::Brain),
        ("bot", BrandIcon::Bot),
        ("building", BrandIcon::Building),
        ("users", BrandIcon::Users),
        ("trending-up", BrandIcon::TrendingUp),
        ("shopping-cart", BrandIcon::ShoppingCart),
        ("download", BrandIcon::Download),
        ("mail", BrandIcon::Mail),
        ("calendar", BrandIcon::Calendar),
        ("check-circle", BrandIcon::CheckCircle),
        ("link", BrandIcon::Link),
        ("heart-pulse", BrandIcon::HeartPulse),
        ("leaf", BrandIcon::Leaf),
        ("graduation-cap", BrandIcon::GraduationCap),
        ("book-open", BrandIcon::BookOpen),
        ("user", BrandIcon::User),
        ("languages", BrandIcon::Languages),
        ("x", BrandIcon::Close),
    ];

    /// Name used in content files
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, icon)| *icon == self)
            .map(|(name, _)| *name)
            .unwrap_or("x")
    }

    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        format!("icons/{}.svg", self.name()).into()
    }
}

impl FromStr for BrandIcon {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        Self::NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, icon)| *icon)
            .ok_or_else(|| Error::UnknownIcon {
                name: name.to_string(),
            })
    }
}

impl TryFrom<String> for BrandIcon {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Error> {
        name.parse()
    }
}

impl From<BrandIcon> for String {
    fn from(icon: BrandIcon) -> Self {
        icon.name().to_string()
    }
}

impl From<BrandIcon> for Icon {
    fn from(val: BrandIcon) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_err;

    #[test]
    fn every_icon_is_embedded() {
        for (name, icon) in BrandIcon::NAMES {
            assert_eq!(icon.name(), name);
            assert!(
                Assets::get(&icon.path()).is_some(),
                "missing asset for {name}"
            );
        }
    }

    #[test]
    fn unknown_icon_names_are_rejected() {
        assert_err!("lightning".parse::<BrandIcon>());
    }

    #[test]
    fn brand_images_are_embedded() {
        assert!(Assets::get(LOGO_PATH).is_some());
        assert!(Assets::get("images/portrait.svg").is_some());
    }
}

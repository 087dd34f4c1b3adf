//! i18n - Interface chrome strings
//!
//! Translations live in `locales/*.yml` and are compiled in by rust-i18n.
//! Page copy is part of the declarative content, not of these catalogs.

use gpui::SharedString;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish
    #[default]
    Es,
    /// English
    En,
}

impl Locale {
    /// Locale code used by the catalogs
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Es => "ES",
            Locale::En => "EN",
        }
    }

    /// Match a code such as `en`, `en-US` or `es_ES`
    pub fn from_code(code: &str) -> Option<Self> {
        let language = code.split(['-', '_']).next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// The operating system's locale, if it is one we ship
    pub fn system() -> Option<Self> {
        Self::from_code(&locale_config::Locale::current().to_string())
    }

    /// Toggle between Spanish and English
    pub fn toggled(self) -> Self {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }
}

/// Translate a key
pub fn tr(locale: Locale, key: &str) -> SharedString {
    t!(key, locale = locale.code()).to_string().into()
}

/// Translate a key that interpolates `%{email}`
pub fn tr_email(locale: Locale, key: &str, email: &str) -> SharedString {
    t!(key, locale = locale.code(), email = email).to_string().into()
}

/// Translate a key that interpolates `%{year}`
pub fn tr_year(locale: Locale, key: &str, year: i32) -> SharedString {
    let year = year.to_string();
    t!(key, locale = locale.code(), year = year).to_string().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_matched_by_language() {
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("es_ES"), Some(Locale::Es));
        assert_eq!(Locale::from_code("ES"), Some(Locale::Es));
        assert_eq!(Locale::from_code("zh-CN"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn catalogs_cover_both_locales() {
        assert_eq!(tr(Locale::Es, "dialog.close").to_string(), "Cerrar");
        assert_eq!(tr(Locale::En, "dialog.close").to_string(), "Close");
    }

    #[test]
    fn acknowledgement_embeds_the_address() {
        let text = tr_email(Locale::Es, "newsletter.acknowledged", "person@example.com");
        assert!(text.contains("person@example.com"));
    }

    #[test]
    fn footer_embeds_the_year() {
        let text = tr_year(Locale::En, "footer.copyright", 2026);
        assert!(text.starts_with("© 2026"));
    }
}

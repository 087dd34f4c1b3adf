//! Landing Settings
//!
//! Persisted preferences: page variant, chrome locale and window bounds.

use crate::domain::config::{LandingConfig, PageVariant};
use crate::error::Result;
use crate::helpers::settings_path;
use crate::i18n::Locale;
use gpui::{Bounds, Context, Pixels};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Persisted landing settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingSettings {
    #[serde(default)]
    variant: PageVariant,
    locale: Option<Locale>,
    bounds: Option<Bounds<Pixels>>,
}

impl LandingSettings {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = settings_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        let mut settings = Self::parse(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;
        settings.seed_locale(Locale::system());
        Ok(settings)
    }

    /// Parse settings text; blank text yields defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Fill in the locale from the system when none is stored
    pub fn seed_locale(&mut self, system: Option<Locale>) {
        if self.locale.is_none() {
            self.locale = system;
        }
    }

    /// Save settings to the config file
    pub fn save(&self) -> Result<()> {
        let path = settings_path()?;
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    // ==================== Getters ====================

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    // ==================== Setters ====================

    pub fn set_variant(&mut self, variant: PageVariant, cx: &mut Context<Self>) {
        if self.variant != variant {
            self.variant = variant;
            cx.notify();
        }
    }

    pub fn set_locale(&mut self, locale: Locale, cx: &mut Context<Self>) {
        if self.locale != Some(locale) {
            self.locale = Some(locale);
            cx.notify();
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }
}

impl LandingConfig {
    /// Per-process configuration from the loaded settings
    pub fn from_settings(settings: &LandingSettings) -> Self {
        Self::at_startup(settings.variant(), settings.locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn blank_file_yields_defaults() {
        let settings = assert_ok!(LandingSettings::parse("  \n"));
        assert_eq!(settings, LandingSettings::default());
        assert_eq!(settings.variant(), PageVariant::Consulting);
        assert_eq!(settings.locale(), Locale::Es);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = LandingSettings {
            variant: PageVariant::Brand,
            locale: Some(Locale::En),
            bounds: None,
        };
        let text = assert_ok!(settings.to_toml());
        assert_eq!(assert_ok!(LandingSettings::parse(&text)), settings);
    }

    #[test]
    fn stored_locale_wins_over_system() {
        let mut settings = assert_ok!(LandingSettings::parse("locale = \"es\""));
        settings.seed_locale(Some(Locale::En));
        assert_eq!(settings.locale(), Locale::Es);

        let mut fresh = LandingSettings::default();
        fresh.seed_locale(Some(Locale::En));
        assert_eq!(fresh.locale(), Locale::En);
    }

    #[test]
    fn unknown_variant_is_a_parse_error() {
        assert_err!(LandingSettings::parse("variant = \"minimal\""));
    }

    #[test]
    fn startup_config_carries_the_settings() {
        let settings = assert_ok!(LandingSettings::parse("variant = \"brand\"\nlocale = \"en\""));
        let config = LandingConfig::from_settings(&settings);
        assert_eq!(config.variant, PageVariant::Brand);
        assert_eq!(config.locale, Locale::En);
    }
}

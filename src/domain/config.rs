//! Config - Per-process page configuration

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::Locale;

/// Which of the two page layouts to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Hero, programs, membership, personal case and contact
    #[default]
    Consulting,
    /// Eyebrowed sections: profession, health, life, training, library, about
    Brand,
}

impl PageVariant {
    pub fn name(&self) -> &'static str {
        match self {
            PageVariant::Consulting => "consulting",
            PageVariant::Brand => "brand",
        }
    }

    /// The other variant
    pub fn toggled(self) -> Self {
        match self {
            PageVariant::Consulting => PageVariant::Brand,
            PageVariant::Brand => PageVariant::Consulting,
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageVariant {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "consulting" => Ok(PageVariant::Consulting),
            "brand" => Ok(PageVariant::Brand),
            _ => Err(Error::UnknownVariant {
                name: name.to_string(),
            }),
        }
    }
}

/// Values fixed for the lifetime of the process and passed down to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingConfig {
    pub variant: PageVariant,
    pub locale: Locale,
    /// Copyright year shown in the footer
    pub year: i32,
}

impl LandingConfig {
    pub fn new(variant: PageVariant, locale: Locale, year: i32) -> Self {
        Self {
            variant,
            locale,
            year,
        }
    }

    /// Read the clock once
    pub fn at_startup(variant: PageVariant, locale: Locale) -> Self {
        Self::new(variant, locale, Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn variant_names_round_trip() {
        for variant in [PageVariant::Consulting, PageVariant::Brand] {
            assert_eq!(assert_ok!(variant.name().parse::<PageVariant>()), variant);
        }
        assert_err!("minimal".parse::<PageVariant>());
    }

    #[test]
    fn toggling_switches_between_the_two_layouts() {
        assert_eq!(PageVariant::Consulting.toggled(), PageVariant::Brand);
        assert_eq!(PageVariant::Brand.toggled().toggled(), PageVariant::Brand);
    }

    #[test]
    fn startup_year_is_the_current_year() {
        let config = LandingConfig::at_startup(PageVariant::Brand, Locale::Es);
        assert_eq!(config.year, Local::now().year());
        assert_eq!(config.variant, PageVariant::Brand);
    }
}

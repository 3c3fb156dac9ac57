//! Language catalogue for the document/analysis language selectors.
//!
//! Selections are display-only; nothing detects or translates.

use crate::error::LanguageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language offered in the selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Chinese,
    Japanese,
    Arabic,
    Hindi,
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Russian,
        Language::Chinese,
        Language::Japanese,
        Language::Arabic,
        Language::Hindi,
    ];

    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Russian => "ru",
            Self::Chinese => "zh",
            Self::Japanese => "ja",
            Self::Arabic => "ar",
            Self::Hindi => "hi",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Portuguese => "Portuguese",
            Self::Russian => "Russian",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Arabic => "Arabic",
            Self::Hindi => "Hindi",
        }
    }

    /// Flag emoji shown before the name.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::English => "🇺🇸",
            Self::Spanish => "🇪🇸",
            Self::French => "🇫🇷",
            Self::German => "🇩🇪",
            Self::Italian => "🇮🇹",
            Self::Portuguese => "🇵🇹",
            Self::Russian => "🇷🇺",
            Self::Chinese => "🇨🇳",
            Self::Japanese => "🇯🇵",
            Self::Arabic => "🇸🇦",
            Self::Hindi => "🇮🇳",
        }
    }

    /// Selector option text, e.g. `🇫🇷 French`.
    #[must_use]
    pub fn option_label(self) -> String {
        format!("{} {}", self.flag(), self.name())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == s)
            .ok_or_else(|| LanguageError::UnsupportedCode {
                code: s.to_string(),
            })
    }
}

/// Language of the submitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLanguage {
    #[default]
    AutoDetect,
    Known(Language),
}

impl SourceLanguage {
    pub const AUTO_CODE: &'static str = "auto";

    /// Auto-detect followed by every language.
    #[must_use]
    pub fn options() -> Vec<SourceLanguage> {
        std::iter::once(Self::AutoDetect)
            .chain(Language::ALL.into_iter().map(Self::Known))
            .collect()
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AutoDetect => Self::AUTO_CODE,
            Self::Known(language) => language.code(),
        }
    }

    #[must_use]
    pub fn option_label(self) -> String {
        match self {
            Self::AutoDetect => "🤖 Auto-Detect Language".to_string(),
            Self::Known(language) => language.option_label(),
        }
    }
}

impl FromStr for SourceLanguage {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::AUTO_CODE {
            return Ok(Self::AutoDetect);
        }
        s.parse().map(Self::Known)
    }
}

/// The pair of selections on the homepage and upload screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageChoice {
    pub source: SourceLanguage,
    pub target: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
        for source in SourceLanguage::options() {
            assert_eq!(source.code().parse::<SourceLanguage>(), Ok(source));
        }
    }

    #[test]
    fn source_options_start_with_auto_detect() {
        let options = SourceLanguage::options();
        assert_eq!(options.len(), 12);
        assert_eq!(options[0], SourceLanguage::AutoDetect);
        assert_eq!(options[1], SourceLanguage::Known(Language::English));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(
            "xx".parse::<Language>(),
            Err(LanguageError::UnsupportedCode {
                code: "xx".to_string()
            })
        );
        // Auto-detect is only valid for the document language.
        assert!("auto".parse::<Language>().is_err());
    }

    #[test]
    fn defaults_are_auto_detect_and_english() {
        let choice = LanguageChoice::default();
        assert_eq!(choice.source, SourceLanguage::AutoDetect);
        assert_eq!(choice.target, Language::English);
    }

    #[test]
    fn option_labels_carry_flags() {
        assert_eq!(Language::French.option_label(), "🇫🇷 French");
        assert_eq!(
            SourceLanguage::AutoDetect.option_label(),
            "🤖 Auto-Detect Language"
        );
    }
}

//! Light/dark theme and its style lookup tables.
//!
//! Every themed element asks [`Theme::classes`] for the class string of a
//! semantic role. The tables are constants, so a lookup is a pure function
//! of the theme.

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The visual theme shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Returns the stable name used in cookies and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the style lookup table for this theme.
    #[must_use]
    pub fn classes(self) -> &'static ThemeClasses {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Picks between a light and a dark class for one-off elements.
    #[must_use]
    pub const fn pick(self, light: &'static str, dark: &'static str) -> &'static str {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::Unknown {
                value: s.to_string(),
            }),
        }
    }
}

/// Semantic role → CSS class string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeClasses {
    // Backgrounds
    pub main_bg: &'static str,
    pub card_bg: &'static str,
    pub nav_bg: &'static str,
    pub section_bg: &'static str,
    pub inset_bg: &'static str,
    pub footer_bg: &'static str,
    // Text
    pub primary_text: &'static str,
    pub secondary_text: &'static str,
    pub muted_text: &'static str,
    // Buttons
    pub primary_btn: &'static str,
    pub secondary_btn: &'static str,
    // Borders
    pub border: &'static str,
    pub border_hover: &'static str,
    // Upload areas and icons
    pub upload_bg: &'static str,
    pub upload_border: &'static str,
    pub icon_bg: &'static str,
    pub chip_bg: &'static str,
    pub callout_bg: &'static str,
    // Status badges
    pub badge_risk: &'static str,
    pub badge_summary: &'static str,
    pub badge_steps: &'static str,
    pub check_bg: &'static str,
    pub bullet_ring: &'static str,
    pub bullet_dot: &'static str,
    // Call-to-action band and footer
    pub cta_text: &'static str,
    pub cta_primary_btn: &'static str,
    pub cta_secondary_btn: &'static str,
    pub footer_logo_bg: &'static str,
    pub footer_heading: &'static str,
    pub footer_text: &'static str,
    pub footer_link_hover: &'static str,
    pub footer_divider: &'static str,
}

const LIGHT: ThemeClasses = ThemeClasses {
    main_bg: "bg-amber-50",
    card_bg: "bg-yellow-50",
    nav_bg: "bg-yellow-100 border-amber-200",
    section_bg: "bg-amber-100",
    inset_bg: "bg-gray-50",
    footer_bg: "bg-amber-900 border-amber-800",
    primary_text: "text-amber-900",
    secondary_text: "text-amber-800",
    muted_text: "text-amber-700",
    primary_btn: "bg-amber-800 hover:bg-amber-900",
    secondary_btn: "border-amber-600 text-amber-800 hover:border-amber-700 hover:bg-amber-200",
    border: "border-amber-300",
    border_hover: "hover:border-amber-400",
    upload_bg: "bg-yellow-50",
    upload_border: "border-amber-400",
    icon_bg: "bg-amber-800",
    chip_bg: "bg-amber-200",
    callout_bg: "bg-amber-200",
    badge_risk: "bg-green-100 border-green-400 text-green-800",
    badge_summary: "bg-blue-100 border-blue-400 text-blue-800",
    badge_steps: "bg-purple-100 border-purple-400 text-purple-800",
    check_bg: "bg-green-700",
    bullet_ring: "bg-green-200",
    bullet_dot: "bg-green-700",
    cta_text: "text-amber-200",
    cta_primary_btn: "bg-amber-100 text-amber-900 hover:bg-amber-200",
    cta_secondary_btn: "border-amber-300 text-white hover:border-amber-200 hover:bg-amber-800",
    footer_logo_bg: "bg-amber-700",
    footer_heading: "text-amber-100",
    footer_text: "text-amber-300",
    footer_link_hover: "hover:text-amber-200",
    footer_divider: "border-amber-800",
};

const DARK: ThemeClasses = ThemeClasses {
    main_bg: "bg-gray-900",
    card_bg: "bg-gray-800",
    nav_bg: "bg-gray-800 border-gray-700",
    section_bg: "bg-gray-800",
    inset_bg: "bg-gray-900",
    footer_bg: "bg-gray-900 border-gray-700",
    primary_text: "text-white",
    secondary_text: "text-gray-300",
    muted_text: "text-gray-400",
    primary_btn: "bg-blue-600 hover:bg-blue-700",
    secondary_btn: "border-gray-600 text-gray-300 hover:border-gray-500 hover:bg-gray-700",
    border: "border-gray-600",
    border_hover: "hover:border-gray-500",
    upload_bg: "bg-gray-700",
    upload_border: "border-gray-500",
    icon_bg: "bg-gray-700",
    chip_bg: "bg-gray-600",
    callout_bg: "bg-gray-700",
    badge_risk: "bg-green-900 border-green-700 text-green-300",
    badge_summary: "bg-blue-900 border-blue-700 text-blue-300",
    badge_steps: "bg-purple-900 border-purple-700 text-purple-300",
    check_bg: "bg-green-600",
    bullet_ring: "bg-green-800",
    bullet_dot: "bg-green-400",
    cta_text: "text-gray-300",
    cta_primary_btn: "bg-white text-gray-800 hover:bg-gray-100",
    cta_secondary_btn: "border-gray-400 text-white hover:border-gray-300 hover:bg-gray-700",
    footer_logo_bg: "bg-gray-600",
    footer_heading: "text-white",
    footer_text: "text-gray-400",
    footer_link_hover: "hover:text-white",
    footer_divider: "border-gray-700",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn toggle_flips_once_per_call() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn double_toggle_restores_class_table() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled().classes(), theme.classes());
        }
        assert_ne!(Theme::Light.classes(), Theme::Dark.classes());
    }

    #[test]
    fn toggling_homepage_theme_switches_header_card_and_button_classes() {
        let theme = Theme::default();
        let light = theme.classes();
        assert_eq!(light.nav_bg, "bg-yellow-100 border-amber-200");

        let dark = theme.toggled().classes();
        assert_eq!(dark.nav_bg, "bg-gray-800 border-gray-700");
        assert_eq!(dark.card_bg, "bg-gray-800");
        assert_eq!(dark.primary_btn, "bg-blue-600 hover:bg-blue-700");
        assert_ne!(light.card_bg, dark.card_bg);
        assert_ne!(light.primary_btn, dark.primary_btn);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(ThemeError::Unknown { value }) if value == "sepia"
        ));
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn pick_follows_theme() {
        assert_eq!(Theme::Light.pick("a", "b"), "a");
        assert_eq!(Theme::Dark.pick("a", "b"), "b");
    }
}

//! Components shared by the pages.

pub mod brand;
pub mod icons;
pub mod language_select;
pub mod theme_toggle;

pub use brand::Brand;
pub use icons::{Icon, IconKind};
pub use language_select::LanguageSelectors;
pub use theme_toggle::ThemeToggle;

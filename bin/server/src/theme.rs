//! Process-wide theme state shared by every view.

use crate::preferences::{get_theme_preference, save_theme_preference};
use leptos::prelude::*;
use leptos::task::spawn_local;
use lexilingua_core::{Theme, ThemeClasses};

/// Handle to the application theme, provided once at the root.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    toggled: RwSignal<bool>,
}

impl ThemeContext {
    /// Creates the theme state with the default (light) theme.
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            toggled: RwSignal::new(false),
        }
    }

    /// Creates the theme state and provides it to all descendants.
    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        ctx
    }

    /// Current theme. Tracks.
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Style table for the current theme. Tracks.
    pub fn classes(&self) -> &'static ThemeClasses {
        self.get().classes()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Flips the theme and returns the new value.
    pub fn toggle(&self) -> Theme {
        self.toggled.set(true);
        self.theme.update(|theme| *theme = theme.toggled());
        self.theme.get_untracked()
    }

    /// Applies a preference loaded from the server, unless the visitor has
    /// already toggled. Returns true if it was applied.
    pub fn apply_restored(&self, theme: Theme) -> bool {
        if self.toggled.get_untracked() {
            return false;
        }
        self.theme.set(theme);
        true
    }

    /// Flips the theme and saves the new value as the visitor's preference.
    pub fn toggle_and_persist(&self) {
        let theme = self.toggle();
        spawn_local(async move {
            if let Err(e) = save_theme_preference(theme.as_str().to_string()).await {
                leptos::logging::warn!("failed to save theme preference: {e}");
            }
        });
    }

    /// Loads the saved preference in the browser and applies it once.
    pub fn restore_preference(&self) {
        let ctx = *self;
        let preference = LocalResource::new(get_theme_preference);
        Effect::new(move |_| {
            if let Some(Ok(theme)) = preference.get() {
                ctx.apply_restored(theme);
            }
        });
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the theme provided by the application root.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restored_preference_applies_before_any_toggle() {
        let owner = Owner::new();
        owner.set();

        let ctx = ThemeContext::new();
        assert!(ctx.apply_restored(Theme::Dark));
        assert_eq!(ctx.theme.get_untracked(), Theme::Dark);
    }

    #[test]
    fn late_restore_does_not_undo_a_toggle() {
        let owner = Owner::new();
        owner.set();

        let ctx = ThemeContext::new();
        assert_eq!(ctx.toggle(), Theme::Dark);

        // The cookie round-trip started before the click and reports Light.
        assert!(!ctx.apply_restored(Theme::Light));
        assert_eq!(ctx.theme.get_untracked(), Theme::Dark);
    }

    #[test]
    fn each_toggle_flips_exactly_once() {
        let owner = Owner::new();
        owner.set();

        let ctx = ThemeContext::new();
        assert_eq!(ctx.toggle(), Theme::Dark);
        assert_eq!(ctx.toggle(), Theme::Light);
    }
}

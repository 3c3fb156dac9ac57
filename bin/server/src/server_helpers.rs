//! Helper functions for server functions.
//!
//! Covers request-scoped access to the shared configuration and the theme
//! preference cookie.

use crate::config::{ServerConfig, ThemeConfig};
use crate::error::ContextError;
use axum::Extension;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use leptos::prelude::*;
use lexilingua_core::{Theme, ThemeError};
use std::sync::Arc;

/// Theme preference cookie name.
pub const THEME_COOKIE: &str = "theme";

/// Gets the server configuration attached to the current request.
pub async fn get_config() -> Result<Arc<ServerConfig>, ServerFnError> {
    let Extension(config): Extension<Arc<ServerConfig>> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "Server configuration extension missing");
            ContextError::ConfigMissing {
                details: e.to_string(),
            }
            .into_server_error()
        })?;
    Ok(config)
}

/// Reads the theme preference cookie, if present.
pub fn read_theme_cookie(jar: &CookieJar) -> Option<Result<Theme, ThemeError>> {
    jar.get(THEME_COOKIE).map(|cookie| cookie.value().parse())
}

/// Builds the cookie that stores a theme preference.
///
/// The cookie is readable by scripts; it holds nothing sensitive.
pub fn theme_cookie(theme: Theme, config: &ThemeConfig) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE, theme.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .max_age(time::Duration::days(config.cookie_max_age_days))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cookie_carries_preference() {
        let cookie = theme_cookie(Theme::Dark, &ThemeConfig::default());
        assert_eq!(cookie.name(), THEME_COOKIE);
        assert_eq!(cookie.value(), "dark");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(365)));
    }

    #[test]
    fn reads_theme_back_from_jar() {
        let jar = CookieJar::new().add(theme_cookie(Theme::Dark, &ThemeConfig::default()));
        assert_eq!(read_theme_cookie(&jar), Some(Ok(Theme::Dark)));
    }

    #[test]
    fn missing_and_garbled_cookies() {
        assert_eq!(read_theme_cookie(&CookieJar::new()), None);

        let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "neon"));
        assert!(matches!(read_theme_cookie(&jar), Some(Err(ThemeError::Unknown { .. }))));
    }
}

//! Server functions for visitor preferences and demo settings.

use leptos::prelude::*;
use lexilingua_core::{StageTimings, Theme};

/// Server function returning the visitor's theme.
///
/// Reads the theme cookie and falls back to the configured default when the
/// cookie is missing or unreadable.
#[server]
pub async fn get_theme_preference() -> Result<Theme, ServerFnError> {
    use crate::server_helpers::{get_config, read_theme_cookie};
    use axum_extra::extract::CookieJar;

    let config = get_config().await?;
    let jar: CookieJar = leptos_axum::extract().await?;

    let theme = match read_theme_cookie(&jar) {
        Some(Ok(theme)) => theme,
        Some(Err(e)) => {
            tracing::debug!(error = %e, "Ignoring unreadable theme cookie");
            config.theme.default
        }
        None => config.theme.default,
    };

    Ok(theme)
}

/// Server function to save the visitor's theme as a cookie.
#[server]
pub async fn save_theme_preference(theme: String) -> Result<Theme, ServerFnError> {
    use crate::error::PreferenceError;
    use crate::server_helpers::{get_config, theme_cookie};
    use axum::http::{HeaderValue, header};

    let theme: Theme = theme.parse().map_err(|e| {
        tracing::debug!(error = %e, "Rejected theme preference");
        PreferenceError::InvalidTheme { value: theme.clone() }.into_server_error()
    })?;

    let config = get_config().await?;
    let cookie = theme_cookie(theme, &config.theme);
    let header_value = HeaderValue::from_str(&cookie.to_string()).map_err(|e| {
        tracing::error!(error = %e, "Theme cookie is not a valid header value");
        PreferenceError::CookieEncoding {
            details: e.to_string(),
        }
        .into_server_error()
    })?;

    let response = expect_context::<leptos_axum::ResponseOptions>();
    response.append_header(header::SET_COOKIE, header_value);

    tracing::info!(theme = %theme, "Theme preference saved");

    Ok(theme)
}

/// Server function returning the configured demo stage delays.
#[server]
pub async fn get_demo_timings() -> Result<StageTimings, ServerFnError> {
    use crate::server_helpers::get_config;

    let config = get_config().await?;
    Ok(config.demo)
}

//! Domain error types for server operations.
//!
//! Server functions log the detailed variant and hand the client a
//! user-safe `ServerFnError`.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Visitor preference errors.
#[derive(Debug)]
pub enum PreferenceError {
    /// The submitted theme name is not recognised.
    InvalidTheme { value: String },
    /// The preference cookie could not be encoded as a header.
    CookieEncoding { details: String },
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTheme { value } => write!(f, "invalid theme '{}'", value),
            Self::CookieEncoding { details } => {
                write!(f, "failed to encode preference cookie: {}", details)
            }
        }
    }
}

impl PreferenceError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            PreferenceError::InvalidTheme { .. } => ServerFnError::new("Invalid theme"),
            PreferenceError::CookieEncoding { .. } => {
                ServerFnError::new("Failed to save preference")
            }
        }
    }
}

/// Server context errors.
#[derive(Debug)]
pub enum ContextError {
    /// Server configuration was not attached to the request.
    ConfigMissing { details: String },
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigMissing { details } => {
                write!(f, "server configuration unavailable: {}", details)
            }
        }
    }
}

impl ContextError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            ContextError::ConfigMissing { .. } => ServerFnError::new("Server misconfigured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_theme_keeps_details_out_of_client_message() {
        let err = PreferenceError::InvalidTheme {
            value: "<script>".to_string(),
        };
        assert!(err.to_string().contains("<script>"));
        let client = err.into_server_error().to_string();
        assert!(client.contains("Invalid theme"));
        assert!(!client.contains("<script>"));
    }

    #[test]
    fn context_error_display() {
        let err = ContextError::ConfigMissing {
            details: "missing extension".to_string(),
        };
        assert!(err.to_string().contains("missing extension"));
    }
}

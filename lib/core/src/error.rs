//! Error handling foundation for LexiLingua.
//!
//! Provides the `Result` alias over rootcause's `Report` plus the small set
//! of domain errors raised when parsing user- or configuration-supplied
//! values. Callers add their own context as errors propagate.

use rootcause::Report;
use std::fmt;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

/// Errors from parsing a theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The value is not a known theme name.
    Unknown { value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { value } => {
                write!(f, "unknown theme '{value}', expected 'light' or 'dark'")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

/// Errors from parsing a language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// The code does not name a supported language.
    UnsupportedCode { code: String },
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCode { code } => write!(f, "unsupported language code '{code}'"),
        }
    }
}

impl std::error::Error for LanguageError {}

/// Errors from validating demo stage timings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingError {
    /// A stage delay exceeds the allowed ceiling.
    DelayTooLong {
        stage: &'static str,
        delay_ms: u64,
        max_ms: u64,
    },
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DelayTooLong {
                stage,
                delay_ms,
                max_ms,
            } => write!(
                f,
                "{stage} delay of {delay_ms}ms exceeds the maximum of {max_ms}ms"
            ),
        }
    }
}

impl std::error::Error for TimingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_type_works() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.expect("should be ok"), 42);
    }

    #[test]
    fn theme_error_display() {
        let err = ThemeError::Unknown {
            value: "sepia".to_string(),
        };
        assert!(err.to_string().contains("sepia"));
        assert!(err.to_string().contains("'light' or 'dark'"));
    }

    #[test]
    fn timing_error_display() {
        let err = TimingError::DelayTooLong {
            stage: "analysis",
            delay_ms: 90_000,
            max_ms: 60_000,
        };
        assert!(err.to_string().contains("analysis delay"));
        assert!(err.to_string().contains("60000ms"));
    }
}

//! Core domain types for the LexiLingua presentation layer.
//!
//! This crate holds everything the views decide without a browser:
//!
//! - **Routes**: exact-path screen selection
//! - **Theme**: the shared light/dark flag and its style tables
//! - **Sequence**: the demo's timed stage reveal
//! - **Intake**: drag-and-drop and picker file selection state
//! - **Language**: the selector catalogue
//! - **Analysis**: the canned result the demo plays back

pub mod analysis;
pub mod error;
pub mod intake;
pub mod language;
pub mod route;
pub mod sequence;
pub mod theme;

pub use analysis::{DocumentAnalysis, Finding, QaExchange, RiskLevel, SAMPLE_ANALYSIS, Severity};
pub use error::{LanguageError, Result, ThemeError, TimingError};
pub use intake::{FileIntake, SelectedFile, advertised_limit_label, format_megabytes};
pub use language::{Language, LanguageChoice, SourceLanguage};
pub use route::AppRoute;
pub use sequence::{DemoSequence, DemoStage, StageTimings};
pub use theme::{Theme, ThemeClasses};

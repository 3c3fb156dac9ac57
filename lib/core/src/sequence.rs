//! Scripted reveal sequence for the analysis demo.
//!
//! The demo walks through three stages on fixed delays:
//!
//! - `Uploaded`: the sample document is shown as received
//! - `Analyzing`: a progress card simulates analysis latency
//! - `Results`: the static analysis and Q&A exchange are revealed
//!
//! The stage is a single tagged value. The ordinal and the "analyzing" /
//! "show results" flags are derived from it, so one mutation moves all of
//! them together.

use crate::error::{Result, TimingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A stage of the demo sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoStage {
    #[default]
    Uploaded,
    Analyzing,
    Results,
}

impl DemoStage {
    /// All stages in reveal order.
    pub const ALL: [DemoStage; 3] = [
        DemoStage::Uploaded,
        DemoStage::Analyzing,
        DemoStage::Results,
    ];

    /// Position in the sequence, starting at 0.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Uploaded => 0,
            Self::Analyzing => 1,
            Self::Results => 2,
        }
    }

    #[must_use]
    pub const fn is_analyzing(self) -> bool {
        matches!(self, Self::Analyzing)
    }

    #[must_use]
    pub const fn shows_results(self) -> bool {
        matches!(self, Self::Results)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Results)
    }

    /// The stage that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Uploaded => Some(Self::Analyzing),
            Self::Analyzing => Some(Self::Results),
            Self::Results => None,
        }
    }

    /// Label shown in the progress indicator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uploaded => "Upload Document",
            Self::Analyzing => "AI Analysis",
            Self::Results => "Results & Q&A",
        }
    }

    /// Returns true once the sequence is at or beyond `step`.
    #[must_use]
    pub const fn has_reached(self, step: Self) -> bool {
        step.ordinal() <= self.ordinal()
    }

    /// Returns true once the sequence has moved past `step`.
    #[must_use]
    pub const fn has_passed(self, step: Self) -> bool {
        step.ordinal() < self.ordinal()
    }
}

impl fmt::Display for DemoStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uploaded => f.write_str("uploaded"),
            Self::Analyzing => f.write_str("analyzing"),
            Self::Results => f.write_str("results"),
        }
    }
}

/// Delays between demo stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimings {
    /// Time spent on `Uploaded` before analysis starts, in milliseconds.
    #[serde(default = "default_upload_delay_ms")]
    pub upload_delay_ms: u64,

    /// Time spent on `Analyzing` before results appear, in milliseconds.
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
}

fn default_upload_delay_ms() -> u64 {
    2_000
}

fn default_analysis_delay_ms() -> u64 {
    5_000
}

impl Default for StageTimings {
    fn default() -> Self {
        Self {
            upload_delay_ms: default_upload_delay_ms(),
            analysis_delay_ms: default_analysis_delay_ms(),
        }
    }
}

impl StageTimings {
    /// Upper bound for any single stage delay.
    pub const MAX_DELAY_MS: u64 = 60_000;

    /// Returns how long the sequence dwells on `stage`, or `None` for the
    /// terminal stage.
    #[must_use]
    pub fn delay_after(&self, stage: DemoStage) -> Option<Duration> {
        match stage {
            DemoStage::Uploaded => Some(Duration::from_millis(self.upload_delay_ms)),
            DemoStage::Analyzing => Some(Duration::from_millis(self.analysis_delay_ms)),
            DemoStage::Results => None,
        }
    }

    /// Checks that every delay is within [`Self::MAX_DELAY_MS`].
    ///
    /// # Errors
    ///
    /// Returns `TimingError::DelayTooLong` naming the first offending stage.
    pub fn validate(&self) -> Result<(), TimingError> {
        for (stage, delay_ms) in [
            ("upload", self.upload_delay_ms),
            ("analysis", self.analysis_delay_ms),
        ] {
            if delay_ms > Self::MAX_DELAY_MS {
                return Err(TimingError::DelayTooLong {
                    stage,
                    delay_ms,
                    max_ms: Self::MAX_DELAY_MS,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// The running demo sequence.
///
/// A view arms one timer for [`pending_delay`](Self::pending_delay) and calls
/// [`advance`](Self::advance) when it fires. Tests drive the same state with
/// [`elapse`](Self::elapse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSequence {
    stage: DemoStage,
    timings: StageTimings,
    waited: Duration,
}

impl DemoSequence {
    /// Starts a sequence at `Uploaded`.
    #[must_use]
    pub fn new(timings: StageTimings) -> Self {
        Self {
            stage: DemoStage::Uploaded,
            timings,
            waited: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn stage(&self) -> DemoStage {
        self.stage
    }

    #[must_use]
    pub fn timings(&self) -> StageTimings {
        self.timings
    }

    /// Time left before the next transition, or `None` once terminal.
    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        self.timings
            .delay_after(self.stage)
            .map(|delay| delay.saturating_sub(self.waited))
    }

    /// Moves to the next stage immediately.
    ///
    /// Returns the new stage, or `None` if the sequence was already terminal.
    pub fn advance(&mut self) -> Option<DemoStage> {
        let next = self.stage.next()?;
        tracing::debug!(from = %self.stage, to = %next, "Demo stage transition");
        self.stage = next;
        self.waited = Duration::ZERO;
        Some(next)
    }

    /// Lets `elapsed` time pass, firing every transition that falls due.
    ///
    /// Returns the stages entered, in order.
    pub fn elapse(&mut self, elapsed: Duration) -> Vec<DemoStage> {
        let mut remaining = elapsed;
        let mut entered = Vec::new();
        while let Some(pending) = self.pending_delay() {
            if remaining < pending {
                self.waited += remaining;
                break;
            }
            remaining -= pending;
            if let Some(stage) = self.advance() {
                entered.push(stage);
            }
        }
        entered
    }
}

impl Default for DemoSequence {
    fn default() -> Self {
        Self::new(StageTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn starts_uploaded_with_flags_cleared() {
        let seq = DemoSequence::default();
        assert_eq!(seq.stage(), DemoStage::Uploaded);
        assert_eq!(seq.stage().ordinal(), 0);
        assert!(!seq.stage().is_analyzing());
        assert!(!seq.stage().shows_results());
        assert_eq!(seq.pending_delay(), Some(ms(2_000)));
    }

    #[test]
    fn first_delay_enters_analyzing() {
        let mut seq = DemoSequence::default();
        assert!(seq.elapse(ms(1_999)).is_empty());
        assert_eq!(seq.stage(), DemoStage::Uploaded);

        assert_eq!(seq.elapse(ms(1)), vec![DemoStage::Analyzing]);
        let stage = seq.stage();
        assert_eq!(stage.ordinal(), 1);
        assert!(stage.is_analyzing());
        assert!(!stage.shows_results());
    }

    #[test]
    fn second_delay_enters_results_with_all_flags_together() {
        let mut seq = DemoSequence::default();
        seq.elapse(ms(2_000));
        assert!(seq.elapse(ms(4_999)).is_empty());

        assert_eq!(seq.elapse(ms(1)), vec![DemoStage::Results]);
        let stage = seq.stage();
        assert_eq!(stage.ordinal(), 2);
        assert!(!stage.is_analyzing());
        assert!(stage.shows_results());
    }

    #[test]
    fn one_long_step_fires_transitions_in_order() {
        let mut seq = DemoSequence::default();
        assert_eq!(
            seq.elapse(ms(60_000)),
            vec![DemoStage::Analyzing, DemoStage::Results]
        );
    }

    #[test]
    fn results_is_stable_under_further_time() {
        let mut seq = DemoSequence::default();
        seq.elapse(ms(7_000));
        assert_eq!(seq.pending_delay(), None);
        for _ in 0..10 {
            assert!(seq.elapse(ms(3_600_000)).is_empty());
            assert_eq!(seq.stage(), DemoStage::Results);
        }
        assert_eq!(seq.advance(), None);
    }

    #[test]
    fn advance_resets_partial_wait() {
        let mut seq = DemoSequence::default();
        seq.elapse(ms(1_500));
        assert_eq!(seq.pending_delay(), Some(ms(500)));
        assert_eq!(seq.advance(), Some(DemoStage::Analyzing));
        assert_eq!(seq.pending_delay(), Some(ms(5_000)));
    }

    #[test]
    fn custom_timings_are_honoured() {
        let timings = StageTimings {
            upload_delay_ms: 10,
            analysis_delay_ms: 20,
        };
        let mut seq = DemoSequence::new(timings);
        assert_eq!(seq.elapse(ms(10)), vec![DemoStage::Analyzing]);
        assert_eq!(seq.elapse(ms(20)), vec![DemoStage::Results]);
    }

    #[test]
    fn progress_indicator_reach_and_pass() {
        let current = DemoStage::Analyzing;
        assert!(current.has_reached(DemoStage::Uploaded));
        assert!(current.has_reached(DemoStage::Analyzing));
        assert!(!current.has_reached(DemoStage::Results));
        assert!(current.has_passed(DemoStage::Uploaded));
        assert!(!current.has_passed(DemoStage::Analyzing));
    }

    #[test]
    fn labels_match_progress_steps() {
        let labels: Vec<_> = DemoStage::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Upload Document", "AI Analysis", "Results & Q&A"]);
    }

    #[test]
    fn timings_validation_rejects_excessive_delay() {
        assert!(StageTimings::default().validate().is_ok());
        let timings = StageTimings {
            upload_delay_ms: 2_000,
            analysis_delay_ms: StageTimings::MAX_DELAY_MS + 1,
        };
        let err = timings.validate().unwrap_err();
        assert!(err.to_string().contains("analysis delay"));
    }

    #[test]
    fn timings_fill_missing_fields_from_defaults() {
        let timings: StageTimings =
            serde_json::from_str(r#"{"analysis_delay_ms": 100}"#).unwrap();
        assert_eq!(timings.upload_delay_ms, 2_000);
        assert_eq!(timings.analysis_delay_ms, 100);
    }
}

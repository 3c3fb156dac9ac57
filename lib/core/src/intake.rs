//! File intake state for the upload screen.
//!
//! A file can arrive through the native picker or a drag-and-drop. Only the
//! first file of either payload is kept. Nothing here opens, validates, or
//! transmits the file; the advertised formats and size limit are hints for
//! the picker and the copy, not gates.

use crate::route::AppRoute;
use serde::{Deserialize, Serialize};

/// Extension filter advertised to the native picker.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.jpg,.jpeg,.png,.txt";

/// Size limit shown in the upload copy. Not enforced.
pub const ADVERTISED_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Metadata of a user-selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    name: String,
    size_bytes: u64,
}

impl SelectedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size formatted for display, e.g. `2.00 MB`.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_megabytes(self.size_bytes)
    }
}

/// The advertised size limit as shown in the upload copy, e.g. `10MB`.
#[must_use]
pub fn advertised_limit_label() -> String {
    format!("{}MB", ADVERTISED_MAX_BYTES / 1024 / 1024)
}

/// Formats a byte count as megabytes with two decimals.
#[must_use]
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Local state of the upload drop zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIntake {
    drag_active: bool,
    hovering: bool,
    selected: Option<SelectedFile>,
}

impl FileIntake {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles `dragenter` and `dragover`.
    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    /// Handles `dragleave`.
    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Handles pointer enter/leave on the drop zone.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Handles a drop. Keeps the first file, if any, and ends the drag.
    ///
    /// Returns true if a file was selected.
    pub fn drop_files<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.drag_active = false;
        self.take_first(files)
    }

    /// Handles a picker `change` event. Keeps the first file, if any.
    ///
    /// Returns true if a file was selected.
    pub fn pick_files<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.take_first(files)
    }

    /// Forgets the current selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Whether the drop zone should render highlighted.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.drag_active || self.hovering
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.selected.is_some()
    }

    /// Where the continue action leads, or `None` while nothing is selected.
    #[must_use]
    pub fn continue_target(&self) -> Option<AppRoute> {
        self.can_continue().then_some(AppRoute::Demo)
    }

    fn take_first<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        // Later files in the same payload are discarded.
        match files.into_iter().next() {
            Some(file) => {
                self.selected = Some(file);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> SelectedFile {
        SelectedFile::new("contract.pdf", 2_097_152)
    }

    #[test]
    fn formats_two_megabytes() {
        assert_eq!(contract().display_size(), "2.00 MB");
        assert_eq!(format_megabytes(0), "0.00 MB");
        assert_eq!(format_megabytes(1_258_291), "1.20 MB");
    }

    #[test]
    fn drag_flag_is_cosmetic() {
        let mut intake = FileIntake::new();
        intake.drag_enter();
        assert!(intake.is_drag_active());
        assert!(intake.is_highlighted());
        intake.drag_leave();
        assert!(!intake.is_drag_active());

        // A drop without a preceding dragenter is still accepted.
        assert!(intake.drop_files([contract()]));
        assert_eq!(intake.selected(), Some(&contract()));
    }

    #[test]
    fn drop_ends_drag_and_keeps_first_file() {
        let mut intake = FileIntake::new();
        intake.drag_enter();
        let accepted = intake.drop_files([
            contract(),
            SelectedFile::new("appendix.docx", 10),
            SelectedFile::new("scan.png", 20),
        ]);
        assert!(accepted);
        assert!(!intake.is_drag_active());
        assert_eq!(intake.selected().map(SelectedFile::name), Some("contract.pdf"));
    }

    #[test]
    fn empty_payload_keeps_previous_selection() {
        let mut intake = FileIntake::new();
        intake.pick_files([contract()]);
        assert!(!intake.pick_files(std::iter::empty()));
        assert!(!intake.drop_files(Vec::new()));
        assert_eq!(intake.selected(), Some(&contract()));
    }

    #[test]
    fn picker_and_drop_produce_same_state() {
        let mut picked = FileIntake::new();
        picked.pick_files([contract()]);

        let mut dropped = FileIntake::new();
        dropped.drag_enter();
        dropped.drop_files([contract()]);

        assert_eq!(picked, dropped);
        assert_eq!(picked.continue_target(), dropped.continue_target());
    }

    #[test]
    fn continue_is_disabled_without_selection() {
        let intake = FileIntake::new();
        assert!(!intake.can_continue());
        assert_eq!(intake.continue_target(), None);
    }

    #[test]
    fn oversized_and_unlisted_files_are_accepted() {
        let mut intake = FileIntake::new();
        intake.pick_files([SelectedFile::new("movie.mkv", ADVERTISED_MAX_BYTES * 5)]);
        assert!(intake.can_continue());
    }

    #[test]
    fn clear_disables_continue() {
        let mut intake = FileIntake::new();
        intake.pick_files([contract()]);
        intake.clear();
        assert!(!intake.can_continue());
    }

    #[test]
    fn hover_highlights_without_drag() {
        let mut intake = FileIntake::new();
        intake.set_hovering(true);
        assert!(intake.is_highlighted());
        assert!(!intake.is_drag_active());
        intake.set_hovering(false);
        assert!(!intake.is_highlighted());
    }

    #[test]
    fn advertised_limit_reads_ten_megabytes() {
        assert_eq!(advertised_limit_label(), "10MB");
    }

    #[test]
    fn upload_scenario_reaches_demo() {
        let mut intake = FileIntake::new();
        assert_eq!(intake.continue_target(), None);
        intake.pick_files([contract()]);
        let selected = intake.selected().expect("file selected");
        assert_eq!(selected.name(), "contract.pdf");
        assert_eq!(selected.display_size(), "2.00 MB");
        assert_eq!(intake.continue_target().map(AppRoute::path), Some("/demo"));
    }
}

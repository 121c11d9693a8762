//! Test export target for exercising the wizard without touching the disk.
//!
//! `RecordingTarget` remembers every save and inline open so tests can assert
//! on what would have been handed to the user.
//!
//! # Example
//!
//! ```rust
//! use leadform::{RecordingTarget, download_text, ExportOutcome};
//!
//! let target = RecordingTarget::new();
//! assert_eq!(download_text(&target, "a.txt", "hi"), ExportOutcome::Saved);
//! assert_eq!(target.save_count(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use leadform_types::{ExportError, ExportTarget};

#[derive(Debug, Default)]
struct Recorded {
    saved: Vec<(String, String)>,
    inline: Vec<String>,
}

/// An export target that records instead of writing.
///
/// Clones share the same record, so a clone kept by the test observes exports
/// made through a clone handed to the wizard.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    recorded: Rc<RefCell<Recorded>>,
    fail_save: bool,
    fail_inline: bool,
}

impl RecordingTarget {
    /// Create a target on which both paths succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every save fail.
    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    /// Make every inline open fail.
    pub fn failing_inline(mut self) -> Self {
        self.fail_inline = true;
        self
    }

    /// `(file name, contents)` of every successful save, oldest first.
    pub fn saved(&self) -> Vec<(String, String)> {
        self.recorded.borrow().saved.clone()
    }

    /// Every successfully opened data URI, oldest first.
    pub fn inline_opens(&self) -> Vec<String> {
        self.recorded.borrow().inline.clone()
    }

    pub fn save_count(&self) -> usize {
        self.recorded.borrow().saved.len()
    }

    /// Saves plus inline opens.
    pub fn delivery_count(&self) -> usize {
        let recorded = self.recorded.borrow();
        recorded.saved.len() + recorded.inline.len()
    }
}

impl ExportTarget for RecordingTarget {
    fn save(&self, file_name: &str, contents: &str) -> Result<(), ExportError> {
        if self.fail_save {
            return Err(ExportError::Unavailable("save disabled".to_string()));
        }
        self.recorded
            .borrow_mut()
            .saved
            .push((file_name.to_string(), contents.to_string()));
        Ok(())
    }

    fn open_inline(&self, data_uri: &str) -> Result<(), ExportError> {
        if self.fail_inline {
            return Err(ExportError::Unavailable("inline open disabled".to_string()));
        }
        self.recorded.borrow_mut().inline.push(data_uri.to_string());
        Ok(())
    }
}

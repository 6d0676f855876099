//! Job form state (new job / edit job)

use std::collections::BTreeMap;

use jobdash_core::{Job, JobDraft, ValidationError};

/// Name of the command input, as used by backend validation errors
pub const CMD_FIELD: &str = "cmd";

/// Outcome line shown under the form after a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub message: String,
    pub success: bool,
}

/// Inputs, inline errors and submit status of the job form
#[derive(Debug, Clone, Default)]
pub struct JobForm {
    pub draft: JobDraft,
    /// Field name -> error text from the last failed submit
    pub errors: BTreeMap<String, String>,
    pub status: Option<FormStatus>,
    /// Keyboard focus is in the command input
    pub editing: bool,
    /// A submit is in flight
    pub submitting: bool,
}

impl JobForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new job, keeping any error text until the next submit
    pub fn open_new(&mut self) {
        self.draft = JobDraft::default();
        self.editing = true;
    }

    /// Start editing an existing job
    pub fn open_edit(&mut self, job: &Job) {
        self.draft = JobDraft::edit(job);
        self.editing = true;
    }

    pub fn set_cmd(&mut self, cmd: String) {
        self.draft.cmd = cmd;
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Clear the inputs after a successful create
    pub fn reset(&mut self) {
        self.draft = JobDraft::default();
        self.editing = false;
    }

    /// Replace the error text with exactly the fields the backend named
    pub fn apply_validation(&mut self, errors: &[ValidationError]) {
        self.errors.clear();
        for e in errors {
            self.errors.insert(e.target.clone(), e.error.clone());
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>, success: bool) {
        self.status = Some(FormStatus {
            message: message.into(),
            success,
        });
    }
}

//! Per-page submission state machine
//!
//! `Idle → Submitting → Submitted | Idle (with error)`. Each page owns one
//! machine; nothing is shared between pages.

use super::forms::Form;

/// Where a page's submission currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState<E> {
    /// Editable. `error` holds the last failure, if any.
    Idle { error: Option<String> },
    /// Request in flight, carrying the snapshot that was sent
    Submitting(E),
    /// Request accepted; the echoed input backs the success view
    Submitted(E),
}

impl<E> Default for SubmissionState<E> {
    fn default() -> Self {
        Self::Idle { error: None }
    }
}

impl<E> SubmissionState<E> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// Message of the last failed attempt while idle
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Idle { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Echoed input once submitted
    pub fn submitted(&self) -> Option<&E> {
        match self {
            Self::Submitted(echo) => Some(echo),
            _ => None,
        }
    }

    /// `Idle → Submitting`. No-op unless idle.
    pub fn begin(&mut self, snapshot: E) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::Submitting(snapshot);
        true
    }

    /// `Submitting → Submitted` or `Submitting → Idle { error }`. No-op unless submitting.
    pub fn finish(&mut self, result: Result<(), String>) -> bool {
        if !self.is_submitting() {
            return false;
        }
        let Self::Submitting(snapshot) = std::mem::take(self) else {
            return false;
        };
        *self = match result {
            Ok(()) => Self::Submitted(snapshot),
            Err(error) => Self::Idle { error: Some(error) },
        };
        true
    }
}

/// A form page: its form plus its submission machine
#[derive(Debug, Clone)]
pub struct Page<F, E> {
    pub form: F,
    pub submission: SubmissionState<E>,
}

impl<F: Default, E> Default for Page<F, E> {
    fn default() -> Self {
        Self {
            form: F::default(),
            submission: SubmissionState::default(),
        }
    }
}

impl<F: Form + Default, E> Page<F, E> {
    /// Validate and start submitting the snapshot built from the form.
    ///
    /// Returns the snapshot to send, or `None` if a submission is already
    /// in flight, the page is already submitted, or validation failed (the
    /// field errors are then set on the form).
    pub fn begin_submit(&mut self, snapshot: impl FnOnce(&F) -> E) -> Option<&E> {
        if !self.submission.is_idle() {
            return None;
        }
        if !self.form.validate() {
            return None;
        }
        self.submission.begin(snapshot(&self.form));
        match &self.submission {
            SubmissionState::Submitting(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Apply the outcome of the in-flight request. Field values survive a failure.
    pub fn finish_submit(&mut self, result: Result<(), String>) -> bool {
        self.submission.finish(result)
    }

    /// Whether the form accepts edits (not while a request is in flight)
    pub fn is_editable(&self) -> bool {
        self.submission.is_idle()
    }

    /// "Submit another": reset a submitted page to an empty form
    pub fn reset(&mut self) {
        if self.submission.is_submitted() {
            self.form = F::default();
            self.submission = SubmissionState::default();
        }
    }
}

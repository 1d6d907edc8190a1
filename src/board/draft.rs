//! Creation-form state for a task draft.

use crate::task::{domain::due_date_from_parts, services::CreateTaskRequest};
use chrono::{NaiveDate, NaiveTime};

/// In-progress input for a new task.
///
/// The date and time parts are combined into a due timestamp only when both
/// are present; a lone date or time contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title input.
    pub title: String,
    /// Description input.
    pub description: String,
    /// Due-date calendar part.
    pub date: Option<NaiveDate>,
    /// Due-date clock part.
    pub time: Option<NaiveTime>,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every input field.
    ///
    /// Clearing the form never touches tasks that were already created.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when the draft holds a submittable title.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Builds a creation request from the current inputs.
    #[must_use]
    pub fn to_create_request(&self) -> CreateTaskRequest {
        let mut request = CreateTaskRequest::new(self.title.clone());
        if !self.description.is_empty() {
            request = request.with_description(self.description.clone());
        }
        if let Some(due) = due_date_from_parts(self.date, self.time) {
            request = request.with_due_date(due);
        }
        request
    }
}

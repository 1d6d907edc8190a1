//! Request and response DTOs for the HTTP API.

use crate::task::domain::{Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Wire representation of a task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Optional due timestamp.
    pub due_date: Option<DateTime<Utc>>,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            due_date: task.due_date(),
            completed: task.completed(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Body of `POST /api/tasks`.
///
/// The title is optional at the wire level so a missing field surfaces as a
/// 400 validation error rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskBody {
    /// Task title; required to be present and non-empty.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional due timestamp.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Optional initial completion flag, defaulting to incomplete.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Body of `PUT /api/tasks/{id}`.
///
/// Absent fields leave the stored value untouched; an explicit
/// `"due_date": null` clears the deadline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, when supplied.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description, when supplied.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement due timestamp; `Some(None)` encodes an explicit null.
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement completion flag, when supplied.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Body of a successful `DELETE /api/tasks/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Confirmation message.
    pub message: String,
}

/// Distinguishes an absent field (`None`) from an explicit JSON null
/// (`Some(None)`); pair with `#[serde(default)]`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateTime<Utc>>::deserialize(deserializer).map(Some)
}

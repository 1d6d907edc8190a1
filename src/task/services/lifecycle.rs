//! Service layer for task creation, lookup, mutation, and removal.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    completed: bool,
}

impl CreateTaskRequest {
    /// Creates a request with the required title field.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            completed: false,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial completion flag; tasks start incomplete otherwise.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Request payload for a partial task update.
///
/// Unset fields leave the stored value untouched; `clear_due_date` sets the
/// stored due timestamp back to "no deadline".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<Option<DateTime<Utc>>>,
    completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement due timestamp.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the stored due timestamp.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Sets a replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the raw due-timestamp field (absent / clear / replace).
    #[must_use]
    pub const fn with_due_date_field(mut self, due_date: Option<Option<DateTime<Utc>>>) -> Self {
        self.due_date = due_date;
        self
    }

    fn into_patch(self) -> Result<TaskPatch, TaskDomainError> {
        let title = self.title.map(TaskTitle::new).transpose()?;
        Ok(TaskPatch {
            title,
            description: self.description,
            due_date: self.due_date,
            completed: self.completed,
        })
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is empty and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let task = Task::new(
            title,
            request.description.unwrap_or_default(),
            request.due_date,
            request.completed,
            self.clock.as_ref(),
        );
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Returns all tasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Finds a task by identifier, returning `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Applies a partial update to an existing task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for invalid field values and
    /// [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let patch = request.into_patch()?;
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(patch, self.clock.as_ref());
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Flips the completion flag of an existing task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn toggle(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.toggle_completed(self.clock.as_ref());
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}

//! Client-session task store synchronized with the lifecycle service.

use super::{
    draft::TaskDraft,
    view::{StatusFilter, visible_tasks},
};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{TaskLifecycleResult, TaskLifecycleService},
};
use mockable::Clock;

/// Ordered in-memory task collection behind a single UI session.
///
/// The board is the session's source of truth for ordering; the service is
/// authoritative for everything else. Mutations go through the service
/// first and the returned record is applied locally on success, so a failed
/// write leaves the board unchanged and the error reaches the caller.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    search: String,
    filter: StatusFilter,
    draft: TaskDraft,
}

impl TaskBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the source task collection in its current order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the current search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Sets the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Returns the current status filter.
    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Sets the status filter.
    pub const fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Returns the creation-form draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Returns the creation-form draft for editing.
    pub const fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    /// Derives the visible task list from the current source order, search
    /// text, and status filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(&self.tasks, &self.search, self.filter)
    }

    /// Replaces the source collection with the service's task list.
    ///
    /// Any manual ordering is discarded; ordering is a session artifact and
    /// is never persisted.
    ///
    /// # Errors
    ///
    /// Returns the service error when the listing fails.
    pub async fn load<R, C>(
        &mut self,
        service: &TaskLifecycleService<R, C>,
    ) -> TaskLifecycleResult<()>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        self.tasks = service.list().await?;
        Ok(())
    }

    /// Submits the draft as a new task and clears the form on success.
    ///
    /// # Errors
    ///
    /// Returns the service error when validation or persistence fails; the
    /// draft and the task collection are left untouched in that case.
    pub async fn submit_draft<R, C>(
        &mut self,
        service: &TaskLifecycleService<R, C>,
    ) -> TaskLifecycleResult<Task>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        let created = service.create(self.draft.to_create_request()).await?;
        self.tasks.push(created.clone());
        self.draft.clear();
        Ok(created)
    }

    /// Toggles a task's completion flag through the service.
    ///
    /// # Errors
    ///
    /// Returns the service error (including not-found) when the write
    /// fails; the local collection is left untouched in that case.
    pub async fn toggle<R, C>(
        &mut self,
        service: &TaskLifecycleService<R, C>,
        id: TaskId,
    ) -> TaskLifecycleResult<()>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        let updated = service.toggle(id).await?;
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => *task = updated,
            // Stale session: the record exists server-side but not locally.
            None => self.tasks.push(updated),
        }
        Ok(())
    }

    /// Removes a task through the service.
    ///
    /// # Errors
    ///
    /// Returns the service error (including not-found) when the delete
    /// fails; the local collection is left untouched in that case.
    pub async fn remove<R, C>(
        &mut self,
        service: &TaskLifecycleService<R, C>,
        id: TaskId,
    ) -> TaskLifecycleResult<()>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        service.delete(id).await?;
        self.tasks.retain(|task| task.id() != id);
        Ok(())
    }

    /// Moves the task at `from` to `to` within the source collection.
    ///
    /// Out-of-range or no-op drags are ignored. The visible list is
    /// re-derived afterwards, so a completed task dragged above incomplete
    /// ones still renders below them.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.tasks.len() || to >= self.tasks.len() {
            return;
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
    }
}

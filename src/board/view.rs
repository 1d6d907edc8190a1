//! Pure derivation of the visible task list.

use crate::task::domain::Task;

/// Status filter applied to the visible task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep only completed tasks.
    Completed,
    /// Keep only incomplete tasks.
    Pending,
}

impl StatusFilter {
    /// Returns `true` when the task passes this filter.
    #[must_use]
    pub const fn keeps(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed(),
            Self::Pending => !task.completed(),
        }
    }
}

/// Derives the visible, ordered task list from a source collection.
///
/// The pipeline applies a case-insensitive substring filter on the title,
/// then the status filter, then a stable incomplete-before-complete sort
/// that preserves relative source order within each group. The source
/// collection is never mutated; every call re-derives from scratch.
#[must_use]
pub fn visible_tasks<'a>(tasks: &'a [Task], search: &str, filter: StatusFilter) -> Vec<&'a Task> {
    let needle = search.to_lowercase();
    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.title().as_str().to_lowercase().contains(&needle))
        .filter(|task| filter.keeps(task))
        .collect();
    // sort_by_key is stable, so ties keep their source order.
    visible.sort_by_key(|task| task.completed());
    visible
}

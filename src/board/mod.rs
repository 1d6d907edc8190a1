//! Client-session board: task collection, creation draft, and list view.
//!
//! The board owns the ordered task collection shown by a UI session and
//! derives the visible list with a pure pipeline (search filter, status
//! filter, stable incomplete-first sort). Mutations write through the task
//! lifecycle service so the session and the durable store stay in step.

mod draft;
mod session;
mod view;

pub use draft::TaskDraft;
pub use session::TaskBoard;
pub use view::{StatusFilter, visible_tasks};

#[cfg(test)]
mod tests;

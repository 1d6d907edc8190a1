//! Domain model for personal task records.
//!
//! The task domain models record creation, completion toggling, partial
//! updates, and due-timestamp construction while keeping all infrastructure
//! concerns outside of the domain boundary.

mod due;
mod error;
mod ids;
mod task;

pub use due::due_date_from_parts;
pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskPatch};

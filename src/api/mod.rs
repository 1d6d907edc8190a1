//! REST surface for the task lifecycle, mounted under `/api/tasks`.
//!
//! Status-code mapping: validation failures (empty title, malformed id)
//! are 400, unknown ids are 404, store failures are 500. Every failing
//! response carries the same `{"error": ...}` envelope.

mod error;
mod extract;
mod models;
mod routes;
mod server;

pub use error::{ApiError, ErrorBody};
pub use models::{CreateTaskBody, DeleteResponse, TaskResponse, UpdateTaskBody};
pub use routes::{AppState, create_router};
pub use server::serve;

//! Route handlers for the task REST API.

use super::{
    error::ApiError,
    extract::ApiJson,
    models::{CreateTaskBody, DeleteResponse, TaskResponse, UpdateTaskBody},
};
use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskLifecycleService, UpdateTaskRequest},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use mockable::Clock;
use std::sync::Arc;

/// Shared application dependencies.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task lifecycle service backing every handler.
    pub service: Arc<TaskLifecycleService<R, C>>,
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates application state around a lifecycle service.
    #[must_use]
    pub fn new(service: TaskLifecycleService<R, C>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Builds the application router with every task endpoint mounted under
/// `/api/tasks`.
#[must_use]
pub fn create_router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/tasks",
            get(list_tasks::<R, C>).post(create_task::<R, C>),
        )
        .route(
            "/api/tasks/:id",
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .with_state(state)
}

fn parse_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::parse(raw).map_err(|err| match err {
        TaskDomainError::InvalidTaskId(_) => ApiError::bad_request("Invalid ID"),
        other => ApiError::bad_request(other.to_string()),
    })
}

/// `GET /api/tasks`: lists every task.
async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.service.list().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `GET /api/tasks/{id}`: fetches a single task.
async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = parse_id(&id)?;
    let task = state
        .service
        .get(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task not found"))?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `POST /api/tasks`: creates a task, returning 201 with the stored record.
async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    ApiJson(body): ApiJson<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let mut request = CreateTaskRequest::new(body.title.unwrap_or_default());
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }
    if let Some(completed) = body.completed {
        request = request.with_completed(completed);
    }

    let task = state.service.create(request).await?;
    tracing::debug!(id = %task.id(), "task created");
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// `PUT /api/tasks/{id}`: merges supplied fields into an existing task.
///
/// Unknown ids return 404 with no store mutation.
async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateTaskBody>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = parse_id(&id)?;
    let mut request = UpdateTaskRequest::new().with_due_date_field(body.due_date);
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(completed) = body.completed {
        request = request.with_completed(completed);
    }

    let task = state.service.update(task_id, request).await?;
    tracing::debug!(id = %task.id(), "task updated");
    Ok(Json(TaskResponse::from(&task)))
}

/// `DELETE /api/tasks/{id}`: removes a task.
async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = parse_id(&id)?;
    state.service.delete(task_id).await?;
    tracing::debug!(id = %task_id, "task deleted");
    Ok(Json(DeleteResponse {
        message: "Task deleted".to_owned(),
    }))
}

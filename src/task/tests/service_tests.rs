//! Service orchestration tests for the task lifecycle.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskDomainError,
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_retrievable(service: TestService) {
    let request = CreateTaskRequest::new("Buy milk").with_description("two litres, semi-skimmed");

    let created = service.create(request).await.expect("creation succeeds");
    let fetched = service
        .get(created.id())
        .await
        .expect("lookup succeeds")
        .expect("task exists");

    assert_eq!(fetched, created);
    assert_eq!(fetched.title().as_str(), "Buy milk");
    assert_eq!(fetched.description(), "two litres, semi-skimmed");
    assert!(!fetched.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_honours_an_initial_completed_flag(service: TestService) {
    let request = CreateTaskRequest::new("Already ticked off").with_completed(true);

    let created = service.create(request).await.expect("creation succeeds");

    assert!(created.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_title(service: TestService) {
    let result = service.create(CreateTaskRequest::new("   ")).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_creates_yield_distinct_ids(service: TestService) {
    let first = service
        .create(CreateTaskRequest::new("Water the plants"))
        .await
        .expect("first creation succeeds");
    let second = service
        .create(CreateTaskRequest::new("Water the plants"))
        .await
        .expect("second creation succeeds");

    assert_ne!(first.id(), second.id());
    let listed = service.list().await.expect("listing succeeds");
    assert_eq!(listed.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_in_creation_order(service: TestService) {
    for title in ["first", "second", "third"] {
        service
            .create(CreateTaskRequest::new(title))
            .await
            .expect("creation succeeds");
    }

    let titles: Vec<String> = service
        .list()
        .await
        .expect("listing succeeds")
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();

    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_merges_fields_and_persists(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Draft"))
        .await
        .expect("creation succeeds");

    let due = Utc
        .with_ymd_and_hms(2025, 7, 1, 8, 0, 0)
        .single()
        .expect("unambiguous timestamp");
    let updated = service
        .update(
            created.id(),
            UpdateTaskRequest::new()
                .with_title("Final")
                .with_due_date(due),
        )
        .await
        .expect("update succeeds");

    assert_eq!(updated.title().as_str(), "Final");
    assert_eq!(updated.due_date(), Some(due));
    assert_eq!(updated.description(), created.description());

    let fetched = service
        .get(created.id())
        .await
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_blank_replacement_title(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Keep me"))
        .await
        .expect("creation succeeds");

    let result = service
        .update(created.id(), UpdateTaskRequest::new().with_title(""))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));

    let fetched = service
        .get(created.id())
        .await
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(fetched.title().as_str(), "Keep me");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_reports_not_found(service: TestService) {
    let id = crate::task::domain::TaskId::new();
    let result = service.update(id, UpdateTaskRequest::new().with_title("x")).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(TaskRepositoryError::NotFound(missing))) if missing == id
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggle_flips_only_the_completion_flag(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Call the bank"))
        .await
        .expect("creation succeeds");

    let toggled = service.toggle(created.id()).await.expect("toggle succeeds");
    assert!(toggled.completed());
    assert_eq!(toggled.title(), created.title());

    let restored = service.toggle(created.id()).await.expect("toggle succeeds");
    assert!(!restored.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_makes_lookup_return_none(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Throwaway"))
        .await
        .expect("creation succeeds");

    service.delete(created.id()).await.expect("delete succeeds");

    let fetched = service.get(created.id()).await.expect("lookup succeeds");
    assert!(fetched.is_none());

    let result = service.delete(created.id()).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_can_clear_the_due_date(service: TestService) {
    let due = Utc
        .with_ymd_and_hms(2025, 9, 9, 18, 0, 0)
        .single()
        .expect("unambiguous timestamp");
    let created = service
        .create(CreateTaskRequest::new("Renew passport").with_due_date(due))
        .await
        .expect("creation succeeds");

    let updated = service
        .update(created.id(), UpdateTaskRequest::new().clear_due_date())
        .await
        .expect("update succeeds");

    assert!(updated.due_date().is_none());
}

//! Domain-focused tests for task records.

use crate::task::domain::{
    Task, TaskDomainError, TaskId, TaskPatch, TaskTitle, due_date_from_parts,
};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn task_title_accepts_non_empty_values() {
    let title = TaskTitle::new("Buy milk").expect("valid title");
    assert_eq!(title.as_str(), "Buy milk");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn task_title_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn task_id_parse_round_trips() {
    let id = TaskId::new();
    let parsed = TaskId::parse(&id.to_string()).expect("valid id string");
    assert_eq!(parsed, id);
}

#[rstest]
fn task_id_parse_rejects_malformed_values() {
    let result = TaskId::parse("not-a-uuid");
    assert_eq!(
        result,
        Err(TaskDomainError::InvalidTaskId("not-a-uuid".to_owned()))
    );
}

#[rstest]
fn due_date_requires_both_date_and_time() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
    let time = NaiveTime::from_hms_opt(9, 30, 0).expect("valid time");

    assert!(due_date_from_parts(Some(date), None).is_none());
    assert!(due_date_from_parts(None, Some(time)).is_none());
    assert!(due_date_from_parts(None, None).is_none());

    let due = due_date_from_parts(Some(date), Some(time)).expect("combined timestamp");
    let expected = Utc
        .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("unambiguous timestamp");
    assert_eq!(due, expected);
}

#[rstest]
fn new_task_starts_incomplete_with_equal_timestamps(clock: DefaultClock) {
    let title = TaskTitle::new("Water the plants").expect("valid title");
    let task = Task::new(title, "balcony and kitchen".to_owned(), None, false, &clock);

    assert!(!task.completed());
    assert_eq!(task.description(), "balcony and kitchen");
    assert!(task.due_date().is_none());
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn toggling_twice_restores_the_completion_flag(clock: DefaultClock) {
    let title = TaskTitle::new("Call the dentist").expect("valid title");
    let mut task = Task::new(title, String::new(), None, false, &clock);

    task.toggle_completed(&clock);
    assert!(task.completed());
    task.toggle_completed(&clock);
    assert!(!task.completed());
}

#[rstest]
fn toggle_leaves_other_fields_untouched(clock: DefaultClock) {
    let due = Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("unambiguous timestamp");
    let title = TaskTitle::new("Submit report").expect("valid title");
    let mut task = Task::new(title.clone(), "quarterly".to_owned(), Some(due), false, &clock);
    let created_at = task.created_at();

    task.toggle_completed(&clock);

    assert_eq!(task.title(), &title);
    assert_eq!(task.description(), "quarterly");
    assert_eq!(task.due_date(), Some(due));
    assert_eq!(task.created_at(), created_at);
}

#[rstest]
fn apply_merges_only_supplied_fields(clock: DefaultClock) {
    let title = TaskTitle::new("Original").expect("valid title");
    let mut task = Task::new(title, "keep me".to_owned(), None, false, &clock);

    let replacement = TaskTitle::new("Renamed").expect("valid title");
    task.apply(
        TaskPatch {
            title: Some(replacement.clone()),
            completed: Some(true),
            ..TaskPatch::default()
        },
        &clock,
    );

    assert_eq!(task.title(), &replacement);
    assert_eq!(task.description(), "keep me");
    assert!(task.completed());
}

#[rstest]
fn apply_can_clear_the_due_date(clock: DefaultClock) {
    let due = Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("unambiguous timestamp");
    let title = TaskTitle::new("Pay rent").expect("valid title");
    let mut task = Task::new(title, String::new(), Some(due), false, &clock);

    task.apply(
        TaskPatch {
            due_date: Some(None),
            ..TaskPatch::default()
        },
        &clock,
    );

    assert!(task.due_date().is_none());
}

#[rstest]
fn empty_patch_reports_empty() {
    assert!(TaskPatch::default().is_empty());
    let patch = TaskPatch {
        completed: Some(false),
        ..TaskPatch::default()
    };
    assert!(!patch.is_empty());
}

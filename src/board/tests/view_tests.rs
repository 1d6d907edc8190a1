//! Derivation-pipeline tests for the list view.

use crate::board::{StatusFilter, visible_tasks};
use crate::task::domain::{Task, TaskTitle};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn task(title: &str, completed: bool, clock: &impl Clock) -> Task {
    let valid_title = TaskTitle::new(title).expect("valid title");
    Task::new(valid_title, String::new(), None, completed, clock)
}

fn titles<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
    tasks.iter().map(|t| t.title().as_str()).collect()
}

#[rstest]
fn search_is_case_insensitive_substring_match(clock: DefaultClock) {
    let tasks = vec![
        task("Milk", false, &clock),
        task("Emails", false, &clock),
        task("windmill repair", false, &clock),
    ];

    let visible = visible_tasks(&tasks, "mil", StatusFilter::All);
    assert_eq!(titles(&visible), vec!["Milk", "windmill repair"]);

    let shouting = visible_tasks(&tasks, "MIL", StatusFilter::All);
    assert_eq!(titles(&shouting), vec!["Milk", "windmill repair"]);
}

#[rstest]
fn empty_search_keeps_everything(clock: DefaultClock) {
    let tasks = vec![task("a", false, &clock), task("b", true, &clock)];
    let visible = visible_tasks(&tasks, "", StatusFilter::All);
    assert_eq!(visible.len(), 2);
}

#[rstest]
fn status_filters_partition_the_all_view(clock: DefaultClock) {
    let tasks = vec![
        task("one", false, &clock),
        task("two", true, &clock),
        task("three", false, &clock),
        task("four", true, &clock),
    ];

    let all = visible_tasks(&tasks, "", StatusFilter::All);
    let pending = visible_tasks(&tasks, "", StatusFilter::Pending);
    let completed = visible_tasks(&tasks, "", StatusFilter::Completed);

    assert_eq!(pending.len() + completed.len(), all.len());
    for member in &pending {
        assert!(!member.completed());
        assert!(completed.iter().all(|other| other.id() != member.id()));
    }
    for member in &completed {
        assert!(member.completed());
    }
    for member in &all {
        let in_pending = pending.iter().any(|other| other.id() == member.id());
        let in_completed = completed.iter().any(|other| other.id() == member.id());
        assert!(in_pending != in_completed);
    }
}

#[rstest]
fn incomplete_tasks_sort_before_completed_ones(clock: DefaultClock) {
    let tasks = vec![
        task("A", false, &clock),
        task("B", true, &clock),
        task("C", false, &clock),
    ];

    let visible = visible_tasks(&tasks, "", StatusFilter::All);
    assert_eq!(titles(&visible), vec!["A", "C", "B"]);
}

#[rstest]
fn sort_is_stable_within_each_group(clock: DefaultClock) {
    // B and C are both complete; their relative source order must survive.
    let tasks = vec![
        task("A", false, &clock),
        task("B", true, &clock),
        task("C", true, &clock),
        task("D", false, &clock),
    ];

    let visible = visible_tasks(&tasks, "", StatusFilter::All);
    assert_eq!(titles(&visible), vec!["A", "D", "B", "C"]);
}

#[rstest]
fn derivation_does_not_mutate_the_source(clock: DefaultClock) {
    let tasks = vec![task("z", true, &clock), task("a", false, &clock)];
    let before: Vec<String> = tasks
        .iter()
        .map(|t| t.title().as_str().to_owned())
        .collect();

    let _ = visible_tasks(&tasks, "", StatusFilter::All);

    let after: Vec<String> = tasks
        .iter()
        .map(|t| t.title().as_str().to_owned())
        .collect();
    assert_eq!(before, after);
}

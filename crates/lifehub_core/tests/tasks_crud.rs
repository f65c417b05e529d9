use chrono::{Duration, NaiveDate, NaiveDateTime};
use lifehub_core::{Clock, FixedClock, InMemoryTaskService, TaskItem, TaskService};
use std::sync::Arc;
use uuid::Uuid;

fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn setup() -> (Arc<FixedClock>, InMemoryTaskService) {
    let clock = Arc::new(FixedClock::new(morning()));
    let service = InMemoryTaskService::new(clock.clone());
    (clock, service)
}

#[test]
fn added_task_is_returned_by_all_tasks() {
    let (clock, mut service) = setup();
    let task = TaskItem::new("Write demo README", clock.now());

    let stored = service.add_task(task.clone());
    assert_eq!(stored, task);

    let all = service.all_tasks();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, task.id);
    assert_eq!(all[0].source, "Local");
}

#[test]
fn all_tasks_orders_by_due_date_with_undated_first() {
    let (clock, mut service) = setup();
    let today = clock.today();
    let later = service.add_task(
        TaskItem::new("later", clock.now()).with_due_date(today + Duration::days(3)),
    );
    let undated = service.add_task(TaskItem::new("someday", clock.now()));
    let first_today =
        service.add_task(TaskItem::new("first today", clock.now()).with_due_date(today));
    let second_today =
        service.add_task(TaskItem::new("second today", clock.now()).with_due_date(today));

    let ids: Vec<Uuid> = service.all_tasks().iter().map(|task| task.id).collect();
    assert_eq!(
        ids,
        vec![undated.id, first_today.id, second_today.id, later.id]
    );
}

#[test]
fn toggle_complete_sets_and_clears_completed_at() {
    let (clock, mut service) = setup();
    let task = service.add_task(TaskItem::new("Fix authentication bug", clock.now()));

    clock.advance(Duration::minutes(45));
    let done = service.toggle_complete(task.id).unwrap();
    assert!(done.is_completed);
    assert_eq!(done.completed_at, Some(morning() + Duration::minutes(45)));

    let reopened = service.toggle_complete(task.id).unwrap();
    assert!(!reopened.is_completed);
    assert_eq!(reopened.completed_at, None);
    assert_eq!(service.all_tasks()[0], reopened);
}

#[test]
fn toggle_unknown_id_returns_none() {
    let (_clock, mut service) = setup();
    assert!(service.toggle_complete(Uuid::new_v4()).is_none());
}

#[test]
fn update_replaces_in_place() {
    let (clock, mut service) = setup();
    let first = service.add_task(TaskItem::new("draft", clock.now()));
    let second = service.add_task(TaskItem::new("other", clock.now()));

    let mut edited = first.clone();
    edited.title = "final".to_string();
    edited.tags = vec!["docs".to_string()];
    let returned = service.update_task(edited.clone());
    assert_eq!(returned, edited);

    let all = service.all_tasks();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], edited);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn update_and_delete_of_unknown_id_are_noops() {
    let (clock, mut service) = setup();
    service.add_task(TaskItem::new("keep me", clock.now()));
    let before = service.all_tasks();

    let stranger = TaskItem::new("not stored", clock.now());
    let returned = service.update_task(stranger.clone());
    assert_eq!(returned, stranger);
    service.delete_task(Uuid::new_v4());

    assert_eq!(service.all_tasks(), before);
}

#[test]
fn delete_removes_only_the_target() {
    let (clock, mut service) = setup();
    let gone = service.add_task(TaskItem::new("remove", clock.now()));
    let kept = service.add_task(TaskItem::new("keep", clock.now()));

    service.delete_task(gone.id);

    let all = service.all_tasks();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, kept.id);
    assert_eq!(service.len(), 1);
}

#[test]
fn seeded_service_contains_sample_tasks() {
    let clock = Arc::new(FixedClock::new(morning()));
    let service = InMemoryTaskService::seeded(clock);
    let titles: Vec<String> = service
        .all_tasks()
        .into_iter()
        .map(|task| task.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Review pull request #234",
            "Update project documentation",
            "Fix authentication bug"
        ]
    );
}

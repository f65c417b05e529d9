use chrono::{NaiveDate, NaiveDateTime};
use lifehub_core::{
    parse_config, DashboardServices, DashboardViewModel, FixedClock, FocusSessionKind,
    InsightKind, TaskItem, WidgetKind,
};
use std::sync::Arc;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn view_model(clock: Arc<FixedClock>) -> DashboardViewModel {
    let config = parse_config("user_name = \"Alex\"\nlocation = \"Lisbon\"\n").unwrap();
    DashboardViewModel::new(DashboardServices::local(clock), &config)
}

#[test]
fn fresh_dashboard_shows_seeded_day() {
    let clock = Arc::new(FixedClock::new(at(9, 30)));
    let snapshot = view_model(clock).load();

    assert_eq!(snapshot.greeting, "Good morning, Alex");
    assert_eq!(snapshot.daily_insight.kind, InsightKind::DailySummary);
    assert_eq!(
        snapshot.daily_insight.content,
        "Today you have 3 events and 3 tasks. Start your first focus session!"
    );
    assert_eq!(snapshot.weather.location, "Lisbon");
    assert_eq!(snapshot.email_summary.unread_count, 12);
    assert_eq!(snapshot.today_focus_minutes, 0);
    assert_eq!(snapshot.today_events.len(), 3);
    assert_eq!(snapshot.today_tasks.len(), 3);
    assert_eq!(snapshot.layout_suggestion.suggested_theme, "Balanced");
    assert_eq!(snapshot.widgets[0].kind, WidgetKind::Calendar);
}

#[test]
fn today_tasks_exclude_completed_and_future_but_keep_overdue() {
    let clock = Arc::new(FixedClock::new(at(16, 0)));
    let mut view_model = view_model(clock.clone());
    let services = view_model.services_mut();

    let first = services.tasks.all_tasks()[0].clone();
    services.tasks.toggle_complete(first.id);
    services.tasks.add_task(
        TaskItem::new("overdue", at(8, 0))
            .with_due_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
    );
    services.tasks.add_task(
        TaskItem::new("next week", at(8, 0))
            .with_due_date(NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()),
    );
    services.tasks.add_task(TaskItem::new("someday", at(8, 0)));

    let snapshot = view_model.load();
    let titles: Vec<&str> = snapshot
        .today_tasks
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "overdue",
            "Update project documentation",
            "Fix authentication bug"
        ]
    );
    assert_eq!(snapshot.greeting, "Good afternoon, Alex");
    assert_eq!(
        snapshot.daily_insight.content,
        "Today you have 3 events and 2 tasks. Start your first focus session!"
    );
}

#[test]
fn focused_day_promotes_focus_timer() {
    let clock = Arc::new(FixedClock::new(at(18, 0)));
    let mut view_model = view_model(clock);
    let services = view_model.services_mut();
    for _ in 0..3 {
        let session = services.focus.start_session(FocusSessionKind::Focus, 25);
        services.focus.end_session(session.id, true);
    }
    view_model.record_widget_open();

    let snapshot = view_model.load();
    assert_eq!(snapshot.greeting, "Good evening, Alex");
    assert_eq!(snapshot.today_focus_minutes, 75);
    assert_eq!(
        snapshot.daily_insight.content,
        "Today you have 3 events and 3 tasks. You've focused for 75 minutes. Great work!"
    );
    assert_eq!(snapshot.layout_suggestion.suggested_theme, "Focus");
    assert_eq!(snapshot.widgets[0].kind, WidgetKind::FocusTimer);
    assert_eq!(snapshot.widgets[0].order, 0);
    assert_eq!(view_model.widget_open_frequency(), 1);
}

#[test]
fn hidden_widgets_stay_hidden_across_loads() {
    let clock = Arc::new(FixedClock::new(at(9, 0)));
    let mut view_model = view_model(clock);
    assert!(view_model.layout_mut().set_visible(WidgetKind::Notes, false));
    assert!(!view_model.layout_mut().set_visible(WidgetKind::Email, false));

    let snapshot = view_model.load();
    let notes = snapshot
        .widgets
        .iter()
        .find(|widget| widget.kind == WidgetKind::Notes)
        .unwrap();
    assert!(!notes.is_visible);
}

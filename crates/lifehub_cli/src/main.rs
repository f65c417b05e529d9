//! LifeHub demo console.
//!
//! # Responsibility
//! - Wire local dashboard services from config and print their output.
//! - Optionally restore/save user data through a SQLite state file.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use lifehub_core::db::open_db;
use lifehub_core::{
    init_from_config, load_config, Clock, DashboardConfig, DashboardServices,
    DashboardSnapshot, DashboardViewModel, FixedClock, FocusSessionKind, SqlitePersistence,
    SystemClock, TaskItem, TemperatureUnit,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

const DEMO_EMAIL_SNIPPETS: &[&str] = &[
    "Team meeting tomorrow",
    "Invoice #12345",
    "Welcome to LifeHub",
];

#[derive(Debug, Parser)]
#[command(name = "lifehub", version, about = "Your smart daily dashboard, in a terminal")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Weather location; overrides the config file.
    #[arg(long, global = true)]
    location: Option<String>,
    /// Temperature unit (celsius|fahrenheit); overrides the config file.
    #[arg(long, global = true)]
    units: Option<TemperatureUnit>,
    /// Pin the clock, e.g. 2024-05-06T09:30:00.
    #[arg(long, global = true)]
    today: Option<NaiveDateTime>,
    /// SQLite file to restore state from and save it to.
    #[arg(long, global = true)]
    state_db: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Print sample tasks, weather and an email digest.
    Demo,
    /// Print the full dashboard view.
    Dashboard,
    /// Turn free text into candidate tasks.
    Extract { text: String },
    /// Add a task.
    AddTask {
        title: String,
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Record one completed focus session.
    Focus {
        #[arg(default_value_t = 25)]
        minutes: u32,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(&cli)?;
    init_from_config(&config)?;

    let clock: Arc<dyn Clock> = match cli.today {
        Some(now) => Arc::new(FixedClock::new(now)),
        None => Arc::new(SystemClock),
    };
    let command = cli.command.unwrap_or(Command::Demo);
    // The demo builds its own sample tasks; other commands start from the seeds.
    let mut services = match command {
        Command::Demo => DashboardServices::empty(clock),
        _ => DashboardServices::local(clock),
    };

    let state_conn = config.state_db.as_ref().map(open_db).transpose()?;
    let mut restored = false;
    if let Some(conn) = &state_conn {
        let store = SqlitePersistence::try_new(conn)?;
        restored = services.restore_state(&store)?;
        if restored {
            println!("Restored saved state.\n");
        }
    }

    info!("event=cli_command module=cli status=start command={command:?} restored={restored}");
    let services = match command {
        Command::Demo => run_demo(services, &config, restored),
        Command::Dashboard => run_dashboard(services, &config),
        Command::Extract { text } => run_extract(services, &text),
        Command::AddTask { title, due } => {
            let mut task = TaskItem::new(title, services.clock.now());
            task.due_date = due;
            let task = services.tasks.add_task(task);
            println!("Added task {} \"{}\"", task.id, task.title);
            services
        }
        Command::Focus { minutes } => {
            let session = services
                .focus
                .start_session(FocusSessionKind::Focus, minutes);
            services.focus.end_session(session.id, true);
            println!(
                "Logged {minutes} focus minutes; {} minutes today.",
                services.focus.today_focus_minutes()
            );
            services
        }
    };

    if let Some(conn) = &state_conn {
        let mut store = SqlitePersistence::try_new(conn)?;
        services.save_state(&mut store)?;
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<DashboardConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(location) = &cli.location {
        config.location = location.clone();
    }
    if let Some(units) = cli.units {
        config.temperature_unit = units;
    }
    if let Some(state_db) = &cli.state_db {
        config.state_db = Some(state_db.clone());
    }
    config.validate()?;
    Ok(config)
}

/// Adds the two demo tasks unless they came back with restored state.
fn add_demo_tasks(services: &mut DashboardServices, restored: bool) {
    if restored {
        return;
    }
    let now = services.clock.now();
    services.tasks.add_task(
        TaskItem::new("Write demo README", now).with_description("Prepare run instructions"),
    );
    let tomorrow = services.clock.today() + Duration::days(1);
    services
        .tasks
        .add_task(TaskItem::new("Review schedule", now).with_due_date(tomorrow));
}

fn run_demo(
    mut services: DashboardServices,
    config: &DashboardConfig,
    restored: bool,
) -> DashboardServices {
    println!("LifeHub demo\n");
    add_demo_tasks(&mut services, restored);

    println!("Tasks:");
    for task in services.tasks.all_tasks() {
        print_task(&task);
    }
    println!();

    let unit = config.temperature_unit;
    let weather = services.weather.current(&config.location);
    println!(
        "Weather for {}: {}, {}",
        weather.location,
        unit.format(weather.temperature_c),
        weather.condition
    );
    println!("{}-day forecast:", weather.forecast.len());
    for day in &weather.forecast {
        println!(
            " - {}: {} - {}, {}",
            day.date,
            unit.format(day.min_c),
            unit.format(day.max_c),
            day.condition
        );
    }
    println!();

    let snippets: Vec<String> = DEMO_EMAIL_SNIPPETS.iter().map(|s| s.to_string()).collect();
    println!("Email Summary:");
    println!("{}", services.email.summarize_emails(&snippets));
    println!();
    println!("Demo complete.");
    services
}

fn run_dashboard(services: DashboardServices, config: &DashboardConfig) -> DashboardServices {
    let view_model = DashboardViewModel::new(services, config);
    print_snapshot(&view_model.load(), config.temperature_unit);
    view_model.into_services()
}

fn run_extract(services: DashboardServices, text: &str) -> DashboardServices {
    let tasks = services.ai.extract_tasks_from_text(text);
    if tasks.is_empty() {
        println!("No tasks found.");
    }
    for task in &tasks {
        print_task(task);
    }
    services
}

fn print_task(task: &TaskItem) {
    let due = task
        .due_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    println!(
        " - [{}] {} (Due: {due})",
        if task.is_completed { 'x' } else { ' ' },
        task.title
    );
}

fn print_snapshot(snapshot: &DashboardSnapshot, unit: TemperatureUnit) {
    println!("{}\n", snapshot.greeting);
    println!("{}", snapshot.daily_insight.content);
    println!();

    println!(
        "Weather: {} {} in {}",
        unit.format(snapshot.weather.temperature_c),
        snapshot.weather.condition,
        snapshot.weather.location
    );
    println!(
        "Email: {} unread. {}",
        snapshot.email_summary.unread_count, snapshot.email_summary.summary
    );
    println!("Focus: {} minutes today", snapshot.today_focus_minutes);
    println!();

    println!("Today's events:");
    for event in &snapshot.today_events {
        let location = if event.location.is_empty() {
            String::new()
        } else {
            format!(" @ {}", event.location)
        };
        println!(
            " - {}-{} {}{location}",
            event.start.format("%H:%M"),
            event.end.format("%H:%M"),
            event.title
        );
    }
    println!();

    println!("Today's tasks:");
    for task in &snapshot.today_tasks {
        println!(" - [{}] {}", task.priority.as_str(), task.title);
    }
    println!();

    let widgets: Vec<&str> = snapshot
        .widgets
        .iter()
        .filter(|widget| widget.is_visible)
        .map(|widget| widget.kind.as_str())
        .collect();
    println!(
        "Layout ({}): {}",
        snapshot.layout_suggestion.suggested_theme,
        widgets.join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::add_demo_tasks;
    use chrono::NaiveDate;
    use lifehub_core::{DashboardServices, FixedClock, InMemoryPersistence};
    use std::sync::Arc;

    #[test]
    fn repeated_demo_runs_keep_one_copy_of_demo_tasks() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 6)
            .expect("valid date")
            .and_hms_opt(9, 30, 0)
            .expect("valid time");
        let clock = Arc::new(FixedClock::new(now));
        let mut store = InMemoryPersistence::new();

        for _ in 0..3 {
            let mut services = DashboardServices::empty(clock.clone());
            let restored = services.restore_state(&store).expect("restore");
            add_demo_tasks(&mut services, restored);
            services.save_state(&mut store).expect("save");
        }

        let services = {
            let mut services = DashboardServices::empty(clock);
            services.restore_state(&store).expect("restore");
            services
        };
        let titles: Vec<String> = services
            .tasks
            .all_tasks()
            .into_iter()
            .map(|task| task.title)
            .collect();
        assert_eq!(titles.len(), 2);
        assert!(titles.contains(&"Write demo README".to_string()));
        assert!(titles.contains(&"Review schedule".to_string()));
    }

    #[test]
    fn fresh_demo_lists_only_demo_tasks() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 6)
            .expect("valid date")
            .and_hms_opt(9, 30, 0)
            .expect("valid time");
        let mut services = DashboardServices::empty(Arc::new(FixedClock::new(now)));
        add_demo_tasks(&mut services, false);
        assert_eq!(services.tasks.all_tasks().len(), 2);
    }
}

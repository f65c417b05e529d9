//! Rolling file logs for LifeHub processes.
//!
//! # Invariants
//! - At most one logger per process; repeating the same settings is a no-op.
//! - Asking for a different level or directory afterwards is an error.
//! - Nothing here panics.

use crate::config::DashboardConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "lifehub";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 3;
const PANIC_PAYLOAD_LIMIT: usize = 160;
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

static LOGGER: OnceCell<RunningLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct RunningLogger {
    level: &'static str,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts logging when `config.log_dir` is set.
///
/// Returns `Ok(false)` without touching the logger when no directory is
/// configured.
pub fn init_from_config(config: &DashboardConfig) -> Result<bool, String> {
    let Some(dir) = &config.log_dir else {
        return Ok(false);
    };
    let level = config.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, dir).map(|()| true)
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unsupported `level`, relative `log_dir`, or a directory that cannot be
///   created.
/// - Logging already runs with other settings.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = normalize_level(level)?;
    if !log_dir.is_absolute() {
        return Err(format!(
            "log_dir must be an absolute path, got `{}`",
            log_dir.display()
        ));
    }

    let running = LOGGER.get_or_try_init(|| start(level, log_dir))?;
    if running.dir != log_dir {
        return Err(format!(
            "logging already writes to `{}`; refusing to switch to `{}`",
            running.dir.display(),
            log_dir.display()
        ));
    }
    if running.level != level {
        return Err(format!(
            "logging already runs at `{}`; refusing to switch to `{level}`",
            running.level
        ));
    }
    Ok(())
}

/// `(level, dir)` of the running logger.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGER.get().map(|running| (running.level, running.dir.clone()))
}

pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Lower-cases and validates a level name; `warning` is accepted for `warn`.
pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    let wanted = level.trim().to_ascii_lowercase();
    let wanted = if wanted == "warning" { "warn" } else { wanted.as_str() };
    LEVELS
        .iter()
        .copied()
        .find(|known| *known == wanted)
        .ok_or_else(|| {
            format!(
                "unsupported log level `{}`; expected one of {}",
                level.trim(),
                LEVELS.join("|")
            )
        })
}

fn start(level: &'static str, dir: &Path) -> Result<RunningLogger, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;

    let files = FileSpec::default()
        .directory(dir)
        .basename(LOG_FILE_BASENAME);
    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(files)
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("logger failed to start: {err}"))?;

    if PANIC_HOOK.set(()).is_ok() {
        route_panics_to_log();
    }
    info!(
        "event=logging_init module=core status=ok level={level} log_dir={} version={}",
        dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(RunningLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

fn route_panics_to_log() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        error!(
            "event=panic_captured module=core status=error location={location} payload={}",
            one_line(&panic_text(panic_info.payload()), PANIC_PAYLOAD_LIMIT)
        );
        previous(panic_info);
    }));
}

fn panic_text(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|text| (*text).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

/// Flattens line breaks and caps the length at `max_chars` (plus `...`).
fn one_line(value: &str, max_chars: usize) -> String {
    let flat = value.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::{init_from_config, init_logging, logging_status, normalize_level, one_line};
    use crate::config::DashboardConfig;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_log_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "lifehub-logging-{suffix}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").expect("INFO should normalize"), "info");
        assert_eq!(
            normalize_level(" warning ").expect("warning should normalize"),
            "warn"
        );
        let err = normalize_level("verbose").expect_err("unknown level");
        assert!(err.contains("trace|debug|info|warn|error"));
    }

    #[test]
    fn one_line_flattens_and_truncates() {
        assert_eq!(one_line("a\nb", 10), "a b");
        let cut = one_line("line1\nline2\rline3", 8);
        assert_eq!(cut, "line1 li...");
    }

    #[test]
    fn config_without_log_dir_leaves_logging_off() {
        let started = init_from_config(&DashboardConfig::default()).expect("no-op init");
        assert!(!started);
    }

    #[test]
    fn init_logging_rejects_relative_dir() {
        let err = init_logging("info", Path::new("logs/dev")).expect_err("relative dir");
        assert!(err.contains("absolute"));
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let first = unique_log_dir("idempotent");
        let second = unique_log_dir("different");

        init_logging("info", &first).expect("first init should succeed");
        init_logging("INFO", &first).expect("same settings should be idempotent");

        let level_err = init_logging("debug", &first).expect_err("level conflict");
        assert!(level_err.contains("refusing to switch"));
        let dir_err = init_logging("info", &second).expect_err("dir conflict");
        assert!(dir_err.contains("refusing to switch"));

        let (level, dir) = logging_status().expect("logging should be active");
        assert_eq!(level, "info");
        assert_eq!(dir, first);
    }
}

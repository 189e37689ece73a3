//! Logging setup.
//!
//! Two layers share one [`EnvFilter`]:
//!
//! - a human-readable layer on stderr, limited to warnings unless `-v` or
//!   `RUST_LOG` asks for more (stdout carries command output)
//! - a JSON-lines file layer written through a non-blocking appender
//!
//! The log file is `BLOGSCORE_LOG_PATH` if set, otherwise `blogscore.jsonl`
//! inside `BLOGSCORE_LOG_DIR`, the configured `log_dir`, or the platform
//! cache directory, in that order. If the directory cannot be created the
//! file layer is skipped.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "BLOGSCORE_LOG_PATH";
const LOG_DIR_ENV: &str = "BLOGSCORE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "blogscore";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where log output goes.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Exact log file path.
    pub log_path: Option<PathBuf>,
    /// Directory for `blogscore.jsonl` when no exact path is set.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment; `config_log_dir` is used when `BLOGSCORE_LOG_DIR`
    /// is unset.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(default_log_dir);
        Self { log_path, log_dir }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", LOG_FILE_PREFIX).map(|d| d.cache_dir().join("logs"))
}

/// Build the global filter. `RUST_LOG` wins over the command-line flags.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Most verbose level printed to stderr.
pub fn stderr_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose > 0 || std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the life of the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    stderr_level: LevelFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_level);

    let (file_layer, guard) = match file_appender(config) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_current_span(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("global tracing subscriber already installed")?;

    Ok(guard)
}

fn file_appender(config: &ObservabilityConfig) -> Option<RollingFileAppender> {
    let (dir, builder) = if let Some(path) = &config.log_path {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let name = path.file_name()?.to_string_lossy().into_owned();
        (dir.to_path_buf(), RollingFileAppender::builder().filename_prefix(name))
    } else {
        let dir = config.log_dir.clone()?;
        let builder = RollingFileAppender::builder()
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX);
        (dir, builder)
    };

    std::fs::create_dir_all(&dir).ok()?;
    builder.rotation(Rotation::NEVER).build(&dir).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(stderr_level(true, 3), LevelFilter::ERROR);
        assert_eq!(stderr_level(false, 1), LevelFilter::TRACE);
    }

    #[test]
    fn explicit_log_path_creates_parent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("run.jsonl");
        let config = ObservabilityConfig {
            log_path: Some(path.clone()),
            log_dir: None,
        };
        assert!(file_appender(&config).is_some());
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn no_destination_means_no_file_layer() {
        assert!(file_appender(&ObservabilityConfig::default()).is_none());
    }
}

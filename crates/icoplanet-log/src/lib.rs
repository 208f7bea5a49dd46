//! Structured logging for icoplanet.
//!
//! Sets up span-based, filterable logging via the `tracing` ecosystem:
//! console output with uptime timestamps and module paths, plus a JSON log
//! file in debug builds. The level comes from `RUST_LOG` when set, otherwise
//! from the configuration.

use icoplanet_config::Config;
use std::fs::{self, File};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "icoplanet.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - Optional directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether file logging is enabled
/// * `config` - Optional configuration supplying `debug.log_level`
///
/// # Examples
///
/// ```no_run
/// use icoplanet_config::Config;
/// use icoplanet_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_string(config);

    // RUST_LOG wins over the configured level.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && let Ok(log_file) = create_log_file(log_dir)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        tracing::debug!(dir = %log_dir.display(), "file logging enabled");
        return;
    }

    subscriber.init();
}

/// Create `log_dir` if needed and truncate [`LOG_FILE_NAME`] inside it.
pub fn create_log_file(log_dir: &Path) -> std::io::Result<File> {
    fs::create_dir_all(log_dir)?;
    File::create(log_dir.join(LOG_FILE_NAME))
}

/// The filter directive string derived from `config`.
pub fn filter_string(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter_str = format!("{}", default_env_filter());
        assert!(filter_str.contains("wgpu=warn"));
        assert!(filter_str.contains("naga=warn"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_filter_from_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug,icoplanet_mesh=trace".to_string();
        assert_eq!(filter_string(Some(&config)), "debug,icoplanet_mesh=trace");
    }

    #[test]
    fn test_empty_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level.clear();
        assert_eq!(filter_string(Some(&config)), DEFAULT_FILTER);
        assert_eq!(filter_string(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,icoplanet_planet=trace",
            "warn,icoplanet_mesh=debug,icoplanet_terrain=trace",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_log_file_created_in_nested_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs").join("icoplanet");
        create_log_file(&log_dir).unwrap();

        let log_file_path = log_dir.join(LOG_FILE_NAME);
        assert!(log_file_path.is_file());
        assert_eq!(log_file_path.file_name().unwrap(), "icoplanet.log");
    }

    #[test]
    fn test_log_file_is_truncated() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(LOG_FILE_NAME), "stale run").unwrap();

        create_log_file(temp_dir.path()).unwrap();
        let contents = fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME)).unwrap();
        assert!(contents.is_empty());
    }
}

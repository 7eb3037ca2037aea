//! Structured logging for terramap.
//!
//! Installs a `tracing` subscriber with a human-readable console layer and an
//! optional JSON file layer. The filter comes from `RUST_LOG` when set, then
//! from the config's `debug.log_level`, then [`DEFAULT_FILTER`].

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use terramap_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config specify one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file created inside the log directory.
pub const LOG_FILE_NAME: &str = "terramap.log";

/// Initialize the global tracing subscriber.
///
/// When `config.debug.file_logging` is set and `log_dir` is given, records are
/// also written as JSON lines to `log_dir/terramap.log`. A log file that
/// cannot be created is reported on the console and skipped.
///
/// # Examples
///
/// ```no_run
/// use terramap_config::Config;
/// use terramap_log::init_logging;
///
/// init_logging(None, None);
///
/// let mut config = Config::default();
/// config.debug.file_logging = true;
/// init_logging(Some(std::path::Path::new("./logs")), Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_names(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let file_logging = config.is_some_and(|c| c.debug.file_logging);
    let log_file = match log_dir {
        Some(dir) if file_logging => Some(open_log_file(dir)),
        _ => None,
    };

    match log_file {
        Some(Ok(file)) => {
            let file_layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::uptime())
                .json();
            subscriber.with(file_layer).init();
        }
        Some(Err(e)) => {
            subscriber.init();
            tracing::warn!(error = %e, "file logging disabled");
        }
        None => subscriber.init(),
    }
}

/// Filter directives taken from the config, or [`DEFAULT_FILTER`].
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Create `dir` if needed and open a fresh log file inside it.
pub fn open_log_file(dir: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(dir)?;
    File::create(dir.join(LOG_FILE_NAME))
}

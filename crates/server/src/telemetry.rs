//! Sentry and tracing initialization.
//!
//! Stdout gets text or JSON per [`LogFormat`]. When a log directory is
//! configured, JSON lines are also appended to `<dir>/app.log`. Request
//! bodies never reach either sink; handlers only log ids, codes and paths.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{
    EnvFilter,
    fmt::format::{Format, Json, JsonFields},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, ServerConfig};

/// Name of the log file created inside `APP_LOG_DIR`.
pub const LOG_FILE_NAME: &str = "app.log";

const DEFAULT_FILTER: &str = "recipe_box_server=info,tower_http=info";

/// Formatting layer that writes JSON lines to the log file.
pub type FileLayer<S> = tracing_subscriber::fmt::Layer<S, JsonFields, Format<Json>, Mutex<File>>;

/// Initialize Sentry error tracking and return guard that must be kept alive.
#[must_use]
pub fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
#[must_use]
pub fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Install the global tracing subscriber.
///
/// Defaults to info level for this crate and `tower_http` if `RUST_LOG` is
/// not set.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
pub fn init_tracing(config: &ServerConfig) -> io::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = config.log_dir.as_deref().map(file_layer).transpose()?;

    let (text_layer, json_layer) = match config.log_format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(file_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    Ok(())
}

/// JSON lines appended to `<dir>/app.log`, creating `dir` if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created.
pub fn file_layer<S>(dir: &Path) -> io::Result<FileLayer<S>> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))?;

    Ok(tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(Mutex::new(file)))
}

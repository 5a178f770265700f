use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogSettings, default_log_path};

/// Send `tracing` events to the log file. The terminal belongs to the UI,
/// so nothing is written to stdout. Logging is skipped when disabled or when
/// the file cannot be opened.
pub fn init(settings: &LogSettings) {
    if !settings.enabled {
        return;
    }
    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        return;
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("twofade: cannot create log directory {}: {e}", parent.display());
            return;
        }
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("twofade: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
    {
        eprintln!("twofade: logging disabled: {e}");
    }
}

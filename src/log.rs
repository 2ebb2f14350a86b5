// src/log.rs
//
// Tracing setup shared by both binaries. Library code only emits events
// (`tracing::info!` etc.) with a short subsystem prefix: "Fetch:", "Cache:", "UI:".

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "cric_dash=info";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to `.store/debug.log`; falls back to stderr if it cannot be opened.
    #[default]
    File,
    Stderr,
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

fn open_log_file() -> std::io::Result<File> {
    fs::create_dir_all(STORE_DIR)?;
    OpenOptions::new().create(true).append(true).open(log_path())
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
/// Safe to call more than once; only the first call has an effect.
pub fn init(target: LogTarget) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let registry = tracing_subscriber::registry().with(filter);

        let file = match target {
            LogTarget::File => open_log_file()
                .inspect_err(|e| eprintln!("debug log unavailable ({e}); logging to stderr"))
                .ok(),
            LogTarget::Stderr => None,
        };

        // try_init: a test harness or embedding app may already own the global slot.
        let _ = match file {
            Some(file) => registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init(),
            None => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
        };
    });
}

// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arc_items=debug,info"))
}

/// Install the global subscriber once. Lines go to `.store/debug.log`;
/// if that file can't be opened we log to stderr instead.
pub fn init() {
    INIT.get_or_init(|| {
        let path = Path::new(STORE_DIR).join(LOG_FILE);
        let _ = fs::create_dir_all(STORE_DIR);

        let file = OpenOptions::new().create(true).append(true).open(&path);
        let res = match file {
            Ok(file) => tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_timer(Uptime::default())
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            Err(_) => tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_timer(Uptime::default())
                .with_writer(std::io::stderr)
                .try_init(),
        };
        // Someone else (a test harness) already owns the global subscriber.
        let _ = res;
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

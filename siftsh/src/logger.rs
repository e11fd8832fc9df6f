// siftsh/src/logger.rs
//! Logger initialization for the siftsh CLI.
//!
//! Thin wrapper over `env_logger` so the `-q`/`-d` flags can override the
//! `RUST_LOG` environment default.

use log::LevelFilter;

/// Initializes the global logger.
///
/// When `level` is `Some`, it overrides whatever `RUST_LOG` requested.
/// Initialization is idempotent; repeated calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}

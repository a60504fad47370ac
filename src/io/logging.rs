//! Logger setup for the command-line tool

use std::env;

use log::{LevelFilter, debug};

/// Log filter applied when `RUST_LOG` is unset
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global `env_logger`, writing to stderr
///
/// `RUST_LOG` takes precedence over `verbose`. Returns `false` if a logger
/// was already installed.
pub fn init_logger(verbose: bool) -> bool {
    let level = default_level(verbose);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    let installed = builder.try_init().is_ok();
    if installed {
        debug!("Logger initialized at {level:?} level");
    }
    installed
}

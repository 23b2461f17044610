//! Logger setup
//!
//! Native builds log through `env_logger`; `RUST_LOG` overrides the level.
//! The browser build has no logger installed, so `log` macros are no-ops there.

#[cfg(not(target_arch = "wasm32"))]
use env_logger::{Builder, Env};
#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Initializes the global logger.
///
/// `verbose` turns on debug output, which includes per-tick gameplay events.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    // Only fails if a logger is already set
    let _ = builder.try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init(_verbose: bool) {}

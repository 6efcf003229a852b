// src/log.rs
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter for a `-v` count when `RUST_LOG` is unset.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr logger. Timestamps are time since start, like `[00:00:01.234]`.
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("subject_lookup={}", level_for(verbosity))));

    let _ = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

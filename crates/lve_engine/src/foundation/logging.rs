//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG` and defaults to `info` when it is unset.
/// Safe to call more than once; only the first call installs the logger.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Initialize logging for tests
///
/// Output is captured by the test harness instead of going to stderr.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}

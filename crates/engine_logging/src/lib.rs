#![deny(missing_docs)]
//! Shared logging utilities for the analyzer workspace.
//!
//! The `engine_*` macros forward to the `log` facade through a re-export, so
//! the core and engine crates log without depending on `log` directly. The
//! binary installs the real logger; tests use [`initialize_for_tests`].

#[doc(hidden)]
pub use log as __log;

/// Environment variable overriding the level used by [`initialize_for_tests`].
pub const TEST_LOG_ENV: &str = "ANALYZER_TEST_LOG";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Level for test runs: `ANALYZER_TEST_LOG` when it parses, otherwise debug
/// in debug builds and info in release builds.
pub fn test_level() -> log::LevelFilter {
    std::env::var(TEST_LOG_ENV)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
}

/// Initializes a stderr logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = TermLogger::init(
        test_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

//! Crate-wide constants

/// Lines of context kept on each side of a matched cast
pub const CONTEXT_RADIUS: usize = 2;

/// Environment variable controlling the log filter
pub const LOG_ENV: &str = "CASTGREP_LOG";

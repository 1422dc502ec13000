//! CLI command implementations for the `lexq` tool.

pub mod commands;

/// Logger filter used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

//! Diagnostic logging setup
//!
//! Game output goes to stdout (or the TUI); diagnostics go to stderr through
//! `tracing`. `RUST_LOG` overrides the verbosity flag.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Log level for a `-v` count: warn, info, debug, then trace
#[must_use]
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // Ignore error if a global subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(9), Level::TRACE);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(2);
        tracing::debug!("still logging");
    }
}

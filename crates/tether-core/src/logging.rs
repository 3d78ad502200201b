#![forbid(unsafe_code)]

//! Logging setup.
//!
//! Library crates only emit `tracing` events. Binaries call [`init`] once to
//! install a fmt subscriber that writes to stderr, keeping stdout free for
//! the rendered view.

/// Environment variable consulted for the filter when none is given.
pub const LOG_ENV: &str = "TETHER_LOG";

/// Default filter when neither an explicit filter nor [`LOG_ENV`] is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Resolve the effective filter directive.
///
/// Precedence: explicit argument, then [`LOG_ENV`], then [`DEFAULT_FILTER`].
#[must_use]
pub fn resolve_filter<F>(explicit: Option<&str>, get_env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .map(str::to_owned)
        .or_else(|| get_env(LOG_ENV))
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed or the filter did
/// not parse; in both cases logging falls back to whatever is active.
#[cfg(feature = "logging")]
pub fn init(explicit: Option<&str>) -> bool {
    use tracing_subscriber::EnvFilter;

    let directive = resolve_filter(explicit, |key| std::env::var(key).ok());
    let filter = match EnvFilter::try_new(&directive) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("ignoring log filter {directive:?}: {err}");
            return false;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

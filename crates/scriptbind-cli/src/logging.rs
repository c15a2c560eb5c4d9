//! Console logging setup

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_FILTER: &str = "info";

/// Pick the filter directive: explicit flag, then environment, then default
pub fn filter_directive(explicit: Option<&str>, env: Option<&str>) -> String {
    fn given(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|d| !d.is_empty())
    }

    given(explicit)
        .or_else(|| given(env))
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Install the global fmt subscriber, writing to stderr.
///
/// Only the first call installs anything.
pub fn init(level: Option<&str>) -> Result<()> {
    static INIT: OnceCell<()> = OnceCell::new();

    INIT.get_or_try_init(|| {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let directive = filter_directive(level, env.as_deref());
        let filter = EnvFilter::try_new(&directive)
            .with_context(|| format!("Invalid log filter: {directive}"))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))
    })?;

    Ok(())
}

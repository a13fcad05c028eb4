use anyhow::{anyhow, Context};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Installs the global `tracing` subscriber.
///
/// `level` is the default for every target; `RUST_LOG` directives take precedence over it.
pub fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env()
        .context("invalid `RUST_LOG` filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

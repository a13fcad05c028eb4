use crate::definitions::targets::*;
use anyhow::Context;
use tracing::info;

/// The address to bind the profiler's server to
pub const PROFILER_ADDR: &str = "127.0.0.1:8585";

/// Turns on `puffin` scopes and starts serving them. The server stops when dropped
pub fn start_server() -> anyhow::Result<puffin_http::Server> {
    puffin::set_scopes_on(true);
    let server = puffin_http::Server::new(PROFILER_ADDR).context("puffin_http server failed to start")?;
    info!(target: MAIN, addr = PROFILER_ADDR, "serving profiler data");
    Ok(server)
}

//! Console logging for the `sitenav` binary.
//!
//! `RUST_LOG` takes precedence; otherwise `info`, or `debug` with `--debug`.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

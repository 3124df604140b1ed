//! reckon entry point.
//!
//! Launch the interactive calculator:
//! ```bash
//! cargo run -p reckon-repl
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reckon_repl::ReplConfig;

fn main() -> Result<()> {
    let config = ReplConfig::load().context("Failed to load configuration")?;

    // RUST_LOG wins; otherwise fall back to the config's directive, if any.
    let filter = match (&config.log, std::env::var_os("RUST_LOG")) {
        (Some(directive), None) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log filter {directive:?}"))?,
        _ => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    reckon_repl::run(&config)
}

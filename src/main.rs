use std::io::{self, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod datamodel;
mod driver;
mod query;


fn main() -> anyhow::Result<()> {
    setup_tracing();

    let mut out = io::stdout().lock();
    driver::run(datamodel::authors(), &mut out)
        .context("failed to write the demonstration to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}

fn setup_tracing() {
    // stdout carries the demonstration itself, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

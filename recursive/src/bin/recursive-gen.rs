//! Writes recursive macro families to stdout.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::info;
use recursive::cli::Cli;
use recursive::write_families;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let requests = cli.requests().context("rejected generation request")?;
    info!(
        "emitting {} families of {} macros",
        requests.len(),
        cli.arity
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_families(&mut out, &requests).context("failed to write macro families")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

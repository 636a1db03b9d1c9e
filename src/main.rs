use clap::Parser;
use std::io::Write;

mod cli;
mod domain;
mod services;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    services::scan::run(&cli.files, &mut out)?;
    out.flush()?;
    Ok(())
}

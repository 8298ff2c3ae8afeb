//! CLI entry point for editing inventory grid snapshots

use clap::Parser;
use gridstash::io::cli::{Cli, run};

#[allow(clippy::print_stdout)]
fn main() -> gridstash::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let report = run(&cli)?;
    print!("{report}");
    Ok(())
}

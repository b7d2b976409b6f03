mod cli;
mod commands;
mod pdf;
mod scan;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = cli.split_options();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = commands::split::run(&cli.path, &options, &mut out)?;
    log::info!(
        "{} file(s) split, {} failed",
        summary.succeeded,
        summary.failed
    );

    Ok(())
}

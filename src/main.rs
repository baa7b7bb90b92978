//! CLI entry point for photomosaic construction

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicJob};
use photomosaic::io::configuration::DEFAULT_LOG_FILTER;

fn main() -> photomosaic::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    MosaicJob::new(cli).run()
}

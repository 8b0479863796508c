mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = mugen::Config::from(cli);
    debug!("{:?}", config);

    match mugen::run(&config) {
        Ok(summary) => {
            for file in &summary.files {
                println!("{} {} -> {}", file.rows, file.tier, file.path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

use cidr_exclude::cli::{run, Cli};
use cidr_exclude::config::Config;
use cidr_exclude::logging::init_logging;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    match start(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    log::debug!("#Start main() {config:?}");
    run(cli, &config)
}

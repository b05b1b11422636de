use std::process::ExitCode;

use clap::Parser;

use jumpfuzz::cli::{Cli, run};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("jumpfuzz: {e:#}");
            ExitCode::from(2)
        }
    }
}

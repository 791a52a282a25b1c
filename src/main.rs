use std::env;
use std::process::ExitCode;

use log::debug;

mod args;
mod error;
mod help;
mod namer;
mod prompt;
mod sanitize;

use args::{parse_args, Command};
use error::{NamerError, Result};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<()> {
    let command = parse_args(env::args().skip(1))?;
    debug!("command: {:?}", command);
    match command {
        Command::Help => println!("{}", help::USAGE),
        Command::Version => println!("{}", help::version_line()),
        Command::Interactive => {
            let req = prompt::run_interactive()?;
            let filename = namer::generate(&req)?;
            println!("\n✅ Generated filename: {}", filename);
        }
        Command::Generate(req) => {
            let filename = namer::generate(&req)?;
            println!("✅ Generated filename: {}", filename);
        }
    }
    Ok(())
}

fn report(e: &NamerError) {
    match e {
        NamerError::MissingInput => println!("{}", e),
        NamerError::InvalidFilename { filename } => {
            debug!("rejected filename {:?}", filename);
            println!("{}", e);
        }
        NamerError::Usage(_) => {
            eprintln!("{}", e);
            eprintln!("{}", help::USAGE);
        }
        NamerError::InteractiveInput(_) | NamerError::Io(_) => eprintln!("Error: {}", e),
    }
}

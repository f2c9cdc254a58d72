use std::process::ExitCode;

use clap::Parser;
use log::debug;

use colorview::cli::{self, Cli};
use colorview::config::Config;

fn main() -> ExitCode {
    let args = Cli::parse();
    colorview::logging::init(args.verbose);

    if args.print_config {
        return match Config::default().to_toml() {
            Ok(s) => {
                print!("{s}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let config = Config::load(args.config.as_deref());
    debug!("config: {config:?}");

    match cli::run(&args, &config) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

//! Gridmean - stencil-averaged grids in the terminal.

mod config;
mod session;

use std::env;
use std::path::PathBuf;

use gridmean_core::TextRenderer;

fn print_usage() {
    eprintln!("Usage: gridmean [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <FILE>        Load settings from a TOML file");
    eprintln!("  --no-config            Ignore the user configuration file");
    eprintln!("  -o, --output <FILE>    Export one run as markdown (non-interactive)");
    eprintln!("  -h, --help             Print help");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let mut config_file: Option<PathBuf> = None;
    let mut skip_user_config = false;
    let mut output_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            "--no-config" => {
                skip_user_config = true;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            arg => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let (config, warnings) = config::load(config_file.as_ref(), skip_user_config);
    for warning in warnings {
        log::warn!("{}", warning);
    }

    let result = if let Some(output_path) = output_file {
        session::export_markdown(&config, &output_path)
            .map(|()| println!("Exported to {}", output_path.display()))
    } else if config.grid.is_some() {
        // A configured grid runs once, without prompting.
        session::run_once(&config, &TextRenderer, &mut std::io::stdout().lock())
    } else {
        session::run_interactive(&config)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

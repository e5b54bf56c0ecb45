use anyhow::Result;

use tft_tracker::cli::Command;
use tft_tracker::{handle_lookup, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Lookup {
            riot_id,
            platform,
            proxy,
        } => handle_lookup(riot_id, *platform, proxy),
    }
}

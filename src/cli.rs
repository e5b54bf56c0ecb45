use clap::{Parser, Subcommand};

use crate::config::regions::Platform;

#[derive(Parser, Debug)]
#[command(author, version, about = "tft-tracker backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the riot proxy server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Look up a player profile and recent matches through a running proxy
    Lookup {
        /// Riot ID to search for, e.g. "Rafak#BR1"
        riot_id: String,
        /// Platform the player belongs to
        #[arg(short = 'P', long, value_enum, default_value_t = Platform::Br1)]
        platform: Platform,
        /// Base URL of the proxy server
        #[arg(long, default_value = "http://localhost:3000")]
        proxy: String,
    },
}

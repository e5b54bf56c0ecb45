pub mod api;
pub mod cli;
pub mod config;
pub mod http;
pub mod proxy;
pub mod services;
pub mod view;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use log::warn;

use crate::api::client::ProxyClient;
use crate::api::ddragon_client::{DataDragonClient, ReferenceDb};
use crate::cli::{Cli, Command};
use crate::config::regions::Platform;
use crate::config::settings::{AppConfig, DataDragonSettings};
use crate::services::search::{SearchOutcome, SearchService};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_lookup(riot_id: &str, platform: Platform, proxy_url: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        run_lookup(riot_id, platform, proxy_url, &config).await
    })
}

async fn run_lookup(
    raw_riot_id: &str,
    platform: Platform,
    proxy_url: &str,
    config: &AppConfig,
) -> Result<()> {
    let http_client = http::build_client(config.riot.user_agent, config.riot.timeout_secs)?;
    let proxy_client = ProxyClient::new(proxy_url, http_client.clone());
    let search = SearchService::new(proxy_client, config.search.clone());

    let outcome = search.search(raw_riot_id, platform).await?;
    let result = match outcome {
        SearchOutcome::Idle => {
            println!("Nothing to search for. Try a Riot ID like \"Rafak#BR1\".");
            return Ok(());
        }
        SearchOutcome::Profile(result) => result,
    };

    let refdb = load_reference_db(&config.ddragon, http_client).await;

    let profile = view::build_profile_view(&result, &refdb);
    view::render::print_profile(&profile);
    for card in view::build_match_cards(&result, &refdb, Utc::now()) {
        view::render::print_match_card(&card);
    }
    Ok(())
}

async fn load_reference_db(
    settings: &DataDragonSettings,
    client: reqwest::Client,
) -> ReferenceDb {
    let ddragon = DataDragonClient::new(settings.clone(), client);
    let loaded = async {
        let version = ddragon.fetch_latest_version().await?;
        ddragon.load_databases(&version, settings.locale).await
    }
    .await;

    match loaded {
        Ok(db) => db,
        Err(error) => {
            warn!("Failed to load Data Dragon, showing raw identifiers: {:#}", error);
            ReferenceDb::empty()
        }
    }
}

use anyhow::{bail, Context, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::models::{
    LeagueEntry, LolSummoner, Match, RatedEntry, RiotAccount, TftSummoner,
};
use crate::config::regions::{Platform, Region};

/// Same-origin client for the riot proxy endpoint. One method per logical
/// route; no caching, no retry, no batching.
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> Result<RiotAccount> {
        self.get_route(
            "account-by-riot-id",
            &[
                ("region", region.as_str()),
                ("gameName", game_name),
                ("tagLine", tag_line),
            ],
        )
        .await
    }

    pub async fn summoner_by_puuid(&self, platform: Platform, puuid: &str) -> Result<TftSummoner> {
        self.get_route(
            "summoner-by-puuid",
            &[("platform", platform.as_str()), ("puuid", puuid)],
        )
        .await
    }

    pub async fn lol_summoner_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> Result<LolSummoner> {
        self.get_route(
            "lol-summoner-by-puuid",
            &[("platform", platform.as_str()), ("puuid", puuid)],
        )
        .await
    }

    pub async fn league_by_summoner(
        &self,
        platform: Platform,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntry>> {
        self.get_route(
            "league-by-summoner",
            &[("platform", platform.as_str()), ("summonerId", summoner_id)],
        )
        .await
    }

    pub async fn league_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> Result<Vec<LeagueEntry>> {
        self.get_route(
            "league-by-puuid",
            &[("platform", platform.as_str()), ("puuid", puuid)],
        )
        .await
    }

    pub async fn tft_rated_by_puuid(&self, platform: Platform, puuid: &str) -> Result<RatedEntry> {
        self.get_route(
            "tft-rated-by-puuid",
            &[("platform", platform.as_str()), ("puuid", puuid)],
        )
        .await
    }

    pub async fn matches_by_puuid(
        &self,
        region: Region,
        puuid: &str,
        count: u8,
    ) -> Result<Vec<String>> {
        let count = count.to_string();
        self.get_route(
            "matches-by-puuid",
            &[("region", region.as_str()), ("puuid", puuid), ("count", &count)],
        )
        .await
    }

    pub async fn match_by_id(&self, region: Region, id: &str) -> Result<Match> {
        self.get_route("match-by-id", &[("region", region.as_str()), ("id", id)])
            .await
    }

    // --- Helper Methods ---

    async fn get_route<T: DeserializeOwned>(
        &self,
        route: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/api/riot-proxy", self.base_url);
        let mut query: Vec<(&str, &str)> = vec![("route", route)];
        query.extend_from_slice(params);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .with_context(|| format!("Failed to call proxy route {}", route))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read proxy response for route {}", route))?;

        if !status.is_success() {
            bail!(proxy_error_message(&text, status));
        }

        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse proxy response for route {}", route))
    }
}

/// The proxy serializes every failure as `{"error": "<message>"}`; surface
/// that message when present.
fn proxy_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    if body.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        body.to_string()
    }
}

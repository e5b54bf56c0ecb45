use anyhow::{Context, Result};
use log::{info, warn};

use crate::api::client::ProxyClient;
use crate::api::models::{LeagueEntry, Match, RatedEntry, RiotAccount, TftSummoner};
use crate::config::regions::{Platform, Region};
use crate::config::settings::SearchSettings;

/// Queue types in display preference order; entries outside this list sort
/// last, in unspecified relative order.
const QUEUE_PREFERENCE: [&str; 5] = [
    "RANKED_TFT",
    "RANKED_TFT_STANDARD",
    "RANKED_TFT_DOUBLE_UP",
    "RANKED_TFT_TURBO",
    "RANKED_TFT_PAIRS",
];

/// Queue type stamped on standings synthesized from the rated ladder.
const TURBO_QUEUE: &str = "RANKED_TFT_TURBO";

/// Tiers with no divisions.
const APEX_TIERS: [&str; 3] = ["Master", "Grandmaster", "Challenger"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

/// Split a user-entered identifier into name and tag. The tag defaults when
/// no separator is present; empty input parses to nothing.
pub fn parse_riot_id(raw: &str, default_tag: &str) -> Option<RiotId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut parts = trimmed.split('#');
    let game_name = parts.next().unwrap_or_default().to_string();
    let tag_line = parts
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| default_tag.to_string());

    Some(RiotId { game_name, tag_line })
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Empty query; nothing was fetched.
    Idle,
    Profile(SearchResult),
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub query: RiotId,
    pub account: RiotAccount,
    pub summoner: TftSummoner,
    pub league: Option<LeagueEntry>,
    pub matches: Vec<Match>,
}

/// Chains the dependent lookups of one search: account, profile, recent
/// matches and the ranked standing. Each invocation builds its result from
/// scratch and owns no shared state, so overlapping searches cannot clobber
/// each other.
pub struct SearchService {
    client: ProxyClient,
    settings: SearchSettings,
}

impl SearchService {
    pub fn new(client: ProxyClient, settings: SearchSettings) -> Self {
        Self { client, settings }
    }

    pub async fn search(&self, raw_riot_id: &str, platform: Platform) -> Result<SearchOutcome> {
        let Some(riot_id) = parse_riot_id(raw_riot_id, self.settings.default_tag) else {
            return Ok(SearchOutcome::Idle);
        };

        let region = platform.region();
        info!(
            "Searching {}#{} on {} via {}",
            riot_id.game_name, riot_id.tag_line, platform, region
        );

        let account = self
            .client
            .account_by_riot_id(region, &riot_id.game_name, &riot_id.tag_line)
            .await
            .context("Account lookup failed")?;

        let summoner = self
            .client
            .summoner_by_puuid(platform, &account.puuid)
            .await
            .context("Summoner lookup failed")?;

        let matches = self.fetch_recent_matches(region, &account.puuid).await?;

        // Ranked standing has its own failure boundary; whatever goes wrong
        // here means "no standing", never a failed search.
        let league = match self.resolve_league(platform, &account.puuid, &summoner).await {
            Ok(entry) => entry,
            Err(error) => {
                warn!("Ranked lookup failed for {}: {:#}", account.puuid, error);
                None
            }
        };

        Ok(SearchOutcome::Profile(SearchResult {
            query: riot_id,
            account,
            summoner,
            league,
            matches,
        }))
    }

    async fn fetch_recent_matches(&self, region: Region, puuid: &str) -> Result<Vec<Match>> {
        let ids = self
            .client
            .matches_by_puuid(region, puuid, self.settings.match_count)
            .await
            .context("Match id lookup failed")?;

        // Fan out one fetch per id, then join in id order.
        let handles: Vec<_> = ids
            .into_iter()
            .map(|id| {
                let client = self.client.clone();
                tokio::spawn(async move { client.match_by_id(region, &id).await })
            })
            .collect();

        let mut matches = Vec::with_capacity(handles.len());
        for handle in handles {
            matches.push(handle.await.context("Match fetch task failed")??);
        }
        Ok(matches)
    }

    /// Resolve one ranked standing through the fallback chain: league entries
    /// by legacy summoner id, league entries by puuid, then the rated ladder.
    async fn resolve_league(
        &self,
        platform: Platform,
        puuid: &str,
        summoner: &TftSummoner,
    ) -> Result<Option<LeagueEntry>> {
        let summoner_id = match &summoner.id {
            Some(id) => Some(id.clone()),
            None => self.lookup_legacy_summoner_id(platform, puuid).await,
        };

        if let Some(id) = summoner_id {
            let entries = self
                .client
                .league_by_summoner(platform, &id)
                .await
                .context("League lookup by summoner id failed")?;
            if let Some(entry) = select_preferred_entry(entries) {
                return Ok(Some(entry));
            }
        }

        let by_puuid = self
            .client
            .league_by_puuid(platform, puuid)
            .await
            .context("League lookup by puuid failed")?;
        if let Some(entry) = by_puuid.into_iter().next() {
            return Ok(Some(entry));
        }

        let rated = self
            .client
            .tft_rated_by_puuid(platform, puuid)
            .await
            .context("Rated ladder lookup failed")?;
        Ok(rated_to_entry(rated))
    }

    /// The alternate per-title profile is only a source for the legacy id;
    /// its absence or failure falls through to the puuid-keyed lookups.
    async fn lookup_legacy_summoner_id(&self, platform: Platform, puuid: &str) -> Option<String> {
        match self.client.lol_summoner_by_puuid(platform, puuid).await {
            Ok(summoner) => summoner.id,
            Err(error) => {
                warn!("Legacy summoner lookup failed: {:#}", error);
                None
            }
        }
    }
}

pub fn preference_index(queue_type: &str) -> usize {
    QUEUE_PREFERENCE
        .iter()
        .position(|queue| *queue == queue_type)
        .unwrap_or(usize::MAX)
}

/// Pick the entry whose queue type ranks highest in the preference order.
pub fn select_preferred_entry(entries: Vec<LeagueEntry>) -> Option<LeagueEntry> {
    entries
        .into_iter()
        .min_by_key(|entry| preference_index(&entry.queue_type))
}

/// A rated-ladder standing with a tier becomes a synthetic turbo entry.
pub fn rated_to_entry(rated: RatedEntry) -> Option<LeagueEntry> {
    rated.rated_tier.as_ref()?;
    Some(LeagueEntry {
        queue_type: TURBO_QUEUE.to_string(),
        rated_tier: rated.rated_tier,
        rated_rating: rated.rated_rating,
        ..LeagueEntry::default()
    })
}

/// Render a standing for display: apex tiers have no division, absent tiers
/// display as unranked.
pub fn format_rank(entry: Option<&LeagueEntry>) -> String {
    let Some(entry) = entry else {
        return "Unranked".to_string();
    };

    let tier = match entry.tier.as_deref() {
        Some(tier) if !tier.is_empty() => title_case(tier),
        _ => return "Unranked".to_string(),
    };

    let points = entry.league_points.unwrap_or(0);
    if APEX_TIERS.contains(&tier.as_str()) {
        return format!("{} {}LP", tier, points);
    }

    let division = entry.rank.as_deref().unwrap_or("");
    format!("{} {} {}LP", tier, division, points)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

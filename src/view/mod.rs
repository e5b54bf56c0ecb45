pub mod render;

use chrono::{DateTime, Utc};

use crate::api::ddragon_client::ReferenceDb;
use crate::api::models::{Match, Participant};
use crate::services::search::{format_rank, SearchResult};

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub primary_name: String,
    pub secondary_name: Option<String>,
    pub rank_text: String,
    pub profile_icon_id: i32,
    pub icon_url: String,
    pub level: i64,
}

#[derive(Debug, Clone)]
pub struct MatchCardView {
    pub match_id: String,
    pub mode: String,
    pub time_ago: String,
    /// Absent when the searched player does not appear in the participant
    /// list; the renderer shows a placeholder instead of a card body.
    pub player: Option<PlayerInMatch>,
}

#[derive(Debug, Clone)]
pub struct PlayerInMatch {
    pub placement: i32,
    pub units: Vec<UnitView>,
    pub active_traits: Vec<TraitView>,
}

#[derive(Debug, Clone)]
pub struct UnitView {
    pub name: String,
    pub tier: i32,
    pub items: Vec<String>,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TraitView {
    pub name: String,
    pub num_units: i32,
}

pub fn build_profile_view(result: &SearchResult, refdb: &ReferenceDb) -> ProfileView {
    let primary_name = format!("{}#{}", result.account.game_name, result.account.tag_line);
    let profile_icon_id = result.summoner.profile_icon_id.unwrap_or(0);

    ProfileView {
        primary_name,
        secondary_name: result.summoner.name.clone(),
        rank_text: format_rank(result.league.as_ref()),
        profile_icon_id,
        icon_url: refdb.profile_icon_url(profile_icon_id),
        level: result.summoner.summoner_level.unwrap_or(0),
    }
}

pub fn build_match_cards(
    result: &SearchResult,
    refdb: &ReferenceDb,
    now: DateTime<Utc>,
) -> Vec<MatchCardView> {
    result
        .matches
        .iter()
        .map(|m| build_match_card(m, &result.account.puuid, refdb, now))
        .collect()
}

pub fn build_match_card(
    m: &Match,
    puuid: &str,
    refdb: &ReferenceDb,
    now: DateTime<Utc>,
) -> MatchCardView {
    let player = m
        .info
        .participants
        .iter()
        .find(|p| p.puuid == puuid)
        .map(|p| build_player(p, refdb));

    MatchCardView {
        match_id: m.metadata.match_id.clone(),
        mode: mode_name(m.info.queue_id),
        time_ago: time_ago(m.info.game_datetime, now),
        player,
    }
}

fn build_player(participant: &Participant, refdb: &ReferenceDb) -> PlayerInMatch {
    let units = participant
        .units
        .iter()
        .map(|unit| UnitView {
            name: refdb.champion_name(&unit.character_id).to_string(),
            tier: unit.tier,
            items: unit
                .item_names
                .iter()
                .map(|item| refdb.item_name(item).to_string())
                .collect(),
            icon_url: refdb.champion_icon(&unit.character_id),
        })
        .collect();

    let active_traits = participant
        .traits
        .iter()
        .filter(|t| t.style > 0)
        .map(|t| TraitView {
            name: refdb.trait_name(&t.name).to_string(),
            num_units: t.num_units,
        })
        .collect();

    PlayerInMatch {
        placement: participant.placement,
        units,
        active_traits,
    }
}

pub fn mode_name(queue_id: i32) -> String {
    match queue_id {
        1090 => "Normal".to_string(),
        1100 => "Ranked".to_string(),
        1130 => "Hyper Roll".to_string(),
        1160 => "Double Up".to_string(),
        1180 => "Special mode".to_string(),
        other => format!("Unknown ({})", other),
    }
}

pub fn time_ago(game_datetime_ms: i64, now: DateTime<Utc>) -> String {
    let minutes = (now.timestamp_millis() - game_datetime_ms).max(0) / 60_000;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

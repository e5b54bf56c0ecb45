use serde::{Deserialize, Serialize};

/// Account resolved from a Riot ID. The puuid is the stable cross-game
/// identifier every later lookup keys on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiotAccount {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

/// Per-platform TFT profile. The encrypted `id` is only present on older API
/// versions and serves as a fallback key for league lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TftSummoner {
    pub id: Option<String>,
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub profile_icon_id: Option<i32>,
    pub summoner_level: Option<i64>,
}

/// Alternate per-title profile, fetched only to recover the encrypted
/// summoner id when the TFT profile does not carry one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LolSummoner {
    pub id: Option<String>,
}

/// One ranked standing, one per queue type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: Option<String>,
    pub rank: Option<String>,
    pub league_points: Option<i32>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub rated_tier: Option<String>,
    pub rated_rating: Option<i32>,
}

/// Rated-ladder standing keyed directly by puuid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatedEntry {
    pub rated_tier: Option<String>,
    pub rated_rating: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInfo {
    pub game_datetime: i64,
    #[serde(default)]
    pub game_length: Option<f64>,
    pub queue_id: i32,
    #[serde(default)]
    pub tft_set_number: Option<i32>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub puuid: String,
    pub placement: i32,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub traits: Vec<TraitDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub character_id: String,
    #[serde(rename = "itemNames", default)]
    pub item_names: Vec<String>,
    #[serde(default)]
    pub tier: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitDto {
    pub name: String,
    #[serde(default)]
    pub num_units: i32,
    #[serde(default)]
    pub style: i32,
}

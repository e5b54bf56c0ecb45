use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use serde_json::json;

use tft_tracker::api::client::ProxyClient;
use tft_tracker::api::ddragon_client::ReferenceDb;
use tft_tracker::config::regions::Platform;
use tft_tracker::config::settings::SearchSettings;
use tft_tracker::http::build_client;
use tft_tracker::services::search::{format_rank, SearchOutcome, SearchService};
use tft_tracker::view::{build_match_cards, build_profile_view};

/// Canned upstream behavior, served through a local stand-in for the proxy.
#[derive(Clone)]
struct FakeRiot {
    fail_account: bool,
    summoner: serde_json::Value,
    league_by_summoner: serde_json::Value,
    league_by_puuid: serde_json::Value,
    rated: serde_json::Value,
}

impl Default for FakeRiot {
    fn default() -> Self {
        Self {
            fail_account: false,
            summoner: json!({"puuid": "puuid-rafak", "profileIconId": 123, "summonerLevel": 42}),
            league_by_summoner: json!([]),
            league_by_puuid: json!([]),
            rated: json!({}),
        }
    }
}

fn match_json(id: &str) -> serde_json::Value {
    json!({
        "metadata": {"data_version": "5", "match_id": id, "participants": ["puuid-rafak"]},
        "info": {
            "game_datetime": 1721000000000i64,
            "queue_id": 1100,
            "participants": [{
                "puuid": "puuid-rafak",
                "placement": 2,
                "level": 8,
                "units": [{"character_id": "TFT9_Irelia", "itemNames": [], "tier": 2}],
                "traits": [{"name": "Set9_Challenger", "num_units": 4, "style": 2}]
            }]
        }
    })
}

async fn fake_proxy(
    State(fake): State<Arc<FakeRiot>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let route = params.get("route").map(String::as_str).unwrap_or_default();
    match route {
        "account-by-riot-id" => {
            if fake.fail_account {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "player not found"})),
                )
                    .into_response();
            }
            Json(json!({"puuid": "puuid-rafak", "gameName": "Rafak", "tagLine": "BR1"}))
                .into_response()
        }
        "summoner-by-puuid" => Json(fake.summoner.clone()).into_response(),
        "lol-summoner-by-puuid" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Forbidden"})),
        )
            .into_response(),
        "matches-by-puuid" => Json(json!(["BR1_1", "BR1_2"])).into_response(),
        "match-by-id" => {
            let id = params.get("id").cloned().unwrap_or_default();
            Json(match_json(&id)).into_response()
        }
        "league-by-summoner" => Json(fake.league_by_summoner.clone()).into_response(),
        "league-by-puuid" => Json(fake.league_by_puuid.clone()).into_response(),
        "tft-rated-by-puuid" => Json(fake.rated.clone()).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "Unknown route"}))).into_response(),
    }
}

async fn spawn_fake_proxy(fake: FakeRiot) -> String {
    let app = Router::new()
        .route("/api/riot-proxy", get(fake_proxy))
        .with_state(Arc::new(fake));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });

    format!("http://{}", addr)
}

fn search_service(base_url: String) -> SearchService {
    let client = build_client("tft-tracker-tests", 5).expect("client should build");
    SearchService::new(ProxyClient::new(base_url, client), SearchSettings::default())
}

#[tokio::test]
async fn full_search_resolves_profile_rank_and_matches() {
    let fake = FakeRiot {
        summoner: json!({
            "id": "enc-123",
            "puuid": "puuid-rafak",
            "profileIconId": 123,
            "summonerLevel": 42
        }),
        league_by_summoner: json!([
            {"queueType": "RANKED_TFT_DOUBLE_UP", "tier": "PLATINUM", "rank": "IV", "leaguePoints": 12},
            {"queueType": "RANKED_TFT", "tier": "GOLD", "rank": "II", "leaguePoints": 37}
        ]),
        ..FakeRiot::default()
    };
    let service = search_service(spawn_fake_proxy(fake).await);

    let outcome = service
        .search("Rafak#BR1", Platform::Br1)
        .await
        .expect("search should succeed");
    let SearchOutcome::Profile(result) = outcome else {
        panic!("expected a profile outcome");
    };

    assert_eq!(result.account.puuid, "puuid-rafak");
    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.matches[0].metadata.match_id, "BR1_1");
    assert_eq!(result.matches[1].metadata.match_id, "BR1_2");

    let league = result.league.as_ref().expect("ranked standing should resolve");
    assert_eq!(league.queue_type, "RANKED_TFT");
    assert_eq!(format_rank(Some(league)), "Gold II 37LP");

    let profile = build_profile_view(&result, &ReferenceDb::empty());
    assert_eq!(profile.primary_name, "Rafak#BR1");
    assert_eq!(profile.level, 42);
    assert_eq!(profile.rank_text, "Gold II 37LP");

    let cards = build_match_cards(&result, &ReferenceDb::empty(), Utc::now());
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|card| card.player.is_some()));
}

#[tokio::test]
async fn exhausted_ranked_fallbacks_mean_unranked_not_an_error() {
    // No legacy id anywhere, empty league lists, no rated tier.
    let service = search_service(spawn_fake_proxy(FakeRiot::default()).await);

    let outcome = service
        .search("Rafak#BR1", Platform::Br1)
        .await
        .expect("search should still succeed");
    let SearchOutcome::Profile(result) = outcome else {
        panic!("expected a profile outcome");
    };

    assert!(result.league.is_none());
    assert_eq!(format_rank(result.league.as_ref()), "Unranked");
}

#[tokio::test]
async fn rated_ladder_synthesizes_a_turbo_standing() {
    let fake = FakeRiot {
        rated: json!({"ratedTier": "ORANGE", "ratedRating": 1450}),
        ..FakeRiot::default()
    };
    let service = search_service(spawn_fake_proxy(fake).await);

    let outcome = service
        .search("Rafak#BR1", Platform::Br1)
        .await
        .expect("search should succeed");
    let SearchOutcome::Profile(result) = outcome else {
        panic!("expected a profile outcome");
    };

    let league = result.league.expect("synthetic standing should resolve");
    assert_eq!(league.queue_type, "RANKED_TFT_TURBO");
    assert_eq!(league.rated_tier.as_deref(), Some("ORANGE"));
    assert_eq!(league.rated_rating, Some(1450));
}

#[tokio::test]
async fn account_failure_surfaces_a_single_error() {
    let fake = FakeRiot {
        fail_account: true,
        ..FakeRiot::default()
    };
    let service = search_service(spawn_fake_proxy(fake).await);

    let error = service
        .search("Rafak#BR1", Platform::Br1)
        .await
        .expect_err("search should fail");
    let message = format!("{:#}", error);
    assert!(message.contains("Account lookup failed"));
    assert!(message.contains("player not found"));
}

#[tokio::test]
async fn empty_query_is_idle_without_any_network_call() {
    // Points at a closed port; an idle search must never get that far.
    let service = search_service("http://127.0.0.1:9".to_string());

    let outcome = service
        .search("   ", Platform::Br1)
        .await
        .expect("empty input should not error");
    assert!(matches!(outcome, SearchOutcome::Idle));
}

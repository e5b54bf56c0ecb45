use std::collections::HashMap;

use urlencoding::encode;

/// Which host table a route resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Region,
    Platform,
}

/// One logical proxy route: name, host table, required parameters and the
/// upstream path it expands to.
pub struct RouteSpec {
    pub name: &'static str,
    pub host: HostKind,
    pub required: &'static [&'static str],
    pub build_path: fn(&RouteParams) -> String,
}

/// Flat string parameters of one proxy request.
pub struct RouteParams<'a> {
    inner: &'a HashMap<String, String>,
}

impl<'a> RouteParams<'a> {
    pub fn new(inner: &'a HashMap<String, String>) -> Self {
        Self { inner }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Percent-encoded value for use as a path segment. Required parameters
    /// are validated before any path is built, so a miss expands to empty.
    pub fn encoded(&self, key: &str) -> String {
        self.get(key).map(|v| encode(v).into_owned()).unwrap_or_default()
    }
}

fn account_by_riot_id_path(params: &RouteParams) -> String {
    format!(
        "/riot/account/v1/accounts/by-riot-id/{}/{}",
        params.encoded("gameName"),
        params.encoded("tagLine")
    )
}

fn summoner_by_puuid_path(params: &RouteParams) -> String {
    format!("/tft/summoner/v1/summoners/by-puuid/{}", params.encoded("puuid"))
}

fn lol_summoner_by_puuid_path(params: &RouteParams) -> String {
    format!("/lol/summoner/v4/summoners/by-puuid/{}", params.encoded("puuid"))
}

fn league_by_summoner_path(params: &RouteParams) -> String {
    format!("/tft/league/v1/entries/by-summoner/{}", params.encoded("summonerId"))
}

fn tft_rated_by_puuid_path(params: &RouteParams) -> String {
    format!("/tft/league/v1/rated/by-puuid/{}", params.encoded("puuid"))
}

fn league_by_puuid_path(params: &RouteParams) -> String {
    format!("/tft/league/v1/by-puuid/{}", params.encoded("puuid"))
}

fn matches_by_puuid_path(params: &RouteParams) -> String {
    let count = params.get("count").unwrap_or("5");
    format!(
        "/tft/match/v1/matches/by-puuid/{}/ids?count={}",
        params.encoded("puuid"),
        count
    )
}

fn match_by_id_path(params: &RouteParams) -> String {
    format!("/tft/match/v1/matches/{}", params.encoded("id"))
}

pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        name: "account-by-riot-id",
        host: HostKind::Region,
        required: &["region", "gameName", "tagLine"],
        build_path: account_by_riot_id_path,
    },
    RouteSpec {
        name: "summoner-by-puuid",
        host: HostKind::Platform,
        required: &["platform", "puuid"],
        build_path: summoner_by_puuid_path,
    },
    RouteSpec {
        name: "lol-summoner-by-puuid",
        host: HostKind::Platform,
        required: &["platform", "puuid"],
        build_path: lol_summoner_by_puuid_path,
    },
    RouteSpec {
        name: "league-by-summoner",
        host: HostKind::Platform,
        required: &["platform", "summonerId"],
        build_path: league_by_summoner_path,
    },
    RouteSpec {
        name: "tft-rated-by-puuid",
        host: HostKind::Platform,
        required: &["platform", "puuid"],
        build_path: tft_rated_by_puuid_path,
    },
    RouteSpec {
        name: "league-by-puuid",
        host: HostKind::Platform,
        required: &["platform", "puuid"],
        build_path: league_by_puuid_path,
    },
    RouteSpec {
        name: "matches-by-puuid",
        host: HostKind::Region,
        required: &["region", "puuid"],
        build_path: matches_by_puuid_path,
    },
    RouteSpec {
        name: "match-by-id",
        host: HostKind::Region,
        required: &["region", "id"],
        build_path: match_by_id_path,
    },
];

pub fn find_route(name: &str) -> Option<&'static RouteSpec> {
    ROUTES.iter().find(|route| route.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn finds_every_declared_route() {
        for route in ROUTES {
            assert!(find_route(route.name).is_some());
        }
        assert!(find_route("no-such-route").is_none());
    }

    #[test]
    fn account_path_encodes_name_segments() {
        let map = params(&[("gameName", "Rafak Jr"), ("tagLine", "BR1")]);
        let path = account_by_riot_id_path(&RouteParams::new(&map));
        assert_eq!(path, "/riot/account/v1/accounts/by-riot-id/Rafak%20Jr/BR1");
    }

    #[test]
    fn matches_path_defaults_count_to_five() {
        let map = params(&[("puuid", "abc")]);
        let path = matches_by_puuid_path(&RouteParams::new(&map));
        assert_eq!(path, "/tft/match/v1/matches/by-puuid/abc/ids?count=5");
    }

    #[test]
    fn matches_path_honors_explicit_count() {
        let map = params(&[("puuid", "abc"), ("count", "20")]);
        let path = matches_by_puuid_path(&RouteParams::new(&map));
        assert_eq!(path, "/tft/match/v1/matches/by-puuid/abc/ids?count=20");
    }

    #[test]
    fn match_by_id_path_uses_the_id() {
        let map = params(&[("id", "BR1_123")]);
        let path = match_by_id_path(&RouteParams::new(&map));
        assert_eq!(path, "/tft/match/v1/matches/BR1_123");
    }
}

use std::collections::HashMap;

use log::{info, warn};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::regions::{platform_host, region_host};
use crate::proxy::routes::{find_route, HostKind, RouteParams, RouteSpec};

/// Header carrying the upstream credential.
pub const CREDENTIAL_HEADER: &str = "X-Riot-Token";

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("Unknown route")]
    UnknownRoute,
    #[error("Missing RIOT_API_KEY environment variable")]
    MissingCredential,
    #[error("Invalid region")]
    InvalidRegion,
    #[error("Invalid platform")]
    InvalidPlatform,
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),
    #[error("{0}")]
    Upstream(String),
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to parse upstream response: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Stateless forwarder mapping a logical route plus flat string parameters to
/// exactly one upstream call with the credential header attached.
pub struct Forwarder {
    client: Client,
    credential: Option<String>,
}

impl Forwarder {
    /// The credential is injected here once; `forward` never reads ambient
    /// state.
    pub fn new(credential: Option<String>, client: Client) -> Self {
        Self { client, credential }
    }

    /// Relay one proxied request and return the upstream JSON body verbatim.
    /// No retry is attempted.
    pub async fn forward(&self, params: &HashMap<String, String>) -> Result<Value, ForwardError> {
        let credential = self
            .credential
            .as_deref()
            .ok_or(ForwardError::MissingCredential)?;

        let route_name = params.get("route").ok_or(ForwardError::UnknownRoute)?;
        let spec = find_route(route_name).ok_or(ForwardError::UnknownRoute)?;
        let url = resolve_url(spec, &RouteParams::new(params))?;

        info!("Forwarding {} to {}", route_name, url);
        let response = self
            .client
            .get(&url)
            .header(CREDENTIAL_HEADER, credential)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, route_name);
            if text.is_empty() {
                return Err(ForwardError::Upstream(format!(
                    "Upstream error {}",
                    status.as_u16()
                )));
            }
            return Err(ForwardError::Upstream(text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Build the single upstream URL for a route, validating parameters and
/// resolving the host table entry.
pub fn resolve_url(spec: &RouteSpec, params: &RouteParams) -> Result<String, ForwardError> {
    for name in spec.required.iter().copied() {
        if params.get(name).is_none() {
            return Err(ForwardError::MissingParam(name));
        }
    }

    let host = match spec.host {
        HostKind::Region => {
            let key = params.get("region").ok_or(ForwardError::MissingParam("region"))?;
            region_host(key).ok_or(ForwardError::InvalidRegion)?
        }
        HostKind::Platform => {
            let key = params
                .get("platform")
                .ok_or(ForwardError::MissingParam("platform"))?;
            platform_host(key).ok_or(ForwardError::InvalidPlatform)?
        }
    };

    Ok(format!("{}{}", host, (spec.build_path)(params)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::build_client;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn spec(name: &str) -> &'static RouteSpec {
        find_route(name).expect("route should exist")
    }

    #[test]
    fn resolves_platform_route_to_full_url() {
        let map = params(&[("platform", "br1"), ("puuid", "abc")]);
        let url = resolve_url(spec("summoner-by-puuid"), &RouteParams::new(&map)).unwrap();
        assert_eq!(
            url,
            "https://br1.api.riotgames.com/tft/summoner/v1/summoners/by-puuid/abc"
        );
    }

    #[test]
    fn resolves_region_route_to_full_url() {
        let map = params(&[("region", "americas"), ("gameName", "Rafak"), ("tagLine", "BR1")]);
        let url = resolve_url(spec("account-by-riot-id"), &RouteParams::new(&map)).unwrap();
        assert_eq!(
            url,
            "https://americas.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Rafak/BR1"
        );
    }

    #[test]
    fn unknown_platform_key_is_rejected() {
        let map = params(&[("platform", "xx1"), ("puuid", "abc")]);
        let result = resolve_url(spec("summoner-by-puuid"), &RouteParams::new(&map));
        assert!(matches!(result, Err(ForwardError::InvalidPlatform)));
    }

    #[test]
    fn missing_required_parameter_is_rejected() {
        let map = params(&[("platform", "br1")]);
        let result = resolve_url(spec("summoner-by-puuid"), &RouteParams::new(&map));
        assert!(matches!(result, Err(ForwardError::MissingParam("puuid"))));
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_routing() {
        let client = build_client("test", 5).unwrap();
        let forwarder = Forwarder::new(None, client);
        let map = params(&[("route", "no-such-route")]);
        let result = forwarder.forward(&map).await;
        assert!(matches!(result, Err(ForwardError::MissingCredential)));
    }

    #[tokio::test]
    async fn unknown_route_fails_without_upstream_call() {
        let client = build_client("test", 5).unwrap();
        let forwarder = Forwarder::new(Some("key".to_string()), client);
        let map = params(&[("route", "no-such-route")]);
        let result = forwarder.forward(&map).await;
        assert!(matches!(result, Err(ForwardError::UnknownRoute)));
    }
}

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Build the shared HTTP client used for all outbound calls.
pub fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}

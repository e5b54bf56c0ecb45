use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use log::info;
use reqwest::Client;
use serde::Deserialize;

use crate::config::settings::DataDragonSettings;

/// Display metadata for one game object.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetInfo {
    pub name: String,
    #[serde(default)]
    pub image: Option<AssetImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetImage {
    pub full: String,
}

#[derive(Debug, Deserialize)]
struct AssetFile {
    #[serde(default)]
    data: HashMap<String, AssetInfo>,
}

/// Versioned static metadata mapping internal identifiers to display names
/// and icons. A lookup miss degrades to the raw identifier.
#[derive(Debug, Clone)]
pub struct ReferenceDb {
    pub version: String,
    champions: HashMap<String, AssetInfo>,
    items: HashMap<String, AssetInfo>,
    traits: HashMap<String, AssetInfo>,
}

impl ReferenceDb {
    pub fn new(
        version: impl Into<String>,
        champions: HashMap<String, AssetInfo>,
        items: HashMap<String, AssetInfo>,
        traits: HashMap<String, AssetInfo>,
    ) -> Self {
        Self {
            version: version.into(),
            champions,
            items,
            traits,
        }
    }

    /// A database with no entries; every lookup falls back to the raw id.
    pub fn empty() -> Self {
        Self::new("", HashMap::new(), HashMap::new(), HashMap::new())
    }

    pub fn champion_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.champions.get(id).map(|a| a.name.as_str()).unwrap_or(id)
    }

    pub fn item_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.items.get(id).map(|a| a.name.as_str()).unwrap_or(id)
    }

    pub fn trait_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.traits.get(id).map(|a| a.name.as_str()).unwrap_or(id)
    }

    pub fn champion_icon(&self, id: &str) -> Option<String> {
        let image = self.champions.get(id)?.image.as_ref()?;
        Some(format!(
            "{}/cdn/{}/img/tft-champion/{}",
            DataDragonSettings::default().base_url,
            self.version,
            image.full
        ))
    }

    pub fn profile_icon_url(&self, icon_id: i32) -> String {
        format!(
            "{}/cdn/{}/img/profileicon/{}.png",
            DataDragonSettings::default().base_url,
            self.version,
            icon_id
        )
    }
}

/// Client for the versioned static-data CDN.
pub struct DataDragonClient {
    client: Client,
    settings: DataDragonSettings,
}

impl DataDragonClient {
    pub fn new(settings: DataDragonSettings, client: Client) -> Self {
        Self { client, settings }
    }

    /// Latest published dataset version.
    pub async fn fetch_latest_version(&self) -> Result<String> {
        let url = format!("{}/api/versions.json", self.settings.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch Data Dragon versions")?;

        if !response.status().is_success() {
            bail!("Data Dragon returned status: {}", response.status());
        }

        let versions: Vec<String> = response
            .json()
            .await
            .context("Failed to parse Data Dragon version list")?;
        versions
            .into_iter()
            .next()
            .context("Data Dragon version list is empty")
    }

    /// Fetch the champion, item and trait datasets concurrently. The load is
    /// all-or-nothing; a partial database is never returned.
    pub async fn load_databases(&self, version: &str, locale: &str) -> Result<ReferenceDb> {
        let base = format!("{}/cdn/{}/data/{}", self.settings.base_url, version, locale);

        let (champions, items, traits) = tokio::try_join!(
            self.fetch_asset_file(format!("{}/tft-champion.json", base)),
            self.fetch_asset_file(format!("{}/tft-item.json", base)),
            self.fetch_asset_file(format!("{}/tft-trait.json", base)),
        )?;

        info!(
            "Loaded Data Dragon datasets for version {} ({} champions, {} items, {} traits)",
            version,
            champions.len(),
            items.len(),
            traits.len()
        );
        Ok(ReferenceDb::new(version, champions, items, traits))
    }

    async fn fetch_asset_file(&self, url: String) -> Result<HashMap<String, AssetInfo>> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            bail!("Data Dragon returned status {} for {}", response.status(), url);
        }

        let file: AssetFile = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {}", url))?;
        Ok(file.data)
    }
}

#[derive(Debug, Clone)]
pub struct RiotSettings {
    pub api_key: Option<String>,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for RiotSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            user_agent: "TftTracker/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataDragonSettings {
    pub base_url: &'static str,
    pub locale: &'static str,
}

impl Default for DataDragonSettings {
    fn default() -> Self {
        Self {
            base_url: "https://ddragon.leagueoflegends.com",
            locale: "pt_BR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub match_count: u8,
    pub default_tag: &'static str,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            match_count: 5,
            default_tag: "BR1",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub riot: RiotSettings,
    pub ddragon: DataDragonSettings,
    pub search: SearchSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the upstream credential once at composition time. Request
    /// handling never touches the environment.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.riot.api_key = std::env::var("RIOT_API_KEY").ok();
        config
    }
}

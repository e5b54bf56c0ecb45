use clap::ValueEnum;

/// Riot platform keys, one per regional game server cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Platform {
    Br1,
    Na1,
    Euw1,
    Eun1,
    Kr,
    Jp1,
    La1,
    La2,
    Oc1,
    Tr1,
    Ru,
    Ph2,
    Sg2,
    Th2,
    Tw2,
    Vn2,
}

/// Routing group of platforms sharing account and match infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Europe,
    Asia,
}

pub const PLATFORMS: [Platform; 16] = [
    Platform::Br1,
    Platform::Na1,
    Platform::Euw1,
    Platform::Eun1,
    Platform::Kr,
    Platform::Jp1,
    Platform::La1,
    Platform::La2,
    Platform::Oc1,
    Platform::Tr1,
    Platform::Ru,
    Platform::Ph2,
    Platform::Sg2,
    Platform::Th2,
    Platform::Tw2,
    Platform::Vn2,
];

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Br1 => "br1",
            Platform::Na1 => "na1",
            Platform::Euw1 => "euw1",
            Platform::Eun1 => "eun1",
            Platform::Kr => "kr",
            Platform::Jp1 => "jp1",
            Platform::La1 => "la1",
            Platform::La2 => "la2",
            Platform::Oc1 => "oc1",
            Platform::Tr1 => "tr1",
            Platform::Ru => "ru",
            Platform::Ph2 => "ph2",
            Platform::Sg2 => "sg2",
            Platform::Th2 => "th2",
            Platform::Tw2 => "tw2",
            Platform::Vn2 => "vn2",
        }
    }

    pub fn parse(key: &str) -> Option<Platform> {
        PLATFORMS.iter().copied().find(|p| p.as_str() == key)
    }

    /// Base URL of the per-platform API host
    pub fn host(&self) -> &'static str {
        match self {
            Platform::Br1 => "https://br1.api.riotgames.com",
            Platform::Na1 => "https://na1.api.riotgames.com",
            Platform::Euw1 => "https://euw1.api.riotgames.com",
            Platform::Eun1 => "https://eun1.api.riotgames.com",
            Platform::Kr => "https://kr.api.riotgames.com",
            Platform::Jp1 => "https://jp1.api.riotgames.com",
            Platform::La1 => "https://la1.api.riotgames.com",
            Platform::La2 => "https://la2.api.riotgames.com",
            Platform::Oc1 => "https://oc1.api.riotgames.com",
            Platform::Tr1 => "https://tr1.api.riotgames.com",
            Platform::Ru => "https://ru.api.riotgames.com",
            Platform::Ph2 => "https://ph2.api.riotgames.com",
            Platform::Sg2 => "https://sg2.api.riotgames.com",
            Platform::Th2 => "https://th2.api.riotgames.com",
            Platform::Tw2 => "https://tw2.api.riotgames.com",
            Platform::Vn2 => "https://vn2.api.riotgames.com",
        }
    }

    /// Routing region used for account and match lookups
    pub fn region(&self) -> Region {
        match self {
            Platform::Br1 | Platform::La1 | Platform::La2 | Platform::Na1 | Platform::Oc1 => {
                Region::Americas
            }
            Platform::Ru | Platform::Tr1 | Platform::Eun1 | Platform::Euw1 => Region::Europe,
            Platform::Jp1
            | Platform::Kr
            | Platform::Ph2
            | Platform::Sg2
            | Platform::Th2
            | Platform::Tw2
            | Platform::Vn2 => Region::Asia,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Americas => "americas",
            Region::Europe => "europe",
            Region::Asia => "asia",
        }
    }

    pub fn parse(key: &str) -> Option<Region> {
        [Region::Americas, Region::Europe, Region::Asia]
            .into_iter()
            .find(|r| r.as_str() == key)
    }

    /// Base URL of the regional API host
    pub fn host(&self) -> &'static str {
        match self {
            Region::Americas => "https://americas.api.riotgames.com",
            Region::Europe => "https://europe.api.riotgames.com",
            Region::Asia => "https://asia.api.riotgames.com",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn platform_host(key: &str) -> Option<&'static str> {
    Platform::parse(key).map(|p| p.host())
}

pub fn region_host(key: &str) -> Option<&'static str> {
    Region::parse(key).map(|r| r.host())
}

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Platform routing values, one per game-server shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Br1,
    Eun1,
    Euw1,
    Jp1,
    Kr,
    La1,
    La2,
    Me1,
    Na1,
    Oc1,
    Ru,
    Sg2,
    Tr1,
    Tw2,
    Vn2,
}

/// Regional routing values used by the account and match families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
    Sea,
}

/// A routable server: platform shard, regional cluster, or the esports host.
///
/// Resolution is a pure lookup over a closed set; there is no default and no
/// fallback. Identifiers outside the set fail at parse time, before any
/// request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerAddress {
    Platform(Platform),
    Region(Region),
    Esports,
}

impl Platform {
    pub const ALL: [Platform; 15] = [
        Platform::Br1,
        Platform::Eun1,
        Platform::Euw1,
        Platform::Jp1,
        Platform::Kr,
        Platform::La1,
        Platform::La2,
        Platform::Me1,
        Platform::Na1,
        Platform::Oc1,
        Platform::Ru,
        Platform::Sg2,
        Platform::Tr1,
        Platform::Tw2,
        Platform::Vn2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Br1 => "br1",
            Platform::Eun1 => "eun1",
            Platform::Euw1 => "euw1",
            Platform::Jp1 => "jp1",
            Platform::Kr => "kr",
            Platform::La1 => "la1",
            Platform::La2 => "la2",
            Platform::Me1 => "me1",
            Platform::Na1 => "na1",
            Platform::Oc1 => "oc1",
            Platform::Ru => "ru",
            Platform::Sg2 => "sg2",
            Platform::Tr1 => "tr1",
            Platform::Tw2 => "tw2",
            Platform::Vn2 => "vn2",
        }
    }

    /// Regional cluster carrying this shard's account and match traffic.
    pub fn region(&self) -> Region {
        match self {
            Platform::Na1 | Platform::Br1 | Platform::La1 | Platform::La2 => Region::Americas,
            Platform::Euw1 | Platform::Eun1 | Platform::Me1 | Platform::Tr1 | Platform::Ru => {
                Region::Europe
            }
            Platform::Kr | Platform::Jp1 => Region::Asia,
            Platform::Oc1 | Platform::Sg2 | Platform::Tw2 | Platform::Vn2 => Region::Sea,
        }
    }
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Americas,
        Region::Asia,
        Region::Europe,
        Region::Sea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Americas => "americas",
            Region::Asia => "asia",
            Region::Europe => "europe",
            Region::Sea => "sea",
        }
    }
}

impl ServerAddress {
    /// Routing value as it appears in configuration ("euw1", "europe", "esports").
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerAddress::Platform(platform) => platform.as_str(),
            ServerAddress::Region(region) => region.as_str(),
            ServerAddress::Esports => "esports",
        }
    }

    /// Hostname used as the authority part of every URL built for this server.
    pub fn host(&self) -> &'static str {
        match self {
            ServerAddress::Platform(platform) => match platform {
                Platform::Br1 => "br1.api.riotgames.com",
                Platform::Eun1 => "eun1.api.riotgames.com",
                Platform::Euw1 => "euw1.api.riotgames.com",
                Platform::Jp1 => "jp1.api.riotgames.com",
                Platform::Kr => "kr.api.riotgames.com",
                Platform::La1 => "la1.api.riotgames.com",
                Platform::La2 => "la2.api.riotgames.com",
                Platform::Me1 => "me1.api.riotgames.com",
                Platform::Na1 => "na1.api.riotgames.com",
                Platform::Oc1 => "oc1.api.riotgames.com",
                Platform::Ru => "ru.api.riotgames.com",
                Platform::Sg2 => "sg2.api.riotgames.com",
                Platform::Tr1 => "tr1.api.riotgames.com",
                Platform::Tw2 => "tw2.api.riotgames.com",
                Platform::Vn2 => "vn2.api.riotgames.com",
            },
            ServerAddress::Region(region) => match region {
                Region::Americas => "americas.api.riotgames.com",
                Region::Asia => "asia.api.riotgames.com",
                Region::Europe => "europe.api.riotgames.com",
                Region::Sea => "sea.api.riotgames.com",
            },
            ServerAddress::Esports => "esports.api.riotgames.com",
        }
    }
}

impl From<Platform> for ServerAddress {
    fn from(platform: Platform) -> Self {
        ServerAddress::Platform(platform)
    }
}

impl From<Region> for ServerAddress {
    fn from(region: Region) -> Self {
        ServerAddress::Region(region)
    }
}

impl FromStr for ServerAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        let server = match value.as_str() {
            "br1" => Platform::Br1.into(),
            "eun1" => Platform::Eun1.into(),
            "euw1" => Platform::Euw1.into(),
            "jp1" => Platform::Jp1.into(),
            "kr" => Platform::Kr.into(),
            "la1" => Platform::La1.into(),
            "la2" => Platform::La2.into(),
            "me1" => Platform::Me1.into(),
            "na1" => Platform::Na1.into(),
            "oc1" => Platform::Oc1.into(),
            "ru" => Platform::Ru.into(),
            "sg2" => Platform::Sg2.into(),
            "tr1" => Platform::Tr1.into(),
            "tw2" => Platform::Tw2.into(),
            "vn2" => Platform::Vn2.into(),
            "americas" => Region::Americas.into(),
            "asia" => Region::Asia.into(),
            "europe" => Region::Europe.into(),
            "sea" => Region::Sea.into(),
            "esports" => ServerAddress::Esports,
            _ => return Err(Error::UnknownServer(s.to_string())),
        };
        Ok(server)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_identifier_resolves_to_a_stable_host() {
        for platform in Platform::ALL {
            let server = ServerAddress::Platform(platform);
            assert!(!server.host().is_empty());
            assert!(server.host().ends_with(".api.riotgames.com"));
            assert!(server.host().starts_with(platform.as_str()));
        }
        for region in Region::ALL {
            let server = ServerAddress::Region(region);
            assert!(server.host().starts_with(region.as_str()));
        }
        assert_eq!(ServerAddress::Esports.host(), "esports.api.riotgames.com");
    }

    #[test]
    fn parsing_round_trips_the_closed_set() {
        for platform in Platform::ALL {
            let server = ServerAddress::Platform(platform);
            assert_eq!(server.as_str().parse::<ServerAddress>().unwrap(), server);
        }
        for region in Region::ALL {
            let server = ServerAddress::Region(region);
            assert_eq!(server.as_str().parse::<ServerAddress>().unwrap(), server);
        }
        assert_eq!(
            "esports".parse::<ServerAddress>().unwrap(),
            ServerAddress::Esports
        );
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            "EUW1".parse::<ServerAddress>().unwrap(),
            ServerAddress::Platform(Platform::Euw1)
        );
    }

    #[test]
    fn identifiers_outside_the_set_are_rejected() {
        for junk in ["", "euw", "xx9", "eu-west", "americas1"] {
            match junk.parse::<ServerAddress>() {
                Err(Error::UnknownServer(value)) => assert_eq!(value, junk),
                other => panic!("expected UnknownServer for {junk:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn platforms_map_to_their_regional_cluster() {
        assert_eq!(Platform::Na1.region(), Region::Americas);
        assert_eq!(Platform::Euw1.region(), Region::Europe);
        assert_eq!(Platform::Kr.region(), Region::Asia);
        assert_eq!(Platform::Oc1.region(), Region::Sea);
        assert_eq!(Platform::Me1.region(), Region::Europe);
    }
}

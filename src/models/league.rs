use serde::{Deserialize, Serialize};

// League-V4 responses

/// League list as returned by the apex-league and league-id endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub league_id: String,
    pub entries: Vec<LeagueItem>,
    pub tier: String,
    pub name: String,
    pub queue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueItem {
    pub puuid: Option<String>,
    pub summoner_id: Option<String>,
    pub league_points: i32,
    pub rank: String,
    pub wins: i32,
    pub losses: i32,
    pub veteran: bool,
    pub inactive: bool,
    pub fresh_blood: bool,
    pub hot_streak: bool,
    pub mini_series: Option<MiniSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub league_id: Option<String>,
    pub puuid: Option<String>,
    pub summoner_id: Option<String>,
    pub queue_type: String,
    pub tier: Option<String>,
    pub rank: Option<String>,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub hot_streak: bool,
    pub veteran: bool,
    pub fresh_blood: bool,
    pub inactive: bool,
    pub mini_series: Option<MiniSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniSeries {
    pub losses: i32,
    pub progress: String,
    pub target: i32,
    pub wins: i32,
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::champion::ChampionData;

// Champion-mastery-V4 responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMastery {
    pub puuid: String,
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i32,
    pub last_play_time: i64,
    pub champion_points_since_last_level: i64,
    pub champion_points_until_next_level: i64,
    #[serde(default)]
    pub mark_required_for_next_level: i32,
    pub tokens_earned: i32,
    #[serde(default)]
    pub champion_season_milestone: i32,
    pub milestone_grades: Option<Vec<String>>,
    pub highest_grade: Option<String>,
    pub next_season_milestone: Option<NextSeasonMilestone>,
    /// Filled by enrichment, never by deserialization.
    #[serde(skip)]
    pub champion: Option<ChampionData>,
}

impl ChampionMastery {
    pub fn attach_champion(&mut self, champion: ChampionData) {
        self.champion = Some(champion);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSeasonMilestone {
    #[serde(default)]
    pub require_grade_counts: HashMap<String, i32>,
    pub reward_marks: i32,
    pub bonus: bool,
    pub reward_config: Option<RewardConfig>,
    pub total_games_requires: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardConfig {
    pub reward_value: String,
    pub maximum_reward: i32,
    pub reward_type: Option<String>,
}

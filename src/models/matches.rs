use serde::{Deserialize, Serialize};

// Match-V5 responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub data_version: String,
    pub match_id: String,
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub end_of_game_result: Option<String>,
    pub game_creation: i64,
    pub game_duration: i64,
    pub game_end_timestamp: Option<i64>,
    pub game_id: i64,
    pub game_mode: String,
    pub game_name: String,
    pub game_start_timestamp: i64,
    pub game_type: String,
    pub game_version: String,
    pub map_id: i32,
    pub participants: Vec<MatchParticipant>,
    pub platform_id: String,
    pub queue_id: i32,
    pub teams: Vec<MatchTeam>,
    pub tournament_code: Option<String>,
}

// A participant carries well over a hundred wire fields; the ones modeled
// here are the stable core, the rest are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipant {
    pub puuid: String,
    pub champion_id: i64,
    pub champion_name: String,
    pub champ_level: i32,
    pub team_id: i32,
    #[serde(default)]
    pub team_position: String,
    #[serde(default)]
    pub lane: String,
    #[serde(default)]
    pub role: String,
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub gold_earned: i32,
    pub total_damage_dealt_to_champions: i64,
    pub total_minions_killed: i32,
    pub vision_score: i32,
    pub riot_id_game_name: Option<String>,
    pub riot_id_tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeam {
    pub team_id: i32,
    pub win: bool,
    pub bans: Vec<MatchBan>,
    pub objectives: TeamObjectives,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBan {
    // -1 when the ban was skipped
    pub champion_id: i64,
    pub pick_turn: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamObjectives {
    pub baron: ObjectiveStat,
    pub champion: ObjectiveStat,
    pub dragon: ObjectiveStat,
    pub horde: Option<ObjectiveStat>,
    pub inhibitor: ObjectiveStat,
    pub rift_herald: ObjectiveStat,
    pub tower: ObjectiveStat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveStat {
    pub first: bool,
    pub kills: i32,
}

// Match timeline

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTimeline {
    pub metadata: MatchMetadata,
    pub info: TimelineInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfo {
    pub end_of_game_result: Option<String>,
    pub frame_interval: i64,
    pub game_id: Option<i64>,
    #[serde(default)]
    pub participants: Vec<TimelineParticipant>,
    pub frames: Vec<TimelineFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineParticipant {
    pub participant_id: i32,
    pub puuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFrame {
    pub timestamp: i64,
    pub events: Vec<TimelineEvent>,
    #[serde(default)]
    pub participant_frames: serde_json::Value,
}

/// Timeline events are polymorphic; the discriminator stays typed and the
/// rest of the payload rides along untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub details: serde_json::Value,
}

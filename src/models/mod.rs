pub mod account;
pub mod champion;
pub mod league;
pub mod mastery;
pub mod matches;
pub mod summoner;

pub use account::{Account, ActiveRegion, ActiveShard};
pub use champion::{
    ChampionData, ChampionDetail, ChampionDetailListing, ChampionImage, ChampionInfo,
    ChampionListing, ChampionPassive, ChampionRotation, ChampionSkin, ChampionSpell,
    ChampionStats, SpellTip,
};
pub use league::{League, LeagueEntry, LeagueItem, MiniSeries};
pub use mastery::{ChampionMastery, NextSeasonMilestone, RewardConfig};
pub use matches::{
    Match, MatchBan, MatchInfo, MatchMetadata, MatchParticipant, MatchTeam, MatchTimeline,
    ObjectiveStat, TeamObjectives, TimelineEvent, TimelineFrame, TimelineInfo,
    TimelineParticipant,
};
pub use summoner::Summoner;

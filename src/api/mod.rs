pub mod account_v1;
pub mod champion_mastery_v4;
pub mod champion_v3;
pub mod league_v4;
pub mod match_v5;
pub mod summoner_v4;
pub(crate) mod urls;

pub use account_v1::AccountV1;
pub use champion_mastery_v4::ChampionMasteryV4;
pub use champion_v3::ChampionV3;
pub use league_v4::{Division, LeagueV4, QueueType, Tier};
pub use match_v5::{MatchIdsQuery, MatchType, MatchV5};
pub use summoner_v4::SummonerV4;

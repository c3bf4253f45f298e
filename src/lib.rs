//! Async typed client for the Riot Games API and the Data Dragon CDN.
//!
//! One `Hexgate` is bound to one server (platform shard, regional cluster,
//! or esports). Account and match endpoints live on the regional clusters;
//! summoner, league, mastery and rotation endpoints live on the platform
//! shards. A client bound to a platform shard sends account and match calls
//! through that shard's regional cluster, so one `Hexgate` covers every
//! family.
//!
//! ```no_run
//! use hexgate::{Hexgate, Platform};
//!
//! # async fn run() -> hexgate::Result<()> {
//! let client = Hexgate::new(Platform::Euw1, "RGAPI-...")?;
//! let summoner = client.summoner_v4().get_summoner_by_puuid("some-puuid").await?;
//! println!("summoner level {}", summoner.summoner_level);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod ddragon;
pub mod error;
pub mod models;
pub mod servers;
mod validate;

pub use api::{
    AccountV1, ChampionMasteryV4, ChampionV3, Division, LeagueV4, MatchIdsQuery, MatchType,
    MatchV5, QueueType, SummonerV4, Tier,
};
pub use client::Hexgate;
pub use config::Config;
pub use ddragon::{ChampionsDb, DataDragon};
pub use error::{ApiErrorStatus, Error, Result};
pub use servers::{Platform, Region, ServerAddress};

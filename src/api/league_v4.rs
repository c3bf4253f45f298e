use std::fmt;
use std::sync::Arc;

use crate::api::urls;
use crate::client::{FromHandle, Handle};
use crate::error::{translate_error, Result};
use crate::models::{League, LeagueEntry};
use crate::validate;

/// Ranked queues addressable by the league endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueType {
    RankedSolo5x5,
    RankedFlexSr,
    RankedFlexTt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl QueueType {
    /// Wire value used in URL paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueType::RankedSolo5x5 => "RANKED_SOLO_5x5",
            QueueType::RankedFlexSr => "RANKED_FLEX_SR",
            QueueType::RankedFlexTt => "RANKED_FLEX_TT",
        }
    }
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
        }
    }
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::I => "I",
            Division::II => "II",
            Division::III => "III",
            Division::IV => "IV",
        }
    }
}

impl fmt::Display for QueueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// League-V4 endpoints, served per platform shard.
pub struct LeagueV4 {
    handle: Arc<Handle>,
}

impl FromHandle for LeagueV4 {
    fn from_handle(handle: Arc<Handle>) -> Self {
        LeagueV4 { handle }
    }
}

impl LeagueV4 {
    pub async fn get_challenger_league(&self, queue: QueueType) -> Result<League> {
        let url = urls::challenger_league(&self.handle.api_base(), queue);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "league_v4.get_challenger_league")
    }

    pub async fn get_grandmaster_league(&self, queue: QueueType) -> Result<League> {
        let url = urls::grandmaster_league(&self.handle.api_base(), queue);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "league_v4.get_grandmaster_league")
    }

    pub async fn get_master_league(&self, queue: QueueType) -> Result<League> {
        let url = urls::master_league(&self.handle.api_base(), queue);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "league_v4.get_master_league")
    }

    pub async fn get_league_entries_by_puuid(&self, puuid: &str) -> Result<Vec<LeagueEntry>> {
        let url = urls::league_entries_by_puuid(&self.handle.api_base(), puuid);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::list(&resp, "league_v4.get_league_entries_by_puuid")
    }

    pub async fn get_league_entries(
        &self,
        queue: QueueType,
        tier: Tier,
        division: Division,
    ) -> Result<Vec<LeagueEntry>> {
        let url = urls::league_entries(&self.handle.api_base(), queue, tier, division);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::list(&resp, "league_v4.get_league_entries")
    }

    pub async fn get_league_by_id(&self, league_id: &str) -> Result<League> {
        let url = urls::league_by_id(&self.handle.api_base(), league_id);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "league_v4.get_league_by_id")
    }
}

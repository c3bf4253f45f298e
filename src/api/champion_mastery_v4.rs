use std::sync::Arc;

use crate::api::urls;
use crate::client::{FromHandle, Handle};
use crate::error::{translate_error, Result};
use crate::models::ChampionMastery;
use crate::validate;

/// Champion-mastery-V4 endpoints, served per platform shard.
///
/// Methods with `load_champions` enrich each record with its champion from
/// the directory; that requires `init_champions` to have completed.
pub struct ChampionMasteryV4 {
    handle: Arc<Handle>,
}

impl FromHandle for ChampionMasteryV4 {
    fn from_handle(handle: Arc<Handle>) -> Self {
        ChampionMasteryV4 { handle }
    }
}

impl ChampionMasteryV4 {
    pub async fn get_all_champion_masteries(
        &self,
        puuid: &str,
        load_champions: bool,
    ) -> Result<Vec<ChampionMastery>> {
        let url = urls::masteries_by_puuid(&self.handle.api_base(), puuid);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        let mut masteries: Vec<ChampionMastery> =
            validate::list(&resp, "champion_mastery_v4.get_all_champion_masteries")?;
        if load_champions {
            self.enrich(&mut masteries)?;
        }
        Ok(masteries)
    }

    pub async fn get_champion_mastery(
        &self,
        puuid: &str,
        champion_id: i64,
        load_champions: bool,
    ) -> Result<ChampionMastery> {
        let url = urls::mastery_by_champion(&self.handle.api_base(), puuid, champion_id);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        let mut mastery: ChampionMastery =
            validate::model(&resp, "champion_mastery_v4.get_champion_mastery")?;
        if load_champions {
            self.enrich(std::slice::from_mut(&mut mastery))?;
        }
        Ok(mastery)
    }

    /// Highest `count` mastery records for the player.
    pub async fn get_top_champion_masteries(
        &self,
        puuid: &str,
        count: u32,
        load_champions: bool,
    ) -> Result<Vec<ChampionMastery>> {
        let url = urls::top_masteries(&self.handle.api_base(), puuid);
        let query = [("count", count.to_string())];
        let resp = self.handle.get_with_query(url, &query).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        let mut masteries: Vec<ChampionMastery> =
            validate::list(&resp, "champion_mastery_v4.get_top_champion_masteries")?;
        if load_champions {
            self.enrich(&mut masteries)?;
        }
        Ok(masteries)
    }

    /// Sum of mastery levels, returned by the API as a bare integer body.
    pub async fn get_total_mastery_score(&self, puuid: &str) -> Result<i64> {
        let url = urls::mastery_score(&self.handle.api_base(), puuid);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "champion_mastery_v4.get_total_mastery_score")
    }

    fn enrich(&self, masteries: &mut [ChampionMastery]) -> Result<()> {
        let db = self.handle.champions()?;
        for mastery in masteries {
            mastery.attach_champion(db.champion_by_id(mastery.champion_id)?.clone());
        }
        Ok(())
    }
}

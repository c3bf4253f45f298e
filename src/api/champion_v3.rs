use std::sync::Arc;

use crate::api::urls;
use crate::client::{FromHandle, Handle};
use crate::error::{translate_error, Result};
use crate::models::ChampionRotation;
use crate::validate;

/// Champion-V3 rotation endpoint, served per platform shard.
pub struct ChampionV3 {
    handle: Arc<Handle>,
}

impl FromHandle for ChampionV3 {
    fn from_handle(handle: Arc<Handle>) -> Self {
        ChampionV3 { handle }
    }
}

impl ChampionV3 {
    /// Current free-to-play rotation. With `load_champions`, both rotation
    /// lists are filled from their own id lists via the champion directory.
    pub async fn get_champion_rotations(&self, load_champions: bool) -> Result<ChampionRotation> {
        let url = urls::champion_rotations(&self.handle.api_base());
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        let mut rotation: ChampionRotation =
            validate::model(&resp, "champion_v3.get_champion_rotations")?;
        if load_champions {
            let db = self.handle.champions()?;
            rotation.free_champions = rotation
                .free_champion_ids
                .iter()
                .map(|&id| db.champion_by_id(id).cloned())
                .collect::<Result<Vec<_>>>()?;
            rotation.free_champions_for_new_players = rotation
                .free_champion_ids_for_new_players
                .iter()
                .map(|&id| db.champion_by_id(id).cloned())
                .collect::<Result<Vec<_>>>()?;
        }
        Ok(rotation)
    }
}

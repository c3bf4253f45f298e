use std::sync::Arc;

use crate::api::urls;
use crate::client::{FromHandle, Handle};
use crate::error::{translate_error, Result};
use crate::models::Summoner;
use crate::validate;

/// Summoner-V4 endpoints, served per platform shard.
pub struct SummonerV4 {
    handle: Arc<Handle>,
}

impl FromHandle for SummonerV4 {
    fn from_handle(handle: Arc<Handle>) -> Self {
        SummonerV4 { handle }
    }
}

impl SummonerV4 {
    pub async fn get_summoner_by_puuid(&self, puuid: &str) -> Result<Summoner> {
        let url = urls::summoner_by_puuid(&self.handle.api_base(), puuid);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "summoner_v4.get_summoner_by_puuid")
    }
}

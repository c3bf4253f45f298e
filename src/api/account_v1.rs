use std::sync::Arc;

use crate::api::urls;
use crate::client::{FromHandle, Handle};
use crate::error::{translate_error, Result};
use crate::models::{Account, ActiveRegion, ActiveShard};
use crate::validate;

/// Account-V1 endpoints. Served by the regional clusters; a client bound to a
/// platform shard sends these calls through the shard's regional cluster.
pub struct AccountV1 {
    handle: Arc<Handle>,
}

impl FromHandle for AccountV1 {
    fn from_handle(handle: Arc<Handle>) -> Self {
        AccountV1 { handle }
    }
}

impl AccountV1 {
    pub async fn get_account_by_puuid(&self, puuid: &str) -> Result<Account> {
        let url = urls::account_by_puuid(&self.handle.regional_base(), puuid);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "account_v1.get_account_by_puuid")
    }

    pub async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Account> {
        let url = urls::account_by_riot_id(&self.handle.regional_base(), game_name, tag_line);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "account_v1.get_account_by_riot_id")
    }

    /// Account behind an RSO access token; sent as a bearer header on top of
    /// the usual API-key header.
    pub async fn get_account_by_access_token(&self, access_token: &str) -> Result<Account> {
        let url = urls::account_me(&self.handle.regional_base());
        let resp = self.handle.get_with_bearer(url, access_token).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "account_v1.get_account_by_access_token")
    }

    /// Active shard for a game with per-player shards (`"val"` or `"lor"`).
    pub async fn get_active_shard(&self, game: &str, puuid: &str) -> Result<ActiveShard> {
        let url = urls::active_shard(&self.handle.regional_base(), game, puuid);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "account_v1.get_active_shard")
    }

    /// Active region for `"lol"` or `"tft"`.
    pub async fn get_active_region(&self, game: &str, puuid: &str) -> Result<ActiveRegion> {
        let url = urls::active_region(&self.handle.regional_base(), game, puuid);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "account_v1.get_active_region")
    }
}

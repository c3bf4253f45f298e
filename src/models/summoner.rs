use serde::{Deserialize, Serialize};

// Summoner-V4 response. The id/accountId pair is still sent on some shards
// but no longer documented, so both stay optional.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub puuid: String,
    pub profile_icon_id: i32,
    pub revision_date: i64,
    pub summoner_level: i64,
}

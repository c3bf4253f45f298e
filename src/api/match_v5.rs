use std::fmt;
use std::sync::Arc;

use crate::api::urls;
use crate::client::{FromHandle, Handle};
use crate::error::{translate_error, Result};
use crate::models::{Match, MatchTimeline};
use crate::validate;

/// Match-type filter for the id listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    Ranked,
    Normal,
    Tourney,
    Tutorial,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Ranked => "ranked",
            MatchType::Normal => "normal",
            MatchType::Tourney => "tourney",
            MatchType::Tutorial => "tutorial",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for the match-id listing. Filters are additive and
/// independent; `start`/`count` always reach the wire, defaulting to 0/20.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIdsQuery {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub queue: Option<i32>,
    pub match_type: Option<MatchType>,
    pub start: Option<u32>,
    pub count: Option<u32>,
}

impl MatchIdsQuery {
    pub const DEFAULT_START: u32 = 0;
    pub const DEFAULT_COUNT: u32 = 20;

    pub fn new() -> Self {
        Self::default()
    }

    /// Epoch seconds; matches that started at or after this instant.
    pub fn with_start_time(mut self, epoch_secs: i64) -> Self {
        self.start_time = Some(epoch_secs);
        self
    }

    /// Epoch seconds; matches that started before this instant.
    pub fn with_end_time(mut self, epoch_secs: i64) -> Self {
        self.end_time = Some(epoch_secs);
        self
    }

    /// Numeric queue id (420 is ranked solo).
    pub fn with_queue(mut self, queue_id: i32) -> Self {
        self.queue = Some(queue_id);
        self
    }

    pub fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start_time) = self.start_time {
            pairs.push(("startTime", start_time.to_string()));
        }
        if let Some(end_time) = self.end_time {
            pairs.push(("endTime", end_time.to_string()));
        }
        if let Some(queue) = self.queue {
            pairs.push(("queue", queue.to_string()));
        }
        if let Some(match_type) = self.match_type {
            pairs.push(("type", match_type.as_str().to_string()));
        }
        pairs.push(("start", self.start.unwrap_or(Self::DEFAULT_START).to_string()));
        pairs.push(("count", self.count.unwrap_or(Self::DEFAULT_COUNT).to_string()));
        pairs
    }
}

/// Match-V5 endpoints. Served by the regional clusters; a client bound to a
/// platform shard sends these calls through the shard's regional cluster.
pub struct MatchV5 {
    handle: Arc<Handle>,
}

impl FromHandle for MatchV5 {
    fn from_handle(handle: Arc<Handle>) -> Self {
        MatchV5 { handle }
    }
}

impl MatchV5 {
    /// Match ids for a player, newest first.
    pub async fn get_match_ids_by_puuid(
        &self,
        puuid: &str,
        query: &MatchIdsQuery,
    ) -> Result<Vec<String>> {
        let url = urls::match_ids_by_puuid(&self.handle.regional_base(), puuid);
        let resp = self.handle.get_with_query(url, &query.to_query()).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::list(&resp, "match_v5.get_match_ids_by_puuid")
    }

    pub async fn get_match_by_id(&self, match_id: &str) -> Result<Match> {
        let url = urls::match_by_id(&self.handle.regional_base(), match_id);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "match_v5.get_match_by_id")
    }

    pub async fn get_match_timeline_by_id(&self, match_id: &str) -> Result<MatchTimeline> {
        let url = urls::match_timeline(&self.handle.regional_base(), match_id);
        let resp = self.handle.get(url).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        validate::model(&resp, "match_v5.get_match_timeline_by_id")
    }
}

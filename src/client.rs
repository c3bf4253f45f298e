use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::OnceCell;

use crate::api::{
    AccountV1, ChampionMasteryV4, ChampionV3, LeagueV4, MatchV5, SummonerV4,
};
use crate::config::Config;
use crate::ddragon::{ChampionsDb, DataDragon};
use crate::error::{Error, Result};
use crate::models::ChampionDetail;
use crate::servers::ServerAddress;

const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// One configured client for the Riot API and Data Dragon.
///
/// Cloning is cheap: clones share the connection pool, the champion
/// directory, and the detail cache.
#[derive(Clone)]
pub struct Hexgate {
    handle: Arc<Handle>,
}

/// State shared by every per-version family client.
pub(crate) struct Handle {
    http: reqwest::Client,
    config: Config,
    ddragon: DataDragon,
    champions: OnceCell<ChampionsDb>,
}

/// Construction contract implemented by each per-version family client.
pub(crate) trait FromHandle {
    fn from_handle(handle: Arc<Handle>) -> Self;
}

/// A completed GET, before validation or error translation.
pub(crate) struct RawResponse {
    pub(crate) status: u16,
    pub(crate) url: String,
    pub(crate) body: String,
}

impl Hexgate {
    /// Client for `server` authenticating with `api_key`.
    pub fn new(server: impl Into<ServerAddress>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(api_key, server))
    }

    /// Client configured from the environment (`RIOT_API_KEY`, `RIOT_REGION`, ...).
    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env()?)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let mut token = HeaderValue::from_str(&config.api_key)
            .map_err(|_| Error::Config("api_key contains non-header characters".to_string()))?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(RIOT_TOKEN_HEADER, token);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        let ddragon = DataDragon::from_parts(
            http.clone(),
            config.ddragon_base(),
            config.ddragon_version.clone(),
        );

        Ok(Hexgate {
            handle: Arc::new(Handle {
                http,
                config,
                ddragon,
                champions: OnceCell::new(),
            }),
        })
    }

    pub fn server(&self) -> ServerAddress {
        self.handle.config.server
    }

    // Family accessors

    pub fn account_v1(&self) -> AccountV1 {
        AccountV1::from_handle(Arc::clone(&self.handle))
    }

    pub fn champion_v3(&self) -> ChampionV3 {
        ChampionV3::from_handle(Arc::clone(&self.handle))
    }

    pub fn champion_mastery_v4(&self) -> ChampionMasteryV4 {
        ChampionMasteryV4::from_handle(Arc::clone(&self.handle))
    }

    pub fn league_v4(&self) -> LeagueV4 {
        LeagueV4::from_handle(Arc::clone(&self.handle))
    }

    pub fn summoner_v4(&self) -> SummonerV4 {
        SummonerV4::from_handle(Arc::clone(&self.handle))
    }

    pub fn match_v5(&self) -> MatchV5 {
        MatchV5::from_handle(Arc::clone(&self.handle))
    }

    /// The Data Dragon sub-client this client fetches champion data with.
    pub fn ddragon(&self) -> &DataDragon {
        &self.handle.ddragon
    }

    /// Downloads and indexes the champion listing. Must complete before any
    /// enrichment-enabled call; concurrent callers share one in-flight fetch.
    pub async fn init_champions(&self) -> Result<&ChampionsDb> {
        self.handle.init_champions().await
    }

    /// The champion directory, once `init_champions` has completed.
    pub fn champions(&self) -> Result<&ChampionsDb> {
        self.handle.champions()
    }

    /// Detailed champion record by numeric id, resolved through the directory
    /// and memoized per champion.
    pub async fn champion_details(&self, champion_id: i64) -> Result<Arc<ChampionDetail>> {
        let cdn_id = self.handle.champions()?.champion_by_id(champion_id)?.id.clone();
        self.handle.ddragon.champion_details(&cdn_id).await
    }

    /// Detailed champion record by display name ("Wukong") or CDN identifier
    /// ("MonkeyKing").
    pub async fn champion_details_by_name(&self, name: &str) -> Result<Arc<ChampionDetail>> {
        let cdn_id = self.handle.champions()?.champion_by_name(name)?.id.clone();
        self.handle.ddragon.champion_details(&cdn_id).await
    }
}

impl Handle {
    pub(crate) fn api_base(&self) -> String {
        self.config.api_base()
    }

    /// Base URL for the regionally-routed families; platform shards resolve
    /// to their regional cluster.
    pub(crate) fn regional_base(&self) -> String {
        self.config.regional_api_base()
    }

    pub(crate) async fn get(&self, url: String) -> Result<RawResponse> {
        send(self.http.get(&url)).await
    }

    pub(crate) async fn get_with_query(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<RawResponse> {
        send(self.http.get(&url).query(query)).await
    }

    pub(crate) async fn get_with_bearer(
        &self,
        url: String,
        access_token: &str,
    ) -> Result<RawResponse> {
        send(self.http.get(&url).bearer_auth(access_token)).await
    }

    pub(crate) async fn init_champions(&self) -> Result<&ChampionsDb> {
        self.champions
            .get_or_try_init(|| self.ddragon.fetch_champions())
            .await
    }

    pub(crate) fn champions(&self) -> Result<&ChampionsDb> {
        self.champions.get().ok_or(Error::ChampionsUninitialized)
    }
}

/// Issues the request and collects status, final URL and body text. Transport
/// failures (connect, timeout, body read) surface as `Error::Http`.
pub(crate) async fn send(request: reqwest::RequestBuilder) -> Result<RawResponse> {
    let resp = request.send().await?;
    let status = resp.status().as_u16();
    let url = resp.url().to_string();
    let body = resp.text().await?;
    tracing::debug!(%url, status, "request completed");
    Ok(RawResponse { status, url, body })
}

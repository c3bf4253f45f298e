use std::env;
use std::fmt;

use crate::ddragon::DDRAGON_HOST;
use crate::error::{Error, Result};
use crate::servers::{Platform, ServerAddress};

/// Pinned Data Dragon snapshot used when no version is configured.
pub const DEFAULT_DDRAGON_VERSION: &str = "15.15.1";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub server: ServerAddress,
    pub ddragon_version: String,
    pub timeout_secs: u64,
    /// Overrides `https://{server.host()}` when set. Meant for tests and proxies.
    pub api_base_url: Option<String>,
    /// Overrides the Data Dragon CDN base when set.
    pub ddragon_base_url: Option<String>,
}

impl Config {
    pub fn new(api_key: impl Into<String>, server: impl Into<ServerAddress>) -> Self {
        Config {
            api_key: api_key.into(),
            server: server.into(),
            ddragon_version: DEFAULT_DDRAGON_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_base_url: None,
            ddragon_base_url: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            Error::Config("RIOT_API_KEY not found in environment or .env file".to_string())
        })?;

        let server = env::var("RIOT_REGION")
            .unwrap_or_else(|_| Platform::Na1.as_str().to_string())
            .parse::<ServerAddress>()?;

        let mut config = Config::new(api_key, server);
        if let Ok(version) = env::var("DDRAGON_VERSION") {
            config.ddragon_version = version;
        }
        if let Ok(secs) = env::var("RIOT_TIMEOUT_SECS") {
            config.timeout_secs = secs.parse().map_err(|_| {
                Error::Config(format!("RIOT_TIMEOUT_SECS is not a number: {secs}"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_ddragon_version(mut self, version: impl Into<String>) -> Self {
        self.ddragon_version = version.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn with_ddragon_base_url(mut self, url: impl Into<String>) -> Self {
        self.ddragon_base_url = Some(url.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config("api_key must not be empty".to_string()));
        }
        Ok(())
    }

    /// Server used for the regionally-routed families (account, match): a
    /// platform shard routes through its regional cluster, regional and
    /// esports values pass through unchanged.
    pub fn regional_server(&self) -> ServerAddress {
        match self.server {
            ServerAddress::Platform(platform) => ServerAddress::Region(platform.region()),
            other => other,
        }
    }

    pub(crate) fn api_base(&self) -> String {
        match &self.api_base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.server.host()),
        }
    }

    pub(crate) fn regional_api_base(&self) -> String {
        match &self.api_base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.regional_server().host()),
        }
    }

    pub(crate) fn ddragon_base(&self) -> String {
        match &self.ddragon_base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{DDRAGON_HOST}"),
        }
    }
}

// Keeps the API key out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("server", &self.server)
            .field("ddragon_version", &self.ddragon_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_base_url", &self.api_base_url)
            .field("ddragon_base_url", &self.ddragon_base_url)
            .finish()
    }
}

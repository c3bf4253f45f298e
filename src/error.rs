use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Status block of the upstream error envelope, copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorStatus {
    pub status_code: u16,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    status: ApiErrorStatus,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Riot API error {}: {}", .0.status_code, .0.message)]
    Api(ApiErrorStatus),

    #[error("Malformed error body on HTTP {http_status}: {body}")]
    MalformedErrorBody { http_status: u16, body: String },

    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Schema validation error: {0}")]
    Validation(#[source] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unknown server identifier: {0}")]
    UnknownServer(String),

    #[error("Unknown champion: {0}")]
    UnknownChampion(String),

    #[error("Champions directory not initialized; call init_champions first")]
    ChampionsUninitialized,

    #[error("Configuration error: {0}")]
    Config(String),
}

// Non-200 bodies normally carry `{"status": {"status_code": .., "message": ..}}`.
// A body that is not that envelope (not JSON, or JSON of another shape) becomes
// MalformedErrorBody rather than an Api error with an invented status code.
pub(crate) fn translate_error(http_status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => Error::Api(envelope.status),
        Err(_) => Error::MalformedErrorBody {
            http_status,
            body: body.to_string(),
        },
    }
}

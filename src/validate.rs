use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::client::RawResponse;
use crate::error::{Error, Result};

// Validation of 200-responses. Failures split two ways: a body that is not
// JSON at all logs one diagnostic event carrying the endpoint label, HTTP
// status, URL and raw body, then surfaces as Decode; a body that is valid
// JSON but fails the schema surfaces as Validation with no log. The endpoint
// label never appears in the error itself, only in the log event.

pub(crate) fn model<T: DeserializeOwned>(resp: &RawResponse, endpoint: &'static str) -> Result<T> {
    serde_json::from_str(&resp.body).map_err(|err| classify(err, resp, endpoint))
}

pub(crate) fn list<T: DeserializeOwned>(
    resp: &RawResponse,
    endpoint: &'static str,
) -> Result<Vec<T>> {
    model(resp, endpoint)
}

fn classify(err: serde_json::Error, resp: &RawResponse, endpoint: &'static str) -> Error {
    match err.classify() {
        Category::Syntax | Category::Eof => {
            tracing::error!(
                endpoint,
                status = resp.status,
                url = %resp.url,
                body = %resp.body,
                "response body is not valid JSON"
            );
            Error::Decode(err)
        }
        _ => Error::Validation(err),
    }
}

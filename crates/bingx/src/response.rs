use serde::de::DeserializeOwned;
use serde::Deserialize;

use common::{Error, Result};

/// Raw outcome of a single HTTP dispatch. Ephemeral: classified once,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Split a raw response on HTTP status. 2xx passes the body through for
/// decoding; anything else becomes `Error::Api` carrying the body verbatim
/// so the caller can read the exchange's diagnostics.
pub fn classify(raw: RawResponse) -> Result<String> {
    if (200..300).contains(&raw.status) {
        Ok(raw.body)
    } else {
        Err(Error::Api {
            status: raw.status,
            body: raw.body,
        })
    }
}

/// Decode a success body into the expected payload shape.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

/// Standard envelope the exchange wraps every payload in.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: T,
}

/// Decode a success body through the standard envelope and yield the inner
/// payload.
pub fn decode_data<T: DeserializeOwned>(body: &str) -> Result<T> {
    decode::<ApiEnvelope<T>>(body).map(|envelope| envelope.data)
}

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex HMAC-SHA256 digest of `query`, keyed by `secret`.
///
/// The signature covers only the canonical query string. Method and path
/// are deliberately outside it; this is a property of the exchange
/// protocol, not an accident.
pub fn sign(secret: &str, query: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(query.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

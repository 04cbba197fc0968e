use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::{Client, Method, Proxy};
use tracing::debug;

use common::{Config, Credentials, Error, Result};

use crate::params::ParamSet;
use crate::response::{classify, RawResponse};
use crate::sign::sign;

/// Header carrying the API key. The key travels here and never in the
/// query string.
const API_KEY_HEADER: &str = "X-BX-APIKEY";

/// Abstraction over signed REST dispatch.
///
/// `BingxClient` implements this for live traffic. Tests substitute
/// scripted implementations so operations can run without a network.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Perform exactly one signed request and return the raw success body.
    /// No retries happen here; retry policy is the caller's decision.
    async fn send_signed(&self, method: Method, path: &str, params: ParamSet) -> Result<String>;
}

/// REST API client for BingX. Holds the immutable credentials and the
/// connection pool; safe to share across tasks without locking.
#[derive(Debug)]
pub struct BingxClient {
    credentials: Credentials,
    base_url: String,
    http: Client,
}

impl BingxClient {
    pub fn new(
        credentials: Credentials,
        base_url: impl Into<String>,
        proxy: Option<&str>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut builder = Client::builder().use_rustls_tls().timeout(timeout);
        if let Some(proxy_url) = proxy {
            // One proxy for both HTTP and HTTPS egress.
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::Config(format!("invalid proxy URL '{proxy_url}': {e}")))?;
            builder = builder.proxy(proxy);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            credentials,
            base_url: base_url.into(),
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(
            cfg.credentials(),
            &cfg.base_url,
            cfg.proxy.as_deref(),
            Duration::from_secs(cfg.http_timeout_secs),
        )
    }

    fn timestamp_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_millis() as u64
    }

    /// Assemble the full request URL: canonical query first, signature as
    /// the final parameter.
    fn signed_url(&self, path: &str, params: &ParamSet, timestamp_ms: u64) -> String {
        let query = params.canonical(timestamp_ms);
        let signature = sign(&self.credentials.secret_key, &query);
        format!("{}{}?{}&signature={}", self.base_url, path, query, signature)
    }
}

#[async_trait]
impl RestClient for BingxClient {
    async fn send_signed(&self, method: Method, path: &str, params: ParamSet) -> Result<String> {
        let url = self.signed_url(path, &params, Self::timestamp_ms());
        debug!(%method, path, "dispatching signed request");

        // POST and DELETE carry their parameters in the query string too;
        // the request body stays empty.
        let resp = self
            .http
            .request(method, &url)
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        classify(RawResponse { status, body })
    }
}

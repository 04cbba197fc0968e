use crate::Credentials;

const DEFAULT_BASE_URL: &str = "https://open-api.bingx.com";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// All configuration loaded from environment variables at startup.
/// Missing required variables cause an immediate panic with a clear message.
#[derive(Debug, Clone)]
pub struct Config {
    // Exchange credentials
    pub api_key: String,
    pub secret_key: String,

    /// Base URL of the exchange REST API.
    pub base_url: String,

    /// Optional proxy URL applied to both HTTP and HTTPS egress.
    pub proxy: Option<String>,

    /// Per-request timeout in seconds.
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load all configuration from environment variables.
    /// Loads `.env` if present. Panics on any missing required variable.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present

        Config {
            api_key: required_env("BINGX_API_KEY"),
            secret_key: required_env("BINGX_SECRET_KEY"),
            base_url: optional_env("BINGX_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            proxy: optional_env("BINGX_PROXY"),
            http_timeout_secs: optional_env("BINGX_HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.api_key, &self.secret_key)
    }
}

fn required_env(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        panic!("Required environment variable '{key}' is not set. Check your .env file.")
    })
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

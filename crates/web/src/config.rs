use std::fmt;
use std::time::Duration;

use sope_core::media::BaseUrl;

const DEFAULT_CMS_URL: &str = "http://localhost:3000";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Origin of the content service.
    pub cms_base_url: BaseUrl,
    /// Bound on a single CMS read (default: 10 seconds).
    pub cms_timeout: Duration,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// CMS backend secret. Carried for deployments that share one env file
    /// with the CMS; pages never send it.
    pub payload_secret: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                  |
    /// |------------------------------|--------------------------|
    /// | `HOST`                       | `0.0.0.0`                |
    /// | `PORT`                       | `3001`                   |
    /// | `NEXT_PUBLIC_API_URL`        | (unset)                  |
    /// | `PAYLOAD_PUBLIC_SERVER_URL`  | `http://localhost:3000`  |
    /// | `CMS_TIMEOUT_SECS`           | `10`                     |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                     |
    /// | `PAYLOAD_SECRET`             | empty                    |
    ///
    /// `NEXT_PUBLIC_API_URL` takes precedence over `PAYLOAD_PUBLIC_SERVER_URL`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cms_url = ["NEXT_PUBLIC_API_URL", "PAYLOAD_PUBLIC_SERVER_URL"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CMS_URL.into());
        let cms_base_url = BaseUrl::parse(&cms_url)
            .unwrap_or_else(|e| panic!("Invalid CMS base URL: {e}"));

        let cms_timeout_secs: u64 = std::env::var("CMS_TIMEOUT_SECS")
            .unwrap_or_else(|_| sope_cms::DEFAULT_TIMEOUT.as_secs().to_string())
            .parse()
            .expect("CMS_TIMEOUT_SECS must be a valid u64");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let payload_secret = std::env::var("PAYLOAD_SECRET").unwrap_or_default();

        Self {
            host,
            port,
            cms_base_url,
            cms_timeout: Duration::from_secs(cms_timeout_secs),
            request_timeout_secs,
            payload_secret,
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cms_base_url", &self.cms_base_url)
            .field("cms_timeout", &self.cms_timeout)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("payload_secret", &"<redacted>")
            .finish()
    }
}

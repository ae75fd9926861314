use std::sync::Arc;

use sope_cms::CmsClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// CMS client (one connection pool for all requests).
    pub cms: Arc<CmsClient>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let cms = CmsClient::new(config.cms_base_url.clone(), config.cms_timeout);
        Self {
            config: Arc::new(config),
            cms: Arc::new(cms),
        }
    }
}

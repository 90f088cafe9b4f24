//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::routes::registry::{build_manifest, ToolManifest};

/// Shared, read-only application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Effective server configuration
    pub config: Arc<ServerConfig>,
    /// Tool manifest, built once at startup
    pub manifest: Arc<ToolManifest>,
}

impl AppState {
    /// Create application state from a loaded configuration.
    pub fn new(config: ServerConfig) -> Self {
        let manifest = build_manifest(config.public_base_url());
        Self {
            config: Arc::new(config),
            manifest: Arc::new(manifest),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

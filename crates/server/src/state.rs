//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::gateway::GatewayClient;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the store and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Store,
    gateway: Option<GatewayClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The gateway client exists only when credentials were configured.
    #[must_use]
    pub fn new(config: ServerConfig, store: Store) -> Self {
        let gateway = config.gateway.as_ref().map(GatewayClient::new);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                gateway,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get the gateway client, if configured.
    #[must_use]
    pub fn gateway(&self) -> Option<&GatewayClient> {
        self.inner.gateway.as_ref()
    }

    /// The gateway public key id for the checkout page; empty when the
    /// gateway is not configured.
    #[must_use]
    pub fn gateway_key_id(&self) -> String {
        self.inner
            .gateway
            .as_ref()
            .map(|g| g.key_id().to_string())
            .unwrap_or_default()
    }
}

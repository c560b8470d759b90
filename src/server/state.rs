use axum::extract::FromRef;

use super::ServerConfig;
use crate::directory_store::DirectoryStore;
use std::sync::Arc;

pub type GuardedDirectoryStore = Arc<dyn DirectoryStore>;

/// Everything a handler needs, constructed once at startup and cloned into
/// the router. There is no ambient singleton; the store travels through here.
#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub store: GuardedDirectoryStore,
}

impl FromRef<ServerState> for GuardedDirectoryStore {
    fn from_ref(input: &ServerState) -> Self {
        input.store.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

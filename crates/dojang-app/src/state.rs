use std::sync::Arc;

use dojang_config::Config;
use dojang_core::index::TermIndex;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Read-only after load, so no locking discipline applies
    pub index: Arc<TermIndex>,
}

impl AppState {
    pub fn new(config: Config, index: TermIndex) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            index: Arc::new(index),
        }
    }
}

// Application state module
// Shared per-process state handed to every connection

use std::sync::Arc;

use super::types::Config;
use crate::resolver::AssetResolver;

/// Application state
pub struct AppState {
    pub config: Config,
    pub resolver: Arc<AssetResolver>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            resolver: Arc::new(AssetResolver::new(config.assets.clone())),
        }
    }
}

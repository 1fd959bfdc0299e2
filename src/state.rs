use std::sync::Arc;

use crate::config::Config;
use crate::mail::Notifier;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notifier: Arc<Notifier>,
}

impl AppState {
    pub fn new(config: Config, notifier: Notifier) -> Self {
        Self {
            config: Arc::new(config),
            notifier: Arc::new(notifier),
        }
    }
}

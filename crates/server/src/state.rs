use std::sync::Arc;

use service::errors::ServiceError;
use service::snowpark::{MemorySnowparkRepository, SnowparkService};

/// State shared by every handler. Cloning is cheap; all clones see the same store.
#[derive(Clone)]
pub struct AppState {
    pub snowparks: SnowparkService<MemorySnowparkRepository>,
}

impl AppState {
    /// Fresh, empty store.
    pub fn new() -> Self {
        Self { snowparks: SnowparkService::new(Arc::new(MemorySnowparkRepository::new())) }
    }

    /// Store holding the single demo record.
    pub fn seeded() -> Result<Self, ServiceError> {
        let state = Self::new();
        state.snowparks.seed()?;
        Ok(state)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

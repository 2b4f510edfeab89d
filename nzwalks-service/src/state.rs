//! Application state management

use std::sync::Arc;

use crate::{config::Config, repository::Store};

/// Application state shared across handlers
///
/// Generic over the storage backend so the same router serves the in-process
/// store and PostgreSQL. Cloning is cheap: the config sits behind an `Arc`
/// and both stores share their tables or pool between clones.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    config: Arc<Config>,
    store: S,
}

impl<S: Store> AppState<S> {
    /// Create a new AppState with the given configuration and store
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the storage collaborator
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    #[test]
    fn test_clones_share_config() {
        let state = AppState::new(Config::default(), MemoryStore::new());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.config, &clone.config));
        assert_eq!(clone.store().backend(), "memory");
    }
}

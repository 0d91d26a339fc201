//! Application state shared across handlers

use std::sync::Arc;

use crate::db::HealthStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn HealthStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> &dyn HealthStore {
        self.inner.store.as_ref()
    }
}

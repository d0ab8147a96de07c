use std::sync::Arc;

use atrium_store::ContentStore;

/// Shared request state: the one store handle constructed at startup.
///
/// Handlers see only the [`ContentStore`] trait; swapping the backend is a
/// construction-time decision, never a handler concern.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}

//! Application state

use crate::backend::BackendClient;
use std::sync::Arc;
use tera::Tera;

/// Application state shared across handlers
///
/// Handlers share no mutable state; everything here is read-only after
/// startup.
#[derive(Clone)]
pub struct AppState {
    /// Client for the fortune backend
    pub backend: BackendClient,

    /// Templates compiled at startup
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Create new application state
    pub fn new(backend: BackendClient, templates: Arc<Tera>) -> Self {
        Self { backend, templates }
    }
}

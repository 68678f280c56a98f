use std::sync::Arc;

use tokio::sync::Mutex;

use crate::letters::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single editing session. Every core call runs to completion under the lock.
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            session: Arc::new(Mutex::new(Session::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

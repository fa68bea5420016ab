use crate::config::Config;
use crate::session::SessionController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Sole owner of the swipe session; every transition goes through it.
    pub controller: SessionController,
    pub config: Config,
}

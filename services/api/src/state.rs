//! Application state shared across handlers

use crate::repositories::UserRepository;

/// Application state shared across handlers
///
/// A `None` repository means the service started without a database
/// connection (degraded mode); data-dependent handlers answer 503 while
/// the health and root endpoints keep working.
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Option<UserRepository>,
    pub environment: String,
}

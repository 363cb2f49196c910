//! Shared application state for axum handlers.

use std::sync::Arc;

use mistdebug_app::ports::DebugApi;
use mistdebug_app::services::console_service::ConsoleService;

/// Application state shared across all axum handlers.
///
/// Generic over the backend client to avoid dynamic dispatch. `Clone` is
/// implemented manually so the client itself does not need to be `Clone`.
pub struct AppState<A> {
    /// The console service every handler drives.
    pub console: Arc<ConsoleService<A>>,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            console: Arc::clone(&self.console),
        }
    }
}

impl<A> AppState<A>
where
    A: DebugApi + Send + Sync + 'static,
{
    /// Create the state from a fresh console service.
    pub fn new(console: ConsoleService<A>) -> Self {
        Self {
            console: Arc::new(console),
        }
    }

    /// Create the state from a console shared with other tasks.
    pub fn from_arc(console: Arc<ConsoleService<A>>) -> Self {
        Self { console }
    }
}

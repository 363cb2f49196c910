//! JSON endpoints.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use mistdebug_app::ports::DebugApi;
use mistdebug_app::services::snapshot::ConsoleSnapshot;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<A>() -> Router<AppState<A>>
where
    A: DebugApi + Send + Sync + 'static,
{
    Router::new().route("/console", get(console::<A>))
}

/// `GET /api/console` — the console state as JSON.
pub async fn console<A>(State(state): State<AppState<A>>) -> Json<ConsoleSnapshot>
where
    A: DebugApi + Send + Sync + 'static,
{
    Json(state.console.snapshot())
}

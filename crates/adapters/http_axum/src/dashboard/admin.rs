//! Seed and reset, the two global actions.

use axum::extract::{Form, State};
use axum::response::{Html, Redirect};

use mistdebug_app::ports::DebugApi;

use super::{ConfirmForm, ConfirmTemplate, render};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /seed` — ask before inserting sample data.
pub async fn confirm_seed<A>(State(_state): State<AppState<A>>) -> Result<Html<String>, ApiError>
where
    A: DebugApi + Send + Sync + 'static,
{
    render(&ConfirmTemplate {
        title: "Create seed data".to_string(),
        question: "Create seed data?".to_string(),
        action: "/seed".to_string(),
        confirm_label: "Create seed data",
        tone: "success",
    })
}

/// `POST /seed` — insert sample data, then reload every card (PRG).
pub async fn seed<A>(State(state): State<AppState<A>>, Form(form): Form<ConfirmForm>) -> Redirect
where
    A: DebugApi + Send + Sync + 'static,
{
    let _ = state.console.seed(form.confirmation()).await;
    Redirect::to("/")
}

/// `GET /reset` — ask before wiping the database.
pub async fn confirm_reset<A>(State(_state): State<AppState<A>>) -> Result<Html<String>, ApiError>
where
    A: DebugApi + Send + Sync + 'static,
{
    render(&ConfirmTemplate {
        title: "Reset database".to_string(),
        question: "Reset the database? All data will be deleted.".to_string(),
        action: "/reset".to_string(),
        confirm_label: "Reset database",
        tone: "danger",
    })
}

/// `POST /reset` — wipe every table, then reload every card (PRG).
pub async fn reset<A>(State(state): State<AppState<A>>, Form(form): Form<ConfirmForm>) -> Redirect
where
    A: DebugApi + Send + Sync + 'static,
{
    let _ = state.console.reset(form.confirmation()).await;
    Redirect::to("/")
}

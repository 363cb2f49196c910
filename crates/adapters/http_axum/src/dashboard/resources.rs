//! Per-resource actions: refresh, create, clear form, delete all.

use std::collections::HashMap;

use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};

use mistdebug_app::ports::DebugApi;
use mistdebug_domain::draft::Draft;
use mistdebug_domain::resource::ResourceKind;

use super::{ConfirmForm, ConfirmTemplate, render};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /resources/{kind}/refresh` — reload one card (PRG).
pub async fn refresh<A>(
    State(state): State<AppState<A>>,
    Path(kind): Path<String>,
) -> Result<Redirect, ApiError>
where
    A: DebugApi + Send + Sync + 'static,
{
    let kind: ResourceKind = kind.parse()?;
    let _ = state.console.load(kind).await;
    Ok(Redirect::to("/"))
}

/// `POST /resources/{kind}/create` — submit the creation form (PRG).
pub async fn create<A>(
    State(state): State<AppState<A>>,
    Path(kind): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect, ApiError>
where
    A: DebugApi + Send + Sync + 'static,
{
    let kind: ResourceKind = kind.parse()?;
    let draft: Draft = fields.into_iter().collect();
    let _ = state.console.create(kind, draft).await;
    Ok(Redirect::to("/"))
}

/// `POST /resources/{kind}/clear` — empty the creation form (PRG).
pub async fn clear<A>(
    State(state): State<AppState<A>>,
    Path(kind): Path<String>,
) -> Result<Redirect, ApiError>
where
    A: DebugApi + Send + Sync + 'static,
{
    let kind: ResourceKind = kind.parse()?;
    state.console.clear_draft(kind);
    Ok(Redirect::to("/"))
}

/// `GET /resources/{kind}/delete` — ask before deleting every record.
pub async fn confirm_delete<A>(
    State(_state): State<AppState<A>>,
    Path(kind): Path<String>,
) -> Result<Html<String>, ApiError>
where
    A: DebugApi + Send + Sync + 'static,
{
    let kind: ResourceKind = kind.parse()?;
    render(&ConfirmTemplate {
        title: format!("Delete all {}", kind.title()),
        question: format!("Delete all {kind}? This cannot be undone."),
        action: format!("/resources/{kind}/delete"),
        confirm_label: "Delete all",
        tone: "danger",
    })
}

/// `POST /resources/{kind}/delete` — delete every record when confirmed (PRG).
pub async fn delete_all<A>(
    State(state): State<AppState<A>>,
    Path(kind): Path<String>,
    Form(form): Form<ConfirmForm>,
) -> Result<Redirect, ApiError>
where
    A: DebugApi + Send + Sync + 'static,
{
    let kind: ResourceKind = kind.parse()?;
    let _ = state.console.delete_all(kind, form.confirmation()).await;
    Ok(Redirect::to("/"))
}

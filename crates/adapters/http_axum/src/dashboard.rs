//! Server-side rendered HTML console (no JavaScript).
//!
//! `GET /` renders every resource card. Each action is a POST that calls the
//! console service and redirects back to `/` (PRG). Delete-all, seed and
//! reset first render a confirmation page whose form posts `confirm=yes`.

#[allow(clippy::missing_errors_doc)]
pub mod admin;
#[allow(clippy::missing_errors_doc)]
pub mod console;
#[allow(clippy::missing_errors_doc)]
pub mod resources;

use askama::Template;
use axum::Router;
use axum::response::Html;
use axum::routing::{get, post};
use serde::Deserialize;

use mistdebug_app::ports::DebugApi;
use mistdebug_app::services::console_service::Confirmation;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the console sub-router.
pub fn routes<A>() -> Router<AppState<A>>
where
    A: DebugApi + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(console::index::<A>))
        .route("/resources/{kind}/refresh", post(resources::refresh::<A>))
        .route("/resources/{kind}/create", post(resources::create::<A>))
        .route("/resources/{kind}/clear", post(resources::clear::<A>))
        .route(
            "/resources/{kind}/delete",
            get(resources::confirm_delete::<A>).post(resources::delete_all::<A>),
        )
        .route(
            "/seed",
            get(admin::confirm_seed::<A>).post(admin::seed::<A>),
        )
        .route(
            "/reset",
            get(admin::confirm_reset::<A>).post(admin::reset::<A>),
        )
}

/// Confirmation page for a destructive action.
#[derive(Template)]
#[template(path = "confirm.html")]
pub struct ConfirmTemplate {
    pub title: String,
    pub question: String,
    /// Form target; receives `confirm=yes`.
    pub action: String,
    pub confirm_label: &'static str,
    /// CSS modifier of the confirm button.
    pub tone: &'static str,
}

/// Body of a confirmation form submission.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub confirm: String,
}

impl ConfirmForm {
    #[must_use]
    pub fn confirmation(&self) -> Confirmation {
        Confirmation::from(self.confirm == "yes")
    }
}

/// Render `template` into an HTML response.
pub(crate) fn render<T: Template>(template: &T) -> Result<Html<String>, ApiError> {
    Ok(Html(template.render()?))
}

//! # mistdebug-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered console** that works with **zero
//!   JavaScript**: one card per resource kind, creation forms, delete-all,
//!   refresh, seed and reset
//! - Serve a JSON snapshot of the console state at `/api/console`
//! - Map HTTP requests into [`ConsoleService`](mistdebug_app::services::console_service::ConsoleService)
//!   calls (driving adapter)
//!
//! ## No-JS console approach
//! - Every page is rendered server-side as complete HTML (askama templates).
//! - Actions are `<form>` elements that POST back to the server and redirect
//!   to `/` (PRG pattern).
//! - Destructive actions go through a confirmation page; only a POST carrying
//!   `confirm=yes` reaches the backend.
//! - While a notification is visible the page carries a
//!   `<meta http-equiv="refresh">` timed to its expiry, so it disappears on
//!   its own.
//!
//! ## Dependency rule
//! Depends on `mistdebug-app` (port trait and service) and `mistdebug-domain`
//! (types rendered in views). Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

//! # mistdebug-adapter-backend-reqwest
//!
//! Driven adapter for the debug backend, built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`DebugApi`](mistdebug_app::ports::DebugApi) port
//! - Map every resource kind onto `/debug/{kind}` (list / create / delete-all)
//!   plus `/debug/seed` and `/debug/reset`
//! - Extract the operator-facing message from non-success responses
//!
//! One HTTP request per port call. No retry, no caching, no timeout.
//!
//! ## Dependency rule
//! Depends on `mistdebug-app` (port trait) and `mistdebug-domain` (records and
//! create requests). reqwest types never leave this crate.

mod client;
mod config;
mod error;
mod http;

pub use client::ReqwestDebugApi;
pub use config::{BackendConfig, DEFAULT_BASE_URL};
pub use error::BackendError;

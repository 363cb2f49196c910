//! # mistdebug-app
//!
//! Application layer — the console use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the backend adapter must implement:
//!   - `DebugApi` — list / create / delete-all per resource, seed, reset
//! - Define the **driving use-case**:
//!   - `ConsoleService` — per-resource records, busy flags and form drafts,
//!     plus the transient operator notification
//! - Convert every backend failure into a notification at the action
//!   boundary
//!
//! ## Dependency rule
//! Depends on `mistdebug-domain` only (plus `tokio` for joining concurrent loads).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

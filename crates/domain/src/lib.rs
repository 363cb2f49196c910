//! # mistdebug-domain
//!
//! Pure domain model for the Mist ED backend debug console.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the six **records** served by the debug backend
//!   (organizations, users, rooms, devices, subjects, lessons)
//! - Define **resource kinds** with their labels, form fields and table columns
//! - Define **drafts** (creation form contents) and their conversion into
//!   backend **create requests**
//! - Define transient **notifications** shown to the operator
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod draft;
pub mod lesson;
pub mod notification;
pub mod organization;
pub mod record;
pub mod resource;
pub mod room;
pub mod subject;
pub mod user;

//! Product catalog HTTP service backed by PostgreSQL.
//!
//! The handler layer validates request shape, invokes one named store
//! operation per request, and maps the result to an HTTP response. Audit
//! rows are written by the store's procedures, never by this crate.

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod state;

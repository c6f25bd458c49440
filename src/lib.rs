//! HTTP CRUD service for users (name and date of birth) backed by Postgres.
//!
//! `core` holds the domain, the use case and its port; `adapter` holds the
//! storage implementations, the axum surface, configuration and logging.

pub mod adapter;
pub mod core;
pub mod error;

//! Arkiv - document archive management system.
//!
//! Stores documents inside named archives and serves a filterable,
//! sortable, paginated listing through a JSON API and a CLI.

pub mod cli;
pub mod config;
pub mod models;
pub mod query;
pub mod repository;
pub mod server;
pub mod view;

//! Core data and query logic for the Folio portfolio application.
//! This crate is the single source of truth for catalog invariants; the
//! presentation layer is a pure consumer of its API.

pub mod catalog;
pub mod logging;
pub mod markdown;
pub mod model;
pub mod query;
pub mod service;

pub use catalog::{CatalogError, ProjectStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::page::Page;
pub use model::project::{Category, Project, ProjectId, ProjectValidationError};
pub use query::{
    apply_filters, filter_by_category, search, sort_projects, ProjectFilters, SortOrder,
};
pub use service::{BuiltinSource, LoadError, ProjectService, ProjectSource, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

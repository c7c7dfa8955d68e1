//! Asynchronous data-access facade.
//!
//! # Responsibility
//! - Stand in for a network API boundary the presentation layer codes
//!   against, while the data is actually in-process.
//! - Memoize the catalog after the first successful load.
//!
//! # Invariants
//! - At most one underlying load runs, even under concurrent first access.
//! - A failed load is never cached; re-invocation retries the source.

pub mod project_service;

pub use project_service::{
    BuiltinSource, LoadError, ProjectService, ProjectSource, ServiceResult,
};

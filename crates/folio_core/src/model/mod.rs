//! Domain model for the portfolio catalog.
//!
//! # Responsibility
//! - Define the canonical `Project` record consumed by the query pipeline
//!   and the presentation layer.
//! - Keep serialization compatible with the external JSON field naming
//!   (`githubUrl`, `readingTime`, ...).
//!
//! # Invariants
//! - Every project is identified by a stable positive `ProjectId`.
//! - `category` is always one of the closed set `{web, mobile, design, blog}`.

pub mod page;
pub mod project;

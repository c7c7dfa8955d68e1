//! Pure filter/sort/search pipeline over project sequences.
//!
//! # Responsibility
//! - Define the `ProjectFilters` value object owned by callers.
//! - Apply search, category filtering and sorting as pure functions.
//!
//! # Invariants
//! - Stage order is fixed: search, then category, then sort.
//! - Inputs are never mutated; every stage returns a fresh sequence.
//! - No stage has an error path; malformed dates get a stable fallback
//!   position instead of failing.

pub mod pipeline;

pub use pipeline::{
    apply_filters, filter_by_category, search, sort_projects, ProjectFilters, SortOrder,
};

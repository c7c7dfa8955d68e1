//! Immutable project catalog.
//!
//! # Responsibility
//! - Own the canonical project list and answer id/category lookups.
//! - Enforce record validation and id uniqueness once, at construction.
//!
//! # Invariants
//! - The list is read-only after `ProjectStore::new` succeeds.
//! - Lookups never mutate; filtered views are fresh sequences.
//! - "Not found" is an absent value, never an error.

pub mod data;

use crate::model::project::{Category, Project, ProjectId, ProjectValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Construction error for the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record failed authoring-time validation.
    Validation(ProjectValidationError),
    /// Two records share the same id.
    DuplicateId(ProjectId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<ProjectValidationError> for CatalogError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Immutable store over the canonical project list.
///
/// Construction is the only write path; every accessor afterwards is a
/// read over the same backing sequence, so concurrent readers need no
/// locking.
#[derive(Debug)]
pub struct ProjectStore {
    projects: Vec<Project>,
    categories: Vec<Category>,
}

impl ProjectStore {
    /// Builds a store, validating every record and rejecting duplicate ids.
    ///
    /// The distinct category list is computed here in order of first
    /// occurrence, so UI filter chips render in a stable order.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        let mut categories = Vec::new();

        for project in &projects {
            project.validate()?;
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
            if !categories.contains(&project.category) {
                categories.push(project.category);
            }
        }

        Ok(Self {
            projects,
            categories,
        })
    }

    /// Builds the store from the built-in dataset.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::builtin_projects())
    }

    /// Full list in authoring order.
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Looks up one project by id. Absent ids (including 0) are `None`.
    pub fn get_by_id(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Projects whose category string equals `category` exactly, in
    /// original relative order. An empty filter returns everything.
    pub fn get_by_category(&self, category: &str) -> Vec<&Project> {
        if category.is_empty() {
            return self.projects.iter().collect();
        }
        self.projects
            .iter()
            .filter(|project| project.category.as_str() == category)
            .collect()
    }

    /// Distinct categories in order of first occurrence.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

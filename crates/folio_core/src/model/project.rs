//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical portfolio entry shared by catalog, query and
//!   service layers.
//! - Validate authoring-time invariants before a record enters the store.
//!
//! # Invariants
//! - `id` is positive and never reused for another project.
//! - `title` and `description` are non-empty.
//! - Optional link fields signal presentation affordances only; their
//!   absence is meaningful (no repo link, no live demo).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for every portfolio entry.
///
/// Assigned at data-authoring time, never generated at runtime. Kept as a
/// type alias to make semantic intent explicit in signatures.
pub type ProjectId = u32;

/// Closed category set for portfolio entries.
///
/// The string forms are part of the external contract; filtering compares
/// against them case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Web application or site.
    Web,
    /// Mobile application.
    Mobile,
    /// Design work (branding, UI systems).
    Design,
    /// Long-form blog article.
    Blog,
}

impl Category {
    /// Returns the stable external string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Design => "design",
            Self::Blog => "blog",
        }
    }

    /// Parses the external string form. Unknown values are `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "web" => Some(Self::Web),
            "mobile" => Some(Self::Mobile),
            "design" => Some(Self::Design),
            "blog" => Some(Self::Blog),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation error for authoring-time project invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// `id` must be positive; zero is reserved as "no such project".
    ZeroId,
    /// `title` must be non-empty.
    EmptyTitle(ProjectId),
    /// `description` must be non-empty.
    EmptyDescription(ProjectId),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "project id must be positive"),
            Self::EmptyTitle(id) => write!(f, "project {id} has an empty title"),
            Self::EmptyDescription(id) => write!(f, "project {id} has an empty description"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Canonical portfolio entry.
///
/// One record shape backs every card and detail view. Fields the query
/// pipeline never reads (`image`, `reading_time`, `featured`, links) ride
/// along untouched for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable positive ID used for detail-view lookup.
    pub id: ProjectId,
    /// Display title; also a search target.
    pub title: String,
    /// Card summary; also a search target.
    pub description: String,
    /// Static asset URL. Never validated or fetched by the core.
    pub image: String,
    /// Ordered display labels; duplicates allowed; each is a search target.
    pub tags: Vec<String>,
    /// `YYYY-MM-DD` calendar date, used only for chronological ordering.
    pub date: String,
    /// Closed-set category used for exact filtering.
    pub category: Category,
    /// Source repository link. `None` means no repo affordance is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Live demo link. `None` means no external demo to display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Long-form markdown body for the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Estimated reading time in minutes. Ignored by the query pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
    /// Featured flag for hero placement. Ignored by the query pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Project {
    /// Creates a project with the required fields; optional metadata starts
    /// absent and is filled in by the authoring site.
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image: String::new(),
            tags: Vec::new(),
            date: date.into(),
            category,
            github_url: None,
            live_url: None,
            content: None,
            reading_time: None,
            featured: None,
        }
    }

    /// Checks authoring-time invariants.
    ///
    /// # Errors
    /// - `ZeroId` when `id == 0`.
    /// - `EmptyTitle` / `EmptyDescription` when the respective field is
    ///   blank after trimming.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id == 0 {
            return Err(ProjectValidationError::ZeroId);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle(self.id));
        }
        if self.description.trim().is_empty() {
            return Err(ProjectValidationError::EmptyDescription(self.id));
        }
        Ok(())
    }
}

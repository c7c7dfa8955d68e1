//! Project service facade over the catalog and query pipeline.
//!
//! # Responsibility
//! - Expose catalog reads and the query pipeline behind async operations.
//! - Load the project list once per service instance and keep it for the
//!   rest of the process lifetime.
//!
//! # Invariants
//! - Concurrent first callers await the same in-flight load and observe
//!   the same store; the source runs at most once per successful init.
//! - Lookup misses are `None`/empty, never errors; the single error kind
//!   is `LoadError`.
//! - Simulated latency defaults to zero and exists only so the
//!   presentation layer can exercise its loading states.

use crate::catalog::{data, CatalogError, ProjectStore};
use crate::model::project::{Project, ProjectId, ProjectValidationError};
use crate::query::{apply_filters, filter_by_category, search, ProjectFilters};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Result type for facade operations.
pub type ServiceResult<T> = Result<T, LoadError>;

/// The one meaningful failure the facade can surface: the project list
/// could not be materialized. Scoped to a single load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A record failed authoring-time validation.
    Validation(ProjectValidationError),
    /// The source produced two records with the same id.
    DuplicateId(ProjectId),
    /// The source itself failed to produce a list.
    Source(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id: {id}"),
            Self::Source(message) => write!(f, "project source failed: {message}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Source(_) => None,
        }
    }
}

impl From<CatalogError> for LoadError {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::Validation(err) => Self::Validation(err),
            CatalogError::DuplicateId(id) => Self::DuplicateId(id),
        }
    }
}

/// Supplier of the raw project list, injected at facade construction.
///
/// Keeps the facade testable with fault-injecting sources while production
/// wiring uses [`BuiltinSource`].
pub trait ProjectSource: Send + Sync {
    fn load(&self) -> Result<Vec<Project>, LoadError>;
}

/// Production source backed by the built-in dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl ProjectSource for BuiltinSource {
    fn load(&self) -> Result<Vec<Project>, LoadError> {
        Ok(data::builtin_projects())
    }
}

/// Async facade over the catalog and query pipeline.
///
/// Owned by the presentation layer's composition root; one instance per
/// process is expected but not enforced.
pub struct ProjectService<S: ProjectSource> {
    source: S,
    store: OnceCell<Arc<ProjectStore>>,
    latency: Duration,
}

impl ProjectService<BuiltinSource> {
    /// Facade over the built-in dataset with no simulated latency.
    pub fn builtin() -> Self {
        Self::new(BuiltinSource)
    }
}

impl<S: ProjectSource> ProjectService<S> {
    /// Creates a facade over the given source with no simulated latency.
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: OnceCell::new(),
            latency: Duration::ZERO,
        }
    }

    /// Adds an artificial per-operation delay so loading states render.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Full project list in authoring order.
    pub async fn fetch_all(&self) -> ServiceResult<Vec<Project>> {
        self.simulate_latency().await;
        Ok(self.store().await?.all().to_vec())
    }

    /// One project by id. Absent ids (including 0) resolve to `None`.
    pub async fn fetch_by_id(&self, id: ProjectId) -> ServiceResult<Option<Project>> {
        self.simulate_latency().await;
        Ok(self.store().await?.get_by_id(id).cloned())
    }

    /// Free-text search over title, description and tags.
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<Project>> {
        self.simulate_latency().await;
        Ok(search(self.store().await?.all(), query))
    }

    /// Exact-category subset; empty category resolves to the full list.
    pub async fn filter_by_category(&self, category: &str) -> ServiceResult<Vec<Project>> {
        self.simulate_latency().await;
        Ok(filter_by_category(self.store().await?.all(), category))
    }

    /// Distinct category strings in first-occurrence order.
    pub async fn list_categories(&self) -> ServiceResult<Vec<String>> {
        self.simulate_latency().await;
        Ok(self
            .store()
            .await?
            .categories()
            .iter()
            .map(|category| category.as_str().to_string())
            .collect())
    }

    /// Full list piped through the search/category/sort pipeline.
    pub async fn query_filtered(&self, filters: &ProjectFilters) -> ServiceResult<Vec<Project>> {
        self.simulate_latency().await;
        Ok(apply_filters(self.store().await?.all(), filters))
    }

    /// Memoized store access. `OnceCell::get_or_try_init` serializes
    /// concurrent first callers onto one in-flight load and does not cache
    /// failures, which is exactly the manual-retry contract we want.
    async fn store(&self) -> ServiceResult<&Arc<ProjectStore>> {
        self.store
            .get_or_try_init(|| async {
                let projects = self.source.load().inspect_err(|err| {
                    warn!("event=catalog_load module=service status=error reason={err}");
                })?;
                let store = ProjectStore::new(projects).inspect_err(|err| {
                    warn!("event=catalog_load module=service status=error reason={err}");
                })?;
                info!(
                    "event=catalog_load module=service status=ok count={}",
                    store.len()
                );
                Ok(Arc::new(store))
            })
            .await
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

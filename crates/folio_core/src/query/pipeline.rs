//! Search, category and sort stages.
//!
//! # Responsibility
//! - Match projects against free-text queries over title, description and
//!   tags.
//! - Restrict by exact category and order the surviving subset.
//!
//! # Invariants
//! - Search matching is case-insensitive substring containment; no
//!   tokenization, ranking or fuzziness.
//! - Category matching is exact and case-sensitive (closed enum strings).
//! - Sorting is stable; ties keep original relative order.
//! - Unparseable dates sort as minimal, deterministically.

use crate::model::project::Project;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Sort modes for the result sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending by date. The default, and the fallback for any
    /// unrecognized mode string.
    #[default]
    Newest,
    /// Ascending by date.
    Oldest,
    /// Ascending by title, compared the way a reader expects rather than
    /// by raw byte order.
    Title,
}

impl SortOrder {
    /// Parses a mode string. Total: unknown values map to `Newest`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "oldest" => Self::Oldest,
            "title" => Self::Title,
            _ => Self::Newest,
        }
    }

    /// Returns the stable external string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
        }
    }
}

/// Filter state owned by the caller and passed in on every query.
///
/// The core keeps no filter state of its own. An empty `search` or
/// `category` disables the respective stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilters {
    /// Free-text query; empty disables the search stage.
    #[serde(default)]
    pub search: String,
    /// Exact category string; empty disables the category stage.
    #[serde(default)]
    pub category: String,
    /// Sort mode applied to the filtered subset.
    #[serde(default, rename = "sortBy")]
    pub sort_by: SortOrder,
}

/// Retains projects matching `query` case-insensitively in title,
/// description or any tag. Empty query retains everything.
pub fn search(projects: &[Project], query: &str) -> Vec<Project> {
    if query.is_empty() {
        return projects.to_vec();
    }

    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|project| matches_search(project, &needle))
        .cloned()
        .collect()
}

/// Retains projects whose category string equals `category` exactly.
/// Empty category retains everything.
pub fn filter_by_category(projects: &[Project], category: &str) -> Vec<Project> {
    if category.is_empty() {
        return projects.to_vec();
    }

    projects
        .iter()
        .filter(|project| project.category.as_str() == category)
        .cloned()
        .collect()
}

/// Returns a sorted copy of `projects` under the given order.
///
/// Sorting is stable, so equal keys keep their original relative order.
/// Projects with unparseable dates sort as older than every valid date.
pub fn sort_projects(projects: &[Project], order: SortOrder) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    match order {
        SortOrder::Newest => {
            sorted.sort_by_cached_key(|project| Reverse(parse_date(&project.date)));
        }
        SortOrder::Oldest => {
            sorted.sort_by_cached_key(|project| parse_date(&project.date));
        }
        SortOrder::Title => {
            sorted.sort_by_cached_key(|project| {
                (project.title.to_lowercase(), project.title.clone())
            });
        }
    }
    sorted
}

/// Full pipeline: search, then category, then sort.
///
/// The order is load-bearing: sorting is defined over the filtered subset,
/// not the full list.
pub fn apply_filters(projects: &[Project], filters: &ProjectFilters) -> Vec<Project> {
    let searched = search(projects, &filters.search);
    let narrowed = filter_by_category(&searched, &filters.category);
    sort_projects(&narrowed, filters.sort_by)
}

fn matches_search(project: &Project, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// `None` for anything that is not a valid `YYYY-MM-DD` date. `Option`
/// ordering then places malformed dates before every valid one.
fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_date, sort_projects, SortOrder};
    use crate::model::project::{Category, Project};

    #[test]
    fn parse_date_accepts_calendar_dates_only() {
        assert!(parse_date("2024-01-15").is_some());
        assert!(parse_date("2024-02-30").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn sort_order_parse_is_total() {
        assert_eq!(SortOrder::parse("oldest"), SortOrder::Oldest);
        assert_eq!(SortOrder::parse(" Title "), SortOrder::Title);
        assert_eq!(SortOrder::parse("newest"), SortOrder::Newest);
        assert_eq!(SortOrder::parse("by-rating"), SortOrder::Newest);
        assert_eq!(SortOrder::parse(""), SortOrder::Newest);
    }

    #[test]
    fn malformed_dates_sort_as_minimal() {
        let projects = vec![
            Project::new(1, "Valid", "d", "2024-03-01", Category::Web),
            Project::new(2, "Broken", "d", "not-a-date", Category::Web),
            Project::new(3, "Older", "d", "2023-01-01", Category::Web),
        ];

        let oldest = sort_projects(&projects, SortOrder::Oldest);
        let ids: Vec<_> = oldest.iter().map(|project| project.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let newest = sort_projects(&projects, SortOrder::Newest);
        let ids: Vec<_> = newest.iter().map(|project| project.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn title_sort_ignores_case() {
        let projects = vec![
            Project::new(1, "beta", "d", "2024-01-01", Category::Web),
            Project::new(2, "Alpha", "d", "2024-01-01", Category::Web),
            Project::new(3, "ALMOND", "d", "2024-01-01", Category::Web),
        ];

        let sorted = sort_projects(&projects, SortOrder::Title);
        let titles: Vec<_> = sorted.iter().map(|project| project.title.as_str()).collect();
        assert_eq!(titles, vec!["ALMOND", "Alpha", "beta"]);
    }
}

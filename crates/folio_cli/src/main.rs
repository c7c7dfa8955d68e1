//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use folio_core::{apply_filters, ProjectFilters, ProjectStore, SortOrder};

fn main() {
    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    let store = match ProjectStore::builtin() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("catalog error: {err}");
            std::process::exit(1);
        }
    };

    let categories: Vec<&str> = store
        .categories()
        .iter()
        .map(|category| category.as_str())
        .collect();
    println!("catalog projects={}", store.len());
    println!("catalog categories={}", categories.join(","));

    let filters = ProjectFilters {
        sort_by: SortOrder::Title,
        ..ProjectFilters::default()
    };
    for project in apply_filters(store.all(), &filters) {
        println!(
            "{} [{}] {} ({})",
            project.id, project.category, project.title, project.date
        );
    }
}

use folio_core::{
    apply_filters, filter_by_category, search, sort_projects, Category, Project, ProjectFilters,
    SortOrder,
};

fn fixture() -> Vec<Project> {
    let mut ecommerce = Project::new(
        1,
        "E-Commerce Platform",
        "A modern storefront with payments",
        "2024-01-15",
        Category::Web,
    );
    ecommerce.tags = vec!["React".to_string(), "Stripe".to_string()];

    let mut task_app = Project::new(
        2,
        "Task Management Mobile App",
        "Offline-first task tracking",
        "2023-12-10",
        Category::Mobile,
    );
    task_app.tags = vec!["React Native".to_string(), "Firebase".to_string()];

    let mut grid_post = Project::new(
        3,
        "Understanding Modern CSS Grid",
        "A layout deep dive",
        "2024-02-20",
        Category::Blog,
    );
    grid_post.tags = vec!["CSS".to_string(), "Frontend".to_string()];

    vec![ecommerce, task_app, grid_post]
}

#[test]
fn search_matches_title_description_and_tags_case_insensitively() {
    let projects = fixture();

    let by_title: Vec<_> = search(&projects, "commerce")
        .iter()
        .map(|project| project.id)
        .collect();
    assert_eq!(by_title, vec![1]);

    let by_description: Vec<_> = search(&projects, "OFFLINE")
        .iter()
        .map(|project| project.id)
        .collect();
    assert_eq!(by_description, vec![2]);

    let by_tag: Vec<_> = search(&projects, "react")
        .iter()
        .map(|project| project.id)
        .collect();
    assert_eq!(by_tag, vec![1, 2]);
}

#[test]
fn empty_search_is_a_no_op() {
    let projects = fixture();
    assert_eq!(search(&projects, ""), projects);
}

#[test]
fn search_is_idempotent() {
    let projects = fixture();

    let once = search(&projects, "react");
    let twice = search(&once, "react");
    assert_eq!(once, twice);
}

#[test]
fn category_filter_is_monotone_and_exact() {
    let projects = fixture();

    for category in ["web", "mobile", "design", "blog", "nope", ""] {
        let filtered = filter_by_category(&projects, category);
        assert!(filtered.len() <= projects.len());
        if !category.is_empty() {
            assert!(filtered
                .iter()
                .all(|project| project.category.as_str() == category));
        }
    }
}

#[test]
fn newest_sort_yields_non_increasing_dates() {
    let sorted = sort_projects(&fixture(), SortOrder::Newest);
    for pair in sorted.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
}

#[test]
fn oldest_sort_yields_non_decreasing_dates() {
    let sorted = sort_projects(&fixture(), SortOrder::Oldest);
    for pair in sorted.windows(2) {
        assert!(pair[0].date <= pair[1].date);
    }
}

#[test]
fn sorting_is_stable_for_equal_keys() {
    let projects = vec![
        Project::new(10, "First", "d", "2024-05-05", Category::Web),
        Project::new(11, "Second", "d", "2024-05-05", Category::Web),
        Project::new(12, "Third", "d", "2024-05-05", Category::Web),
    ];

    for order in [SortOrder::Newest, SortOrder::Oldest] {
        let ids: Vec<_> = sort_projects(&projects, order)
            .iter()
            .map(|project| project.id)
            .collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }
}

#[test]
fn stage_order_restricts_search_to_the_category_pool() {
    // Both categories match "app"; filtering must never leak the other
    // category into the result.
    let mut web = Project::new(1, "Web App", "An app for the web", "2024-01-01", Category::Web);
    web.tags = vec!["app".to_string()];
    let mut mobile = Project::new(2, "Mobile App", "An app for phones", "2024-02-01", Category::Mobile);
    mobile.tags = vec!["app".to_string()];
    let projects = vec![web, mobile];

    let filters = ProjectFilters {
        search: "app".to_string(),
        category: "web".to_string(),
        sort_by: SortOrder::Newest,
    };

    let result = apply_filters(&projects, &filters);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].category, Category::Web);
}

#[test]
fn pipeline_scenario_matches_contract() {
    let projects = vec![
        Project::new(1, "Zebra", "striped", "2024-01-01", Category::Web),
        Project::new(2, "Apple", "fruit", "2024-06-01", Category::Blog),
    ];

    let by_title = apply_filters(
        &projects,
        &ProjectFilters {
            sort_by: SortOrder::Title,
            ..ProjectFilters::default()
        },
    );
    let ids: Vec<_> = by_title.iter().map(|project| project.id).collect();
    assert_eq!(ids, vec![2, 1]);

    let by_newest = apply_filters(
        &projects,
        &ProjectFilters {
            sort_by: SortOrder::Newest,
            ..ProjectFilters::default()
        },
    );
    let ids: Vec<_> = by_newest.iter().map(|project| project.id).collect();
    assert_eq!(ids, vec![2, 1]);

    let web_only = apply_filters(
        &projects,
        &ProjectFilters {
            category: "web".to_string(),
            ..ProjectFilters::default()
        },
    );
    let ids: Vec<_> = web_only.iter().map(|project| project.id).collect();
    assert_eq!(ids, vec![1]);

    let app_search = apply_filters(
        &projects,
        &ProjectFilters {
            search: "app".to_string(),
            ..ProjectFilters::default()
        },
    );
    let ids: Vec<_> = app_search.iter().map(|project| project.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn pipeline_never_mutates_its_input() {
    let projects = fixture();
    let snapshot = projects.clone();

    let filters = ProjectFilters {
        search: "a".to_string(),
        category: "web".to_string(),
        sort_by: SortOrder::Title,
    };
    let _ = apply_filters(&projects, &filters);

    assert_eq!(projects, snapshot);
}

#[test]
fn filters_deserialize_external_shape() {
    let filters: ProjectFilters =
        serde_json::from_str(r#"{"search":"grid","category":"blog","sortBy":"oldest"}"#).unwrap();
    assert_eq!(filters.search, "grid");
    assert_eq!(filters.category, "blog");
    assert_eq!(filters.sort_by, SortOrder::Oldest);

    let defaults: ProjectFilters = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, ProjectFilters::default());
    assert_eq!(defaults.sort_by, SortOrder::Newest);
}

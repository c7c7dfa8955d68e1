//! Built-in portfolio dataset.
//!
//! # Responsibility
//! - Author the static project list the application ships with.
//! - Fill derived metadata (reading time) for entries that carry a
//!   markdown body but no authored estimate.
//!
//! # Invariants
//! - Ids are unique and assigned here, at authoring time.
//! - The dataset is constructed once and never mutated afterwards.

use crate::markdown::estimate_reading_time;
use crate::model::project::{Category, Project};
use once_cell::sync::Lazy;

static BUILTIN: Lazy<Vec<Project>> = Lazy::new(|| {
    let mut projects = author_projects();
    for project in &mut projects {
        if project.reading_time.is_none() {
            if let Some(content) = &project.content {
                project.reading_time = Some(estimate_reading_time(content));
            }
        }
    }
    projects
});

/// Clones the built-in project list out of the lazily built dataset.
pub fn builtin_projects() -> Vec<Project> {
    BUILTIN.clone()
}

fn author_projects() -> Vec<Project> {
    let mut ecommerce = Project::new(
        1,
        "E-Commerce Platform",
        "A modern e-commerce platform built with React, TypeScript, and Stripe \
         integration. Features include user authentication, shopping cart, and \
         payment processing.",
        "2024-01-15",
        Category::Web,
    );
    ecommerce.image =
        "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop".into();
    ecommerce.tags = tags(&["React", "TypeScript", "Stripe", "Node.js"]);
    ecommerce.github_url = Some("https://github.com".into());
    ecommerce.live_url = Some("https://example.com".into());
    ecommerce.content = Some(
        r#"# E-Commerce Platform

A comprehensive e-commerce solution built with modern web technologies.

## Features

- **User Authentication**: Secure login and registration system
- **Product Catalog**: Browse and search products with advanced filtering
- **Shopping Cart**: Add, remove, and modify cart items
- **Payment Processing**: Secure payments with Stripe integration
- **Admin Dashboard**: Manage products, users, and orders

## Tech Stack

- **Frontend**: React, TypeScript, Tailwind CSS
- **Backend**: Node.js, Express
- **Database**: PostgreSQL
- **Payment**: Stripe API

## Challenges & Solutions

1. **State Management**: Redux Toolkit for complex state
2. **Performance**: Memoization on hot render paths
3. **Payment Integration**: Handled edge cases across payment scenarios

The result is a robust, scalable platform that can handle real-world
traffic and transactions.
"#
        .to_string(),
    );

    let mut task_app = Project::new(
        2,
        "Task Management Mobile App",
        "A React Native mobile application for task management with offline \
         support, push notifications, and team collaboration features.",
        "2023-12-10",
        Category::Mobile,
    );
    task_app.image =
        "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=800&h=600&fit=crop".into();
    task_app.tags = tags(&["React Native", "Redux", "Firebase", "Expo"]);
    task_app.github_url = Some("https://github.com".into());
    task_app.content = Some(
        r#"# Task Management Mobile App

A powerful mobile application for personal and team task management.

## Key Features

- **Cross-Platform**: Works on both iOS and Android
- **Offline Support**: Works without internet connection
- **Real-time Sync**: Instant updates across all devices
- **Team Collaboration**: Share tasks and projects with team members
- **Push Notifications**: Never miss a deadline

## Technical Implementation

Built with React Native and Expo: Redux with Redux Persist for offline
capabilities, Firebase for the real-time database and authentication, and
Expo Notifications for cross-platform push delivery.
"#
        .to_string(),
    );

    let mut css_grid = Project::new(
        3,
        "Understanding Modern CSS Grid",
        "A comprehensive guide to CSS Grid layout system, covering everything \
         from basic concepts to advanced techniques with practical examples.",
        "2024-02-20",
        Category::Blog,
    );
    css_grid.image =
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=600&fit=crop".into();
    css_grid.tags = tags(&["CSS", "Web Design", "Frontend", "Tutorial"]);
    css_grid.content = Some(
        r#"# Understanding Modern CSS Grid

CSS Grid has revolutionized how we approach web layouts.

## Why CSS Grid Matters

Grid is the first CSS module created specifically for two-dimensional
layout, controlling rows and columns at the same time.

## Core Concepts

- **Grid container**: the element with `display: grid`
- **Grid tracks**: the rows and columns defined by the template
- **Grid areas**: named regions items can be placed into

## Practical Techniques

Use `repeat(auto-fit, minmax(250px, 1fr))` for responsive card grids
without media queries, and named areas for readable page scaffolds.

## Conclusion

Start with small components and work up to full page layouts; the mental
model pays for itself quickly.
"#
        .to_string(),
    );

    let mut brand_system = Project::new(
        4,
        "Brand Identity Design System",
        "A complete brand identity and design system for a tech startup, \
         including logo design, color palette, typography, and component \
         library.",
        "2023-11-30",
        Category::Design,
    );
    brand_system.image =
        "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&h=600&fit=crop".into();
    brand_system.tags = tags(&["UI/UX", "Branding", "Design Systems", "Figma"]);
    brand_system.content = Some(
        r#"# Brand Identity Design System

A complete visual identity for a growing tech startup.

## Scope

- **Logo**: primary mark, monochrome and icon-only variants
- **Color**: accessible palette with semantic roles
- **Typography**: a two-family scale for product and marketing
- **Components**: a Figma library mirrored in code

## Process

Discovery workshops, competitive analysis, then iterative rounds of
critique against real product screens rather than isolated artboards.
"#
        .to_string(),
    );

    let mut accessible_components = Project::new(
        5,
        "Building Accessible Web Components",
        "A deep dive into creating accessible web components using modern \
         HTML, CSS, and JavaScript while following WCAG guidelines.",
        "2024-01-30",
        Category::Blog,
    );
    accessible_components.image =
        "https://images.unsplash.com/photo-1559028006-448665bd7c7f?w=800&h=600&fit=crop".into();
    accessible_components.tags = tags(&["Accessibility", "JavaScript", "WCAG", "Web Standards"]);
    accessible_components.content = Some(
        r#"# Building Accessible Web Components

Accessibility is not a feature you bolt on at the end.

## Foundations

- Start from semantic HTML; ARIA is a repair tool, not a default
- Every interactive element must be reachable and operable by keyboard
- Focus management is part of component design, not an afterthought

## Testing

1. **Keyboard navigation**: can you use the component without a mouse?
2. **Screen reader testing**: NVDA, JAWS, or VoiceOver
3. **Color contrast**: meet WCAG ratios at every state
4. **Zoom testing**: verify behavior at 200% zoom

## Common Pitfalls

Placeholder-only labels, generic link text, keyboard traps, and missing
focus management in single-page apps.

## Conclusion

Accessibility is a mindset that puts users first. Start with semantics,
enhance progressively, and test with real users.
"#
        .to_string(),
    );

    vec![
        ecommerce,
        task_app,
        css_grid,
        brand_system,
        accessible_components,
    ]
}

fn tags(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}

//! Shared domain types for the About page, free of any DOM dependency.

pub mod about_tabs;

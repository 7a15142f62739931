//! Assertion helpers for generated pages and command output

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the generation success line
pub fn generated_successfully() -> impl Predicate<str> {
    predicates::str::contains("HTML file generated successfully!")
}

/// Creates a predicate that checks for an error report
pub fn has_error(detail: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(detail.to_string()))
}

/// Number of list items in a rendered page
pub fn item_count(html: &str) -> usize {
    html.matches("<li>").count()
}

/// Number of column lists in a rendered page
pub fn column_count(html: &str) -> usize {
    html.matches("<ul>").count()
}

/// Names linked from each column, in page order
pub fn linked_names_per_column(html: &str) -> Vec<Vec<String>> {
    html.split("<ul>")
        .skip(1)
        .map(|column| {
            let column = column.split("</ul>").next().unwrap_or_default();
            column
                .split("<a href=\"")
                .skip(1)
                .filter_map(|rest| rest.split('"').next())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

//! Display formatting for terminal output
//!
//! Provides utilities for formatting requests, audit history, the attribute
//! schema and the product hierarchy for terminal display.

pub mod hierarchy;
pub mod request;
pub mod schema;

pub use hierarchy::{format_hierarchy_nodes, format_hierarchy_path};
pub use request::{
    format_comments, format_history, format_request_details, format_request_list,
    format_update_outcome,
};
pub use schema::{format_attribute_details, format_attribute_list};

/// Truncate a string to `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Left-align text in a field of `width` characters
pub fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

//! Output formatting for conversion and merge results.
//!
//! This module handles rendering of computed values:
//! - [`json`] - JSON output for merge results
//! - [`terminal`] - plain-text list rendering

mod json;
mod terminal;

pub use json::merge_result_json;
pub use terminal::bracket_list;

//! JSON output for merge results.

use crate::processing::MergeResult;
use std::error::Error;

/// Render a merge result as a pretty-printed JSON document with `ranges`
/// and `cidrs` arrays of canonical strings.
pub fn merge_result_json(result: &MergeResult) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(result)?)
}

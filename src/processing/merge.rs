//! Coalescing of overlapping and adjacent ranges.

use super::decompose::range_to_cidrs;
use crate::models::{Cidr, Range};
use itertools::Itertools;
use serde::Serialize;

/// Merged ranges together with their exact subnet decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeResult {
    /// Minimal disjoint ranges covering every input address, sorted by
    /// start address, no two adjacent.
    pub ranges: Vec<Range>,
    /// CIDR decomposition of the merged ranges, flattened in address
    /// order (the merged ranges are disjoint and sorted, so the flat list
    /// is globally sorted too).
    pub cidrs: Vec<Cidr>,
}

/// Merge overlapping and adjacent ranges into the fewest disjoint ranges.
///
/// Adjacent means touching with no gap, so 192.168.2.2/32 and
/// 192.168.2.3/32 coalesce into one range. Duplicates and fully contained
/// ranges collapse into their container. Input order does not matter;
/// the result is sorted by start address and the operation is idempotent.
pub fn merge_ranges(ranges: Vec<Range>) -> Vec<Range> {
    ranges
        .into_iter()
        .sorted()
        .coalesce(|cur, next| {
            // u64 keeps end + 1 from wrapping when end is the top of the
            // address space.
            if u32::from(next.start()) as u64 <= u32::from(cur.end()) as u64 + 1 {
                let end = cur.end().max(next.end());
                Ok(Range::new(cur.start(), end).expect("merged endpoints stay ordered"))
            } else {
                Err((cur, next))
            }
        })
        .collect()
}

/// Merge, then decompose each merged range into subnets.
pub fn merge_all(ranges: Vec<Range>) -> MergeResult {
    let ranges = merge_ranges(ranges);
    log::debug!("merged into {} range(s)", ranges.len());
    let cidrs = ranges.iter().flat_map(|r| range_to_cidrs(r)).collect();
    MergeResult { ranges, cidrs }
}

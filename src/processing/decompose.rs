//! Exact decomposition of a range into CIDR blocks.

use crate::models::{Cidr, Range, MAX_PREFIX_LEN};
use std::net::Ipv4Addr;

/// Split a range into the shortest list of disjoint subnets whose union is
/// exactly the range.
///
/// Greedy walk from the low end: each step emits the biggest power-of-two
/// block that starts at the cursor, limited by the cursor's alignment
/// (trailing zero bits) and by the addresses left to cover. The cursor and
/// end are carried in `u64` so a range ending at 255.255.255.255 cannot
/// overflow the walk.
///
/// The output is ordered by base address, pairwise disjoint, and has
/// exactly one element iff the range is a single subnet block.
pub fn range_to_cidrs(range: &Range) -> Vec<Cidr> {
    let end = u32::from(range.end()) as u64;
    let mut cidrs = Vec::new();
    let mut cur = u32::from(range.start()) as u64;
    while cur <= end {
        // Alignment limit: the block must start at cur.
        // trailing_zeros(0) is 32, which allows the full-space block.
        let align = (cur as u32).trailing_zeros();
        // Coverage limit: the block must not overrun end.
        let remaining = end - cur + 1;
        let fit = 63 - remaining.leading_zeros();
        let size_log2 = align.min(fit);

        cidrs.push(Cidr::new(
            Ipv4Addr::from(cur as u32),
            MAX_PREFIX_LEN - size_log2 as u8,
        ));
        cur += 1u64 << size_log2;
    }
    cidrs
}

// cargo watch -x 'fmt' -x 'test'

//! IPv4 address, subnet and range calculator.
//!
//! Converts addresses among dotted-quad, hexadecimal and decimal notation,
//! converts between subnets and inclusive address ranges, and merges
//! collections of subnets/ranges into the minimal covering CIDR set.
//! Everything in [`models`] and [`processing`] is a pure function over
//! value types; [`cli`] is the only module that touches stdin/stdout.

pub mod cli;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{parse_addr, Cidr, ParseError, Range};
pub use processing::{merge_all, merge_ranges, range_to_cidrs, MergeResult};

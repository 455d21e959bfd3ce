//! Inclusive IPv4 address ranges.
//!
//! A [`Range`] is an arbitrary `[start, end]` interval of addresses, not
//! necessarily aligned to any subnet boundary.

use super::addr::parse_addr;
use super::cidr::{broadcast_addr, Cidr, MAX_PREFIX_LEN};
use super::ParseError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

lazy_static! {
    static ref RANGE_SPLIT: Regex =
        Regex::new(r"^\s*(\S+)\s*-\s*(\S+)\s*$").expect("Invalid Regex?");
}

/// An inclusive, contiguous interval of addresses with `start <= end`.
///
/// Ranges order by start address, then end, which is the order the merge
/// sweep relies on.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Range {
    start: Ipv4Addr,
    end: Ipv4Addr,
}

impl Range {
    /// Build a range from its endpoints. Fails when `start > end`.
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> Result<Range, ParseError> {
        if start > end {
            Err(ParseError::InvalidRange(format!("{} - {}", start, end)))
        } else {
            Ok(Range { start, end })
        }
    }

    /// First address of the range.
    pub fn start(&self) -> Ipv4Addr {
        self.start
    }

    /// Last address of the range.
    pub fn end(&self) -> Ipv4Addr {
        self.end
    }

    /// Number of addresses in the range.
    pub fn host_count(&self) -> u64 {
        (u32::from(self.end) - u32::from(self.start)) as u64 + 1
    }

    /// Smallest subnet whose host range contains this whole range.
    ///
    /// The result covers `[start, end]` but may be a strict superset when
    /// the range does not line up with a power-of-two block; see
    /// [`Range::is_exact_cidr`].
    pub fn minimal_enclosing_cidr(&self) -> Cidr {
        Cidr::new(self.start, self.common_prefix_len())
    }

    // Longest prefix on which start and end agree. The block at that
    // prefix contains both endpoints; one bit shorter would not be minimal.
    fn common_prefix_len(&self) -> u8 {
        let start = u32::from(self.start);
        let end = u32::from(self.end);
        for i in 0..MAX_PREFIX_LEN {
            if (start >> i) == (end >> i) {
                return MAX_PREFIX_LEN - i;
            }
        }
        0
    }

    /// True when the range is exactly one subnet block.
    pub fn is_exact_cidr(&self) -> bool {
        Range::from(&self.minimal_enclosing_cidr()) == *self
    }
}

impl From<&Cidr> for Range {
    fn from(cidr: &Cidr) -> Range {
        Range {
            start: cidr.addr(),
            end: broadcast_addr(cidr.addr(), cidr.prefix()),
        }
    }
}

impl FromStr for Range {
    type Err = ParseError;

    /// Parse `<address> - <address>`; whitespace around the hyphen is
    /// optional and each endpoint accepts any codec notation.
    fn from_str(s: &str) -> Result<Range, ParseError> {
        let err = || ParseError::InvalidRange(s.to_string());
        let caps = RANGE_SPLIT.captures(s).ok_or_else(err)?;
        let (start, _) = parse_addr(&caps[1]).map_err(|_| err())?;
        let (end, _) = parse_addr(&caps[2]).map_err(|_| err())?;
        Range::new(start, end).map_err(|_| err())
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

impl Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Range, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Range::from_str(&s).map_err(de::Error::custom)
    }
}

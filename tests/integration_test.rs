//! Integration tests for ipv4calc
//!
//! These tests verify the conversion and merge workflows end to end,
//! from raw tokens to rendered results.

use ipv4calc::models::{fmt_addr, parse_addr, reverse_bytes, Notation};
use ipv4calc::output::bracket_list;
use ipv4calc::{merge_all, merge_ranges, range_to_cidrs, Cidr, ParseError, Range};
use std::str::FromStr;

#[test]
fn test_convert_across_notations() {
    let (addr, notation) = parse_addr("192.168.2.4").expect("Failed to parse dotted quad");
    assert_eq!(notation, Notation::Quad);
    assert_eq!(fmt_addr(addr, Notation::Quad), "192.168.2.4");
    assert_eq!(fmt_addr(addr, Notation::Hex), "0xc0a80204");
    assert_eq!(fmt_addr(addr, Notation::Decimal), "3232236036");

    // The same address arrives through every grammar.
    assert_eq!(parse_addr("0xc0a80204").unwrap().0, addr);
    assert_eq!(parse_addr("3232236036").unwrap().0, addr);
}

#[test]
fn test_reverse_bytes_of_hex_input() {
    let (addr, _) = parse_addr("0xc0a80204").unwrap();
    assert_eq!(fmt_addr(reverse_bytes(addr), Notation::Quad), "4.2.168.192");
}

#[test]
fn test_subnet_token_to_host_range() {
    let cidr = Cidr::from_str("192.168.1.0/24").expect("Failed to parse subnet");
    let range = cidr.host_range();
    assert_eq!(range.to_string(), "192.168.1.0 - 192.168.1.255");
    assert_eq!(range.host_count(), 256);
}

#[test]
fn test_range_token_to_minimal_subnet() {
    let range = Range::from_str("192.168.1.1 - 192.168.1.127").expect("Failed to parse range");
    let cidr = range.minimal_enclosing_cidr();
    assert_eq!(cidr.to_string(), "192.168.1.0/25");
    assert!(!range.is_exact_cidr(), "Range is not a whole block");
    assert_eq!(
        Range::from(&cidr).to_string(),
        "192.168.1.0 - 192.168.1.127"
    );

    // The exact equivalent of the inexact range.
    assert_eq!(
        bracket_list(&range_to_cidrs(&range)),
        "[192.168.1.1/32, 192.168.1.2/31, 192.168.1.4/30, 192.168.1.8/29, \
         192.168.1.16/28, 192.168.1.32/27, 192.168.1.64/26]"
    );
}

#[test]
fn test_merge_workflow() {
    let inputs = vec![
        Range::from_str("192.168.2.3 - 192.168.2.255").unwrap(),
        Cidr::from_str("192.168.3.0/24").unwrap().host_range(),
        Range::from_str("192.168.2.0 - 192.168.2.2").unwrap(),
    ];
    let result = merge_all(inputs);

    assert_eq!(bracket_list(&result.ranges), "[192.168.2.0 - 192.168.3.255]");
    assert_eq!(bracket_list(&result.cidrs), "[192.168.2.0/23]");

    // Merging the merged output changes nothing.
    let again = merge_ranges(result.ranges.clone());
    assert_eq!(again, result.ranges);
}

#[test]
fn test_merge_keeps_disjoint_inputs_apart() {
    let result = merge_all(vec![
        Cidr::from_str("10.0.0.0/24").unwrap().host_range(),
        Cidr::from_str("10.0.2.0/24").unwrap().host_range(),
    ]);
    assert_eq!(result.ranges.len(), 2, "Expected 2 merged ranges");
    assert_eq!(
        bracket_list(&result.cidrs),
        "[10.0.0.0/24, 10.0.2.0/24]"
    );
}

#[test]
fn test_bad_tokens_are_values_not_panics() {
    // One bad token among many must not abort batch processing; every
    // failure comes back as a typed value.
    assert_eq!(
        parse_addr("not-an-address"),
        Err(ParseError::InvalidAddress("not-an-address".to_string()))
    );
    assert!(matches!(
        Cidr::from_str("10.0.0.0/99"),
        Err(ParseError::InvalidCidr(_))
    ));
    assert!(matches!(
        Range::from_str("10.0.0.9 - 10.0.0.1"),
        Err(ParseError::InvalidRange(_))
    ));
}

#[test]
fn test_decomposition_matches_merge_of_itself() {
    // Decompose a ragged range, feed the blocks back through the merge
    // engine, and get the original range back.
    let range = Range::from_str("10.0.0.3 - 10.0.5.200").unwrap();
    let blocks: Vec<Range> = range_to_cidrs(&range)
        .iter()
        .map(|c| c.host_range())
        .collect();
    let merged = merge_ranges(blocks);
    assert_eq!(merged, vec![range]);
}

//! IPv4 address codec.
//!
//! Parses a single address token in any of three notations (dotted quad,
//! hexadecimal integer, decimal integer) and renders addresses back out in
//! each. All arithmetic goes through the `u32` value of the address.

use super::ParseError;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Textual notation of an address token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notation {
    /// Dotted quad, `192.168.2.4`.
    Quad,
    /// Hexadecimal integer, `0xc0a80204`.
    Hex,
    /// Decimal integer, `3232236036`.
    Decimal,
}

// Shape guards for the numeric grammars. u32::from_str_radix on its own
// accepts a leading '+', which none of the grammars allow.
lazy_static! {
    static ref HEX_PREFIXED: Regex = Regex::new(r"^0[xX][0-9a-fA-F]+$").expect("Invalid Regex?");
    static ref DECIMAL: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref HEX_BARE: Regex = Regex::new(r"^[0-9a-fA-F]+$").expect("Invalid Regex?");
}

/// Parse one address token.
///
/// Grammars are attempted in a fixed order and the first full-token match
/// wins: dotted quad, `0x`-prefixed hex, decimal, bare hex. An all-digit
/// token is therefore decimal; bare hex only ever matches tokens carrying
/// at least one letter digit (e.g. `a141e28`).
///
/// The returned [`Notation`] records which grammar matched, so a caller can
/// derive a default output notation from the input.
pub fn parse_addr(token: &str) -> Result<(Ipv4Addr, Notation), ParseError> {
    if let Ok(addr) = Ipv4Addr::from_str(token) {
        return Ok((addr, Notation::Quad));
    }
    if HEX_PREFIXED.is_match(token) {
        if let Ok(ip) = u32::from_str_radix(&token[2..], 16) {
            return Ok((Ipv4Addr::from(ip), Notation::Hex));
        }
    }
    if DECIMAL.is_match(token) {
        if let Ok(ip) = token.parse::<u32>() {
            return Ok((Ipv4Addr::from(ip), Notation::Decimal));
        }
    }
    if HEX_BARE.is_match(token) {
        if let Ok(ip) = u32::from_str_radix(token, 16) {
            return Ok((Ipv4Addr::from(ip), Notation::Hex));
        }
    }
    log::debug!("no address grammar matched token {:?}", token);
    Err(ParseError::InvalidAddress(token.to_string()))
}

/// Render an address in the given notation.
///
/// Hex comes out as `0x` plus lowercase digits with no padding, so the zero
/// address renders as `0x0`.
pub fn fmt_addr(addr: Ipv4Addr, notation: Notation) -> String {
    let ip = u32::from(addr);
    match notation {
        Notation::Quad => format!("{}", addr),
        Notation::Hex => format!("{:#x}", ip),
        Notation::Decimal => format!("{}", ip),
    }
}

/// Reverse the octet order of an address: first octet swaps with last,
/// second with third. A pure bit permutation; applying it twice gives back
/// the original address.
pub fn reverse_bytes(addr: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr).swap_bytes())
}

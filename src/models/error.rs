//! Parse failure kinds for the three token grammars.

use thiserror::Error;

/// Why a token was rejected.
///
/// Each variant carries the offending token so a batch caller can report it
/// and carry on with the next input. Parse failures are never fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token matched none of the address grammars, or its value does not
    /// fit in 32 bits.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),
    /// Malformed `<address>/<prefix>` token or prefix outside [0, 32].
    #[error("Invalid IP subnet: {0}")]
    InvalidCidr(String),
    /// Malformed `<start> - <end>` token or start above end.
    #[error("Invalid IP range: {0}")]
    InvalidRange(String),
}

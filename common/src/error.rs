//! Item-level failures.
//!
//! Neither type aborts a lookup. They accumulate in a
//! [`Response`](crate::record::Response) next to the records that did succeed.

use std::num::ParseIntError;

/// A requested address that did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The input is not an IPv4 or IPv6 literal and was never sent.
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    /// The address was sent, but the server reply held no line for it.
    #[error("no result returned for IP: {0}")]
    NoResult(String),
}

impl LookupError {
    /// The input address this error is about.
    pub fn address(&self) -> &str {
        match self {
            LookupError::InvalidAddress(addr) | LookupError::NoResult(addr) => addr,
        }
    }
}

/// Why a response line could not become a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("invalid response format")]
    InvalidFormat,

    #[error("invalid AS number: {0}")]
    InvalidAsn(#[from] ParseIntError),
}

/// A response line that was skipped, with the raw (trimmed) text kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {line:?}")]
pub struct ParseError {
    pub line: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            line: line.into(),
            kind,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

//! Parser for the pipe-delimited bulk whois reply.
//!
//! ```text
//! Bulk mode; whois.cymru.com [2024-01-15 12:00:00 +0000]
//! AS      | IP               | BGP Prefix       | CC | AS Name
//! 15169   | 8.8.8.8          | 8.8.8.0/24       | US | GOOGLE, US
//! NA      | 192.0.2.1        | NA               | ZZ | NA
//! ```
//!
//! The banner and column header are skipped. A line that cannot be turned
//! into a [`Record`] is reported as a [`ParseError`] and parsing moves on.

use asnlookup_common::{ParseError, ParseErrorKind, Record};
use tracing::{debug, trace};

/// First line of every bulk-mode reply starts with this.
pub const BANNER_PREFIX: &str = "Bulk mode;";

/// Longest line the parser will buffer (64 KiB).
pub const MAX_LINE_LEN: usize = 64 * 1024;

const FIELD_DELIMITER: char = '|';
const NOT_AVAILABLE: &str = "NA";

/// Records and skipped lines from one reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResponse {
    pub records: Vec<Record>,
    pub errors: Vec<ParseError>,
}

/// Failures that stop the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("empty response from server")]
    Empty,

    /// Lines before the oversized one are kept in `partial`.
    #[error("response line {line_number} exceeds maximum length of {limit} bytes")]
    LineTooLong {
        line_number: usize,
        limit: usize,
        partial: ParsedResponse,
    },
}

/// Parses a complete reply body.
pub fn parse(data: &[u8]) -> Result<ParsedResponse, ResponseError> {
    if data.is_empty() {
        return Err(ResponseError::Empty);
    }

    let mut parsed: ParsedResponse = ParsedResponse::default();

    for (idx, raw) in data.split(|&b| b == b'\n').enumerate() {
        let raw: &[u8] = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.len() > MAX_LINE_LEN {
            return Err(ResponseError::LineTooLong {
                line_number: idx + 1,
                limit: MAX_LINE_LEN,
                partial: parsed,
            });
        }

        let text = String::from_utf8_lossy(raw);
        let line: &str = text.trim();

        if line.is_empty() || line.starts_with(BANNER_PREFIX) || is_header_line(line) {
            trace!(line, "skipping non-record line");
            continue;
        }

        match parse_line(line) {
            Ok(record) => parsed.records.push(record),
            Err(err) => {
                debug!(line_number = idx + 1, error = %err, "skipping malformed line");
                parsed.errors.push(err);
            }
        }
    }

    debug!(
        records = parsed.records.len(),
        malformed = parsed.errors.len(),
        "parsed bulk response"
    );
    Ok(parsed)
}

/// Recognises the column header line the server may print after the banner.
///
/// A data line whose first column is non-numeric text starting with "as"
/// and that contains "| ip" would also match.
pub fn is_header_line(line: &str) -> bool {
    let lower: String = line.to_lowercase();
    lower.contains("as name") || (lower.starts_with("as") && lower.contains("| ip"))
}

/// Parses one trimmed data line: `AS | IP | BGP Prefix | CC | AS Name`.
pub fn parse_line(line: &str) -> Result<Record, ParseError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() < 2 {
        return Err(ParseError::new(line, ParseErrorKind::InvalidFormat));
    }

    let asn: i64 = match fields[0] {
        "" | NOT_AVAILABLE => 0,
        token => token
            .parse::<i64>()
            .map_err(|e| ParseError::new(line, e.into()))?,
    };

    let field = |idx: usize| -> String { fields.get(idx).copied().unwrap_or_default().to_string() };

    Ok(Record {
        asn,
        ip: field(1),
        bgp_prefix: field(2),
        country_code: field(3),
        as_name: field(4),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

use crate::error::{LookupError, ParseError};

/// One answer line from the whois service.
///
/// Only `asn` and `ip` are guaranteed to come from the server. The remaining
/// columns are empty strings whenever the line was short or left them blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Origin AS number; `0` when the server answered `NA`.
    pub asn: i64,
    /// The address as echoed by the server.
    pub ip: String,
    pub bgp_prefix: String,
    pub country_code: String,
    pub as_name: String,
}

/// Outcome of one bulk lookup.
///
/// `records` keep the order the server answered in, not the request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub records: Vec<Record>,
    /// Validation failures first, then addresses the server skipped.
    pub errors: Vec<LookupError>,
    /// Response lines that could not be turned into records.
    pub parse_errors: Vec<ParseError>,
}

impl Response {
    /// A response that only reports problems with the input.
    pub fn from_errors(errors: Vec<LookupError>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.errors.is_empty() && self.parse_errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

//! Wire codec for the bulk whois protocol.
//!
//! ```text
//! begin
//! prefix
//! countrycode
//! 8.8.8.8
//! end
//! ```
//!
//! is answered with
//!
//! ```text
//! Bulk mode; whois.cymru.com [2024-01-15 12:00:00 +0000]
//! 15169   | 8.8.8.8          | 8.8.8.0/24       | US | GOOGLE, US
//! ```
//!
//! [`request`] validates input and builds the payload; [`response`] turns
//! the reply back into records.

pub mod request;
pub mod response;

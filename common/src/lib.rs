//! # asnlookup common
//!
//! Types shared by every layer of the lookup pipeline: the client
//! configuration, the per-address and per-line error types, and the
//! [`Record`](record::Record) / [`Response`](record::Response) model handed back to callers.

pub mod config;
pub mod error;
pub mod network;
pub mod record;

pub use config::ClientConfig;
pub use error::{LookupError, ParseError, ParseErrorKind};
pub use record::{Record, Response};

//! # asnlookup core
//!
//! Runs one bulk lookup per call against a whois server:
//!
//! * **[`client`]**: validates input, performs the round trip, reconciles missing answers.
//! * **[`context`]**: caller-supplied deadline and cancellation.
//! * **[`network`]**: the TCP transport (connect, bounded exchange, close).
//! * **[`error`]**: failures that abort a whole call.

pub mod client;
pub mod context;
pub mod error;
pub mod network;

pub use client::WhoisClient;
pub use context::LookupContext;
pub use error::ClientError;

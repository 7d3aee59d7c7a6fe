//! # Bulk Lookup Client
//!
//! Implements the one use case of the crate: resolving a batch of addresses
//! to their origin AS in a single round trip.
//!
//! A call moves through validation, connect, send, receive, parse and
//! reconciliation. Problems with single addresses or single response lines
//! are collected into the [`Response`]. Problems with the connection itself
//! abort the call with a [`ClientError`].

use std::collections::HashSet;

use asnlookup_common::config::MAX_RESPONSE_SIZE;
use asnlookup_common::{ClientConfig, LookupError, Record, Response};
use asnlookup_protocols::request;
use asnlookup_protocols::response::{self, ParsedResponse};
use tokio::net::TcpStream;
use tokio::time::Instant;
use tracing::debug;

use crate::context::{LookupContext, deadline_after};
use crate::error::ClientError;
use crate::network::tcp;

/// Client for a bulk whois service.
///
/// Holds nothing but its config, so one client can serve any number of
/// sequential lookups. Every call opens and releases its own connection.
#[derive(Debug, Clone, Default)]
pub struct WhoisClient {
    config: ClientConfig,
}

impl WhoisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Looks up every address in `addresses`.
    ///
    /// Returns without touching the network when no input survives
    /// validation. Otherwise every valid input ends up either as a record
    /// or as a [`LookupError::NoResult`].
    pub async fn lookup<I, S>(
        &self,
        ctx: &LookupContext,
        addresses: I,
    ) -> Result<Response, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (valid, mut errors) = request::validate(addresses);
        if valid.is_empty() {
            debug!(invalid = errors.len(), "no valid addresses, skipping query");
            return Ok(Response::from_errors(errors));
        }

        let payload: Vec<u8> = request::build(&valid);
        let parsed: ParsedResponse = self.query(ctx, &payload).await?;

        errors.extend(reconcile(&valid, &parsed.records));

        Ok(Response {
            records: parsed.records,
            errors,
            parse_errors: parsed.errors,
        })
    }

    async fn query(
        &self,
        ctx: &LookupContext,
        payload: &[u8],
    ) -> Result<ParsedResponse, ClientError> {
        let addr: String = self.config.server_addr();
        let fallback: Instant = deadline_after(self.config.timeout());

        let connect_deadline: Instant = match ctx.deadline() {
            Some(deadline) => deadline.min(fallback),
            None => fallback,
        };
        debug!(%addr, timeout = ?self.config.timeout(), "connecting");

        let mut stream: TcpStream = tokio::select! {
            biased;
            _ = ctx.cancelled() => return Err(ClientError::Cancelled),
            res = tcp::connect(&addr, connect_deadline) => res?,
        };

        let deadline: Instant = tcp::apply_deadline(
            ctx.deadline().unwrap_or_else(|| deadline_after(self.config.timeout())),
        )?;

        let body: Vec<u8> = tokio::select! {
            biased;
            _ = ctx.cancelled() => return Err(ClientError::Cancelled),
            res = tcp::exchange(&mut stream, payload, deadline, MAX_RESPONSE_SIZE) => res?,
        };

        tcp::close(stream).await?;

        Ok(response::parse(&body)?)
    }
}

/// Returns a [`LookupError::NoResult`] for every requested address that no
/// record answers, one per occurrence and in request order.
pub fn reconcile(requested: &[String], records: &[Record]) -> Vec<LookupError> {
    let answered: HashSet<&str> = records.iter().map(|r| r.ip.as_str()).collect();

    requested
        .iter()
        .filter(|ip| !answered.contains(ip.as_str()))
        .map(|ip| LookupError::NoResult(ip.clone()))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

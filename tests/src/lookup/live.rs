#![cfg(test)]
//! Queries the public whois service. Run with `--ignored` when online.

use std::time::Duration;

use asnlookup_common::{ClientConfig, Response};
use asnlookup_core::{LookupContext, WhoisClient};

fn public_client() -> WhoisClient {
    WhoisClient::new(ClientConfig::new().with_timeout(Duration::from_secs(30)))
}

#[tokio::test]
#[ignore]
async fn live_lookup_well_known_resolvers() -> anyhow::Result<()> {
    let resp: Response = public_client()
        .lookup(&LookupContext::background(), ["8.8.8.8", "1.1.1.1"])
        .await?;

    assert_eq!(resp.records.len(), 2, "errors: {:?}", resp.errors);
    assert!(resp.errors.is_empty());

    for record in &resp.records {
        assert_ne!(record.asn, 0, "expected non-zero ASN for {}", record.ip);
        match record.ip.as_str() {
            "8.8.8.8" => assert_eq!(record.asn, 15169),
            "1.1.1.1" => assert_eq!(record.asn, 13335),
            other => panic!("unexpected address in reply: {other}"),
        }
    }
    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_lookup_ipv6() -> anyhow::Result<()> {
    let resp: Response = public_client()
        .lookup(&LookupContext::background(), ["2001:4860:4860::8888"])
        .await?;

    // The service may not answer for every IPv6 address; only require a
    // well-formed reply.
    assert!(resp.parse_errors.is_empty(), "{:?}", resp.parse_errors);
    assert_eq!(resp.records.len() + resp.errors.len(), 1);
    Ok(())
}

//! End-to-end tests for the lookup client, run against in-process mock
//! whois servers. Tests touching the public service are `#[ignore]`d.

mod lookup;
mod utils;

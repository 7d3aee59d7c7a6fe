use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use asnlookup_common::{ClientConfig, Response};
use asnlookup_core::{LookupContext, WhoisClient};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::commands::CommandLine;
use crate::input;
use crate::terminal::{print, spinner};

pub async fn lookup(cmd: CommandLine) -> anyhow::Result<ExitCode> {
    let ips: Vec<String> = input::collect(cmd.ips);
    if ips.is_empty() {
        print::usage();
        return Ok(ExitCode::from(2));
    }

    let config: ClientConfig = ClientConfig::new()
        .with_host(cmd.server)
        .with_port(cmd.port)
        .with_timeout(cmd.timeout);
    let client: WhoisClient = WhoisClient::new(config);

    let cancel: CancellationToken = CancellationToken::new();
    watch_interrupt(cancel.clone());
    let ctx: LookupContext = LookupContext::background().with_cancellation(cancel);

    let server: String = client.config().server_addr();
    debug!(count = ips.len(), %server, "starting lookup");
    spinner::start(format!("querying {server}"));

    let start_time: Instant = Instant::now();
    let result = client.lookup(&ctx, &ips).await;
    spinner::stop();

    let response: Response = result.with_context(|| format!("lookup via {server} failed"))?;
    info!(
        records = response.records.len(),
        errors = response.errors.len(),
        elapsed = ?start_time.elapsed(),
        "lookup finished"
    );

    report(&response)?;
    Ok(ExitCode::from(exit_status(&response)))
}

/// Cancels `token` on the first Ctrl-C.
fn watch_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupted");
            token.cancel();
        }
    });
}

fn report(response: &Response) -> anyhow::Result<()> {
    let mut stdout = BufWriter::new(io::stdout().lock());
    print::records(&mut stdout, &response.records).context("writing results")?;
    stdout.flush()?;

    print::lookup_errors(&mut io::stderr().lock(), &response.errors)?;

    for err in &response.parse_errors {
        warn!("skipped response line: {err}");
    }
    Ok(())
}

/// 0 when every address resolved, 1 on a mix, 2 when nothing did.
pub fn exit_status(response: &Response) -> u8 {
    match (response.records.is_empty(), response.has_errors()) {
        (_, false) => 0,
        (false, true) => 1,
        (true, true) => 2,
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

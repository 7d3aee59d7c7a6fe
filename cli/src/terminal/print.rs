use std::io::{self, Write};

use asnlookup_common::{LookupError, Record};

use crate::terminal::spinner::get_spinner;

const USAGE: &str = concat!(
    "usage: asnlookup [-s server] [-p port] [-t timeout] IP [IP ...]\n",
    "       or pipe IPs via stdin (one per line)",
);

/// Writes `error: <msg>` to stderr.
pub fn fatal(msg: &str) {
    get_spinner().suspend(|| {
        let _ = writeln!(io::stderr(), "error: {msg}");
    });
}

pub fn usage() {
    let _ = writeln!(io::stderr(), "{USAGE}");
}

/// One tab-separated line per record: address, AS number, prefix, country, AS name.
pub fn records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for r in records {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            r.ip, r.asn, r.bgp_prefix, r.country_code, r.as_name
        )?;
    }
    out.flush()
}

pub fn lookup_errors<W: Write>(out: &mut W, errors: &[LookupError]) -> io::Result<()> {
    for e in errors {
        writeln!(out, "error: {}: {}", e.address(), e)?;
    }
    out.flush()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

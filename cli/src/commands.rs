pub mod lookup;

use std::time::Duration;

use asnlookup_common::config::{DEFAULT_HOST, DEFAULT_PORT};
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "asnlookup")]
#[command(version)]
#[command(about = "Bulk IP to ASN lookups over whois.")]
#[command(after_help = "With no IP arguments, addresses are read from stdin, one per line.")]
pub struct CommandLine {
    /// Addresses to look up
    #[arg(value_name = "IP")]
    pub ips: Vec<String>,

    /// Whois server address
    #[arg(short, long, default_value = DEFAULT_HOST)]
    pub server: String,

    /// Whois server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Connection timeout, e.g. 30s, 500ms, 2m
    #[arg(short, long, default_value = "30s", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses `500ms`, `30s`, `2m`, `1h`, or a bare (possibly fractional) number of seconds.
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s: &str = s.trim();
    let split: usize = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (value, unit) = s.split_at(split);

    let value: f64 = value
        .parse::<f64>()
        .map_err(|_| format!("invalid duration: {s:?}"))?;

    let secs: f64 = match unit {
        "ms" => value / 1000.0,
        "" | "s" => value,
        "m" => value * 60.0,
        "h" => value * 3600.0,
        other => return Err(format!("unknown duration unit {other:?} in {s:?}")),
    };

    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid duration {s:?}: {e}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

use asnlookup_common::LookupError;
use asnlookup_common::network::address;

const BEGIN: &str = "begin";
const END: &str = "end";

/// Ask the server to include the announced BGP prefix column.
const PREFIX_DIRECTIVE: &str = "prefix";
/// Ask the server to include the country code column.
const COUNTRYCODE_DIRECTIVE: &str = "countrycode";

/// Splits raw inputs into addresses worth sending and errors for those that are not.
///
/// Inputs are trimmed first. Blank inputs are dropped silently. Order and
/// duplicates of the valid ones are preserved.
pub fn validate<I, S>(inputs: I) -> (Vec<String>, Vec<LookupError>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut valid: Vec<String> = Vec::new();
    let mut errors: Vec<LookupError> = Vec::new();

    for input in inputs {
        let trimmed: &str = input.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }

        if address::is_ip_literal(trimmed) {
            valid.push(trimmed.to_string());
        } else {
            errors.push(LookupError::InvalidAddress(trimmed.to_string()));
        }
    }

    (valid, errors)
}

/// Builds the bulk request payload for already validated addresses.
pub fn build<S: AsRef<str>>(addresses: &[S]) -> Vec<u8> {
    let body_len: usize = addresses.iter().map(|a| a.as_ref().len() + 1).sum();
    let mut payload: Vec<u8> = Vec::with_capacity(32 + body_len);

    for directive in [BEGIN, PREFIX_DIRECTIVE, COUNTRYCODE_DIRECTIVE] {
        push_line(&mut payload, directive);
    }
    for addr in addresses {
        push_line(&mut payload, addr.as_ref());
    }
    push_line(&mut payload, END);

    payload
}

fn push_line(buf: &mut Vec<u8>, line: &str) {
    buf.extend_from_slice(line.as_bytes());
    buf.push(b'\n');
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

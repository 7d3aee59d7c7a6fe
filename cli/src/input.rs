use std::io::{self, BufRead, IsTerminal, Read};

use tracing::debug;

/// Longest stdin line accepted (1 MiB).
pub const MAX_LINE_LEN: usize = 1024 * 1024;

/// Addresses from the command line, or from piped stdin when none were given.
///
/// A read failure on stdin is reported and whatever was read before it is kept.
pub fn collect(args: Vec<String>) -> Vec<String> {
    if !args.is_empty() {
        return args;
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    if let Err(e) = read_lines(stdin.lock(), MAX_LINE_LEN, &mut lines) {
        crate::terminal::print::fatal(&format!("error reading stdin: {e}"));
    }
    debug!(count = lines.len(), "read addresses from stdin");
    lines
}

/// Appends every non-empty line of `reader` to `out`.
///
/// Stops with an `InvalidData` error at the first line longer than `max_len`
/// bytes, leaving the lines before it in `out`.
pub fn read_lines<R: BufRead>(
    mut reader: R,
    max_len: usize,
    out: &mut Vec<String>,
) -> io::Result<()> {
    let mut buf: Vec<u8> = Vec::new();

    loop {
        buf.clear();
        let n: usize = (&mut reader)
            .take(max_len as u64 + 1)
            .read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(());
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        } else if buf.len() > max_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line exceeded maximum length of {max_len} bytes"),
            ));
        }

        if !buf.is_empty() {
            out.push(String::from_utf8_lossy(&buf).into_owned());
        }
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

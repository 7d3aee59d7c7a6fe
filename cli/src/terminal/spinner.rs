use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub(crate) static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

/// The process-wide spinner. Hidden unless stderr is a terminal.
pub fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> ProgressBar {
    let pb: ProgressBar = ProgressBar::new_spinner();

    if !console::Term::stderr().is_term() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
        return pb;
    }

    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(TICKS));
    }
    pb
}

/// Shows `message` next to the spinner until [`stop`] is called.
pub fn start(message: String) {
    let pb: &ProgressBar = get_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(TICK_INTERVAL);
}

pub fn stop() {
    get_spinner().finish_and_clear();
}

/// Writes to stderr without tearing the spinner line.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        get_spinner().suspend(|| io::stderr().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

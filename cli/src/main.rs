mod commands;
mod input;
mod sandbox;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    if let Err(e) = sandbox::restrict() {
        print::fatal(&format!("sandbox: {e}"));
        return ExitCode::from(1);
    }

    match commands::lookup::lookup(commands).await {
        Ok(code) => code,
        Err(err) => {
            print::fatal(&format!("{err:#}"));
            ExitCode::from(2)
        }
    }
}

mod cli;

use cli::CliCommand;
use ria_core::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("ria error: {:#}", err);
        std::process::exit(1);
    }
}

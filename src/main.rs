//! stem-demo command line interface
//!
//! Parses arguments, sets up logging and the interrupt handler, then hands
//! off to the driver in `stem_demo::cli`.

use clap::Parser;
use log::{info, warn};
use std::process::ExitCode;

use stem_demo::CancelToken;
use stem_demo::cli::{self, Cli};
use stem_demo::console::{BarSlot, Console, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG still overrides the default level. Records are
    // routed around the live progress bar.
    let level = if cli.verbose() {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let slot = BarSlot::new();
    if let Err(e) = logging::init(level, slot.clone()) {
        eprintln!("failed to initialize logging: {e}");
    }

    info!("stem-demo {}", stem_demo::VERSION);

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_token.cancel()) {
        warn!("could not install interrupt handler: {e}");
    }

    let mut console = Console::stdout(slot);
    cli::run(cli, &mut console, &cancel).into()
}

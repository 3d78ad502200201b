#![forbid(unsafe_code)]

//! tether sample runner entry point.

use std::io;
use std::process::ExitCode;

use tether_core::logging;
use tether_samples::cli::SampleOptions;
use tether_samples::{host, samples};
use tracing::info;

fn main() -> ExitCode {
    let opts = SampleOptions::parse();
    logging::init(opts.log_filter.as_deref());

    let mut sample = samples::build(&opts);
    info!(sample = sample.name(), "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match host::run(sample.as_mut(), stdin.lock(), stdout.lock()) {
        Ok(handled) => {
            info!(handled, "input closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Entry point for the `skeeball-agent` binary.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use skeeball_agent::{run_agent, telemetry};
use skeeball_config::AgentArgs;

fn main() -> ExitCode {
    let args = AgentArgs::parse();
    if let Err(error) = telemetry::initialise(&args) {
        let _ = writeln!(io::stderr(), "skeeball-agent: {error}");
        return ExitCode::FAILURE;
    }
    match run_agent(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => ExitCode::from(error.exit_code()),
    }
}

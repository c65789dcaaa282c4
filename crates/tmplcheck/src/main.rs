//! tmplcheck CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General or input error
//! - 2: Invalid arguments
//! - 3: Data error
//! - 4: Template syntax error
//! - 5: Render error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;

use commands::{Cli, Commands};

/// CI-friendly exit codes
///
/// Invalid arguments exit with 2 from clap itself.
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const DATA_ERROR: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const RENDER_ERROR: u8 = 5;
}

const VERBOSE_FILTER: &str = "tmplcheck=debug,tmplcheck_render=debug,tmplcheck_input=debug";

fn init_logging(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Already initialized is fine.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::FmtData(args) => commands::fmt_data::execute(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(ExitCodes::GENERAL_ERROR)
        }
    }
}

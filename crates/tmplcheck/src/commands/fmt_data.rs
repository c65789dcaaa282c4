//! Fmt-data command - pretty-print a data file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tmplcheck_input::{
    read_payload_file, DataFileKind, InputError, PayloadKind, DEFAULT_MAX_SIZE,
};
use tmplcheck_render::{parse_as, reformat, DataFormat};
use tracing::debug;

#[derive(Args, Debug)]
pub struct FmtDataArgs {
    /// Data file to reformat (.json, .yaml, .yml)
    pub path: PathBuf,

    /// Target format
    #[arg(long, default_value = "json", value_parser = parse_target)]
    pub to: DataFormat,

    /// Maximum file size in bytes
    #[arg(long, value_name = "BYTES", env = "TMPLCHECK_MAX_SIZE", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: u64,
}

fn parse_target(value: &str) -> Result<DataFormat, String> {
    value
        .parse()
        .map_err(|_| format!("unknown format '{}': expected json or yaml", value))
}

pub fn execute(args: FmtDataArgs) -> Result<u8> {
    println!("{}", format_file(&args)?);
    Ok(crate::ExitCodes::SUCCESS)
}

/// Loads a data file by its extension and re-serializes it.
pub fn format_file(args: &FmtDataArgs) -> Result<String> {
    let source = match DataFileKind::from_path(&args.path)? {
        DataFileKind::Json => DataFormat::Json,
        DataFileKind::Yaml => DataFormat::Yaml,
        DataFileKind::Csv => {
            return Err(InputError::UnsupportedFormat {
                path: args.path.clone(),
            }
            .into())
        }
    };

    let raw = read_payload_file(&args.path, PayloadKind::Data, args.max_size)
        .context("Failed to load data file")?;
    debug!(path = %args.path.display(), from = %source, to = %args.to, "reformatting");
    let value = match parse_as(&raw, source) {
        Ok(value) => value,
        Err(err) => bail!("{}: {}", args.path.display(), err),
    };
    let mut out = reformat(&value, args.to)?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

//! CLI command definitions.
//!
//! Each subcommand is a thin shim: it collects input, hands it to
//! `tmplcheck-render`, and prints the result record unchanged.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use tmplcheck_input::{
    parse_flag, ArgSource, FileSource, InputChain, InputError, PayloadKind, ResolvedInput,
    StdinReader, StdinSource, DEFAULT_MAX_SIZE,
};
use tmplcheck_render::WhitespacePolicy;

use crate::output::OutputFormat;

pub mod check;
pub mod fmt_data;
pub mod validate;

/// tmplcheck - validate and render Jinja-style templates
#[derive(Parser, Debug)]
#[command(name = "tmplcheck")]
#[command(version, about = "Validate Jinja-style templates and render them against JSON or YAML data")]
#[command(long_about = r#"
tmplcheck checks a template's syntax, parses a data payload (JSON first,
then YAML), and renders the template with the payload's top-level keys bound
as names.

COMMANDS:
  check     → parse data, validate, then render
  validate  → syntax check only, no data
  fmt-data  → pretty-print a .json/.yaml/.yml data file

EXIT CODES:
  0 - Success
  1 - General or input error
  2 - Invalid arguments
  3 - Invalid data
  4 - Template syntax error
  5 - Render error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse data, validate the template, and render it
    Check(check::CheckArgs),

    /// Check template syntax without rendering
    Validate(validate::ValidateArgs),

    /// Pretty-print a data file as JSON or YAML
    #[command(name = "fmt-data")]
    FmtData(fmt_data::FmtDataArgs),
}

fn trim_blocks_flag(value: &str) -> Result<bool, InputError> {
    parse_flag("--trim-blocks", value)
}

fn lstrip_blocks_flag(value: &str) -> Result<bool, InputError> {
    parse_flag("--lstrip-blocks", value)
}

/// Whitespace control flags, given as text.
#[derive(Args, Debug, Clone)]
pub struct PolicyArgs {
    /// Remove the first newline after a block tag
    #[arg(long, value_name = "BOOL", env = "TMPLCHECK_TRIM_BLOCKS", default_value = "true", action = ArgAction::Set, value_parser = trim_blocks_flag)]
    pub trim_blocks: bool,

    /// Strip leading spaces and tabs before a block tag
    #[arg(long, value_name = "BOOL", env = "TMPLCHECK_LSTRIP_BLOCKS", default_value = "true", action = ArgAction::Set, value_parser = lstrip_blocks_flag)]
    pub lstrip_blocks: bool,
}

impl PolicyArgs {
    pub fn policy(&self) -> WhitespacePolicy {
        WhitespacePolicy::new(self.trim_blocks, self.lstrip_blocks)
    }
}

/// Output and limit options shared by commands.
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// Output format
    #[arg(short, long, value_enum, env = "TMPLCHECK_OUTPUT", default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Maximum payload size in bytes
    #[arg(long, value_name = "BYTES", env = "TMPLCHECK_MAX_SIZE", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: u64,
}

/// Where the template comes from.
#[derive(Args, Debug, Clone)]
pub struct TemplateArgs {
    /// Template text
    #[arg(short = 't', long, conflicts_with = "template_file")]
    pub template: Option<String>,

    /// Template file (.j2, .jinja, .jinja2, .html, .txt), or `-` for stdin
    #[arg(short = 'T', long, value_name = "PATH")]
    pub template_file: Option<PathBuf>,
}

/// Where the data comes from. Defaults to `{}`.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Data text (JSON or YAML)
    #[arg(short = 'd', long, conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Data file (.json, .yaml, .yml, .csv), or `-` for stdin
    #[arg(short = 'D', long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

fn is_stdin_path(path: Option<&Path>) -> bool {
    path.is_some_and(|p| p == Path::new("-"))
}

/// Resolves the template text.
///
/// With no `--template` or `--template-file`, piped stdin is used.
pub fn resolve_template<R: StdinReader + 'static>(
    args: &TemplateArgs,
    max_size: u64,
    stdin: R,
) -> Result<ResolvedInput, InputError> {
    let wants_stdin = is_stdin_path(args.template_file.as_deref());
    let file = args.template_file.clone().filter(|_| !wants_stdin);
    let implicit_stdin = args.template.is_none() && args.template_file.is_none();

    let mut chain = InputChain::new(PayloadKind::Template)
        .try_source(ArgSource::new(args.template.clone()))
        .try_source(FileSource::new(file, PayloadKind::Template).max_size(max_size))
        .max_size(max_size);
    if wants_stdin || implicit_stdin {
        chain = chain
            .try_source(StdinSource::with_reader(stdin).limit(PayloadKind::Template, max_size));
    }
    chain.resolve()
}

/// Resolves the data text. Stdin is read only for `--data-file -`.
pub fn resolve_data<R: StdinReader + 'static>(
    args: &DataArgs,
    max_size: u64,
    stdin: R,
) -> Result<ResolvedInput, InputError> {
    let wants_stdin = is_stdin_path(args.data_file.as_deref());
    let file = args.data_file.clone().filter(|_| !wants_stdin);

    let mut chain = InputChain::new(PayloadKind::Data)
        .try_source(ArgSource::new(args.data.clone()))
        .try_source(FileSource::new(file, PayloadKind::Data).max_size(max_size))
        .default("{}")
        .max_size(max_size);
    if wants_stdin {
        chain = chain.try_source(StdinSource::with_reader(stdin).limit(PayloadKind::Data, max_size));
    }
    chain.resolve()
}

/// Fails when both payloads would be read from stdin.
pub fn ensure_single_stdin(template: &TemplateArgs, data: &DataArgs) -> Result<(), InputError> {
    let template_stdin = is_stdin_path(template.template_file.as_deref())
        || (template.template.is_none() && template.template_file.is_none());
    if template_stdin && is_stdin_path(data.data_file.as_deref()) {
        return Err(InputError::StdinConflict);
    }
    Ok(())
}

//! Check command - parse data, validate, and render a template.

use anyhow::{Context, Result};
use clap::Args;
use tmplcheck_input::{RealStdin, StdinReader};
use tmplcheck_render::{run, FailureKind, PipelineResult};
use tracing::{debug, info};

use super::{
    ensure_single_stdin, resolve_data, resolve_template, DataArgs, IoArgs, PolicyArgs, TemplateArgs,
};
use crate::output::format_pipeline;
use crate::ExitCodes;

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    #[command(flatten)]
    pub io: IoArgs,
}

pub fn execute(args: CheckArgs) -> Result<u8> {
    let (result, code) = check(&args, RealStdin)?;
    let report = format_pipeline(&result, args.io.output, console::colors_enabled())?;
    println!("{}", report);
    Ok(code)
}

/// Runs the pipeline and picks the exit code for its result.
pub fn check<R: StdinReader + Clone + 'static>(
    args: &CheckArgs,
    stdin: R,
) -> Result<(PipelineResult, u8)> {
    ensure_single_stdin(&args.template, &args.data)?;
    let template = resolve_template(&args.template, args.io.max_size, stdin.clone())
        .context("Failed to load template")?;
    let data =
        resolve_data(&args.data, args.io.max_size, stdin).context("Failed to load data")?;
    debug!(template = %template.source, data = %data.source, "inputs resolved");

    let policy = args.policy.policy();
    info!(
        trim_blocks = policy.trim_blocks(),
        lstrip_blocks = policy.lstrip_blocks(),
        "checking template"
    );
    let result = run(&template.value, &data.value, policy);
    let code = exit_code(result.failure());
    Ok((result, code))
}

pub(crate) fn exit_code(failure: Option<FailureKind>) -> u8 {
    match failure {
        None => ExitCodes::SUCCESS,
        Some(kind) if kind.is_template_rejected() => ExitCodes::TEMPLATE_ERROR,
        Some(FailureKind::Data) => ExitCodes::DATA_ERROR,
        Some(_) => ExitCodes::RENDER_ERROR,
    }
}

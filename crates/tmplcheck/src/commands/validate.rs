//! Validate command - check template syntax without data.

use anyhow::{Context, Result};
use clap::Args;
use tmplcheck_input::{RealStdin, StdinReader};
use tmplcheck_render::{validate, ValidationOutcome};

use super::{resolve_template, IoArgs, PolicyArgs, TemplateArgs};
use crate::output::format_validation;
use crate::ExitCodes;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    #[command(flatten)]
    pub io: IoArgs,
}

pub fn execute(args: ValidateArgs) -> Result<u8> {
    let (outcome, code) = check_syntax(&args, RealStdin)?;
    let report = format_validation(&outcome, args.io.output, console::colors_enabled())?;
    println!("{}", report);
    Ok(code)
}

pub fn check_syntax<R: StdinReader + 'static>(
    args: &ValidateArgs,
    stdin: R,
) -> Result<(ValidationOutcome, u8)> {
    let template = resolve_template(&args.template, args.io.max_size, stdin)
        .context("Failed to load template")?;
    let outcome = validate(&template.value, args.policy.policy());
    let code = if outcome.valid {
        ExitCodes::SUCCESS
    } else {
        ExitCodes::TEMPLATE_ERROR
    };
    Ok((outcome, code))
}

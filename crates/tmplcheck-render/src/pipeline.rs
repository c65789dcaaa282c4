//! The parse → validate → render pipeline.
//!
//! [`run`] is the one operation outside callers need. Stages run in a fixed
//! order and the first failure short-circuits:
//!
//! 1. Parse the data payload (JSON, then YAML, empty means `{}`)
//! 2. Check template syntax
//! 3. Render with the parsed data bound as top-level names
//!
//! A data error is reported before the template is looked at, and a syntax
//! error is reported before any rendering is attempted.

use tracing::debug;

use crate::data::parse_data;
use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::CheckError;
use crate::outcome::PipelineResult;
use crate::policy::WhitespacePolicy;

/// Runs the full pipeline with the default engine.
///
/// # Example
///
/// ```rust
/// use tmplcheck_render::{run, WhitespacePolicy};
///
/// let result = run("Hi {{ name }}", r#"{"name": "Ada"}"#, WhitespacePolicy::default());
/// assert!(result.is_valid());
/// assert_eq!(result.rendered_output(), Some("Hi Ada"));
///
/// let result = run("{{ name }", "{}", WhitespacePolicy::default());
/// assert!(!result.is_valid());
/// assert!(result.result().starts_with("Template syntax error"));
/// ```
pub fn run(template: &str, data: &str, policy: WhitespacePolicy) -> PipelineResult {
    run_with_engine(&MiniJinjaEngine::new(policy), template, data)
}

/// Runs the full pipeline with a caller-supplied engine.
pub fn run_with_engine(
    engine: &dyn TemplateEngine,
    template: &str,
    data: &str,
) -> PipelineResult {
    let policy = engine.policy();
    debug!(
        trim_blocks = policy.trim_blocks(),
        lstrip_blocks = policy.lstrip_blocks(),
        "running pipeline"
    );
    let result = execute(engine, template, data);
    match &result {
        Ok(_) => debug!("pipeline succeeded"),
        Err(err) => debug!(stage = %err.kind(), "pipeline failed"),
    }
    result.into()
}

fn execute(engine: &dyn TemplateEngine, template: &str, data: &str) -> Result<String, CheckError> {
    let parsed = parse_data(data)?;
    engine.check_syntax(template)?;
    engine.render_template(template, &parsed.value)
}

//! Output formatting for command results.
//!
//! [`OutputFormat`] decides how a result record reaches stdout: a human
//! report, or the record serialized as JSON or YAML. Structured formats carry
//! the same three fields a JSON caller of the core would see.

use clap::ValueEnum;
use console::Style;
use serde::Serialize;
use thiserror::Error;
use tmplcheck_render::{PipelineResult, ValidationOutcome};

/// Marker line between the report and the rendered text.
pub const RENDERED_SEPARATOR: &str = "--- rendered output ---";

/// Controls how results are printed.
///
/// This is the user-facing enum for the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Result record as JSON
    Json,
    /// Result record as YAML
    Yaml,
}

impl OutputFormat {
    /// Returns true for JSON and YAML.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }
}

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Not a structured output format")]
    NotStructured,
}

/// Serializes a record to the given structured format.
pub fn serialize_structured<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<String, SerializeError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputFormat::Text => Err(SerializeError::NotStructured),
    }
}

/// Formats a pipeline result.
pub fn format_pipeline(
    result: &PipelineResult,
    format: OutputFormat,
    styled: bool,
) -> Result<String, SerializeError> {
    if format.is_structured() {
        return serialize_structured(result, format);
    }

    let mut out = status_line(result.is_valid(), result.result(), styled);
    if let Some(rendered) = result.rendered_output() {
        out.push('\n');
        let separator = Style::new().dim().force_styling(styled);
        out.push_str(&separator.apply_to(RENDERED_SEPARATOR).to_string());
        out.push('\n');
        out.push_str(rendered);
    }
    Ok(out)
}

/// Formats a syntax-check outcome.
pub fn format_validation(
    outcome: &ValidationOutcome,
    format: OutputFormat,
    styled: bool,
) -> Result<String, SerializeError> {
    if format.is_structured() {
        return serialize_structured(outcome, format);
    }
    Ok(status_line(outcome.valid, &outcome.message, styled))
}

fn status_line(ok: bool, message: &str, styled: bool) -> String {
    let (marker, style) = if ok {
        ("ok", Style::new().green().bold())
    } else {
        ("error", Style::new().red().bold())
    };
    format!("{}: {}", style.force_styling(styled).apply_to(marker), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use tmplcheck_render::{run, validate, WhitespacePolicy};

    #[test]
    fn text_report_for_success() {
        let result = run("Hi {{ name }}", "name: Ada", WhitespacePolicy::default());
        let out = format_pipeline(&result, OutputFormat::Text, false).unwrap();
        assert_snapshot!(out, @r###"
        ok: Template is valid
        --- rendered output ---
        Hi Ada
        "###);
    }

    #[test]
    fn text_report_for_failure_has_no_separator() {
        let result = run("{{ y }}", "{}", WhitespacePolicy::default());
        let out = format_pipeline(&result, OutputFormat::Text, false).unwrap();
        assert!(out.starts_with("error: Error rendering template"));
        assert!(!out.contains(RENDERED_SEPARATOR));
    }

    #[test]
    fn json_report_has_three_fields() {
        let result = run("{{ x }}", r#"{"x": 1}"#, WhitespacePolicy::default());
        let out = format_pipeline(&result, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"is_valid": true, "result": "Template is valid", "rendered_output": "1"})
        );
    }

    #[test]
    fn yaml_validation_outcome() {
        let outcome = validate("{% if %}", WhitespacePolicy::default());
        let out = format_validation(&outcome, OutputFormat::Yaml, false).unwrap();
        assert!(out.starts_with("valid: false\nmessage: "));
    }

    #[test]
    fn text_is_not_structured() {
        assert!(!OutputFormat::Text.is_structured());
        assert!(matches!(
            serialize_structured(&1, OutputFormat::Text),
            Err(SerializeError::NotStructured)
        ));
    }
}

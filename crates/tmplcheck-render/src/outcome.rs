//! Result records produced by the validator, the renderer and the pipeline.

use serde::Serialize;

use crate::error::{CheckError, FailureKind};

/// Message reported for a template that parses cleanly.
pub const SYNTAX_VALID_MESSAGE: &str = "Template syntax is valid";

/// Message reported when the whole pipeline succeeds.
pub const PIPELINE_VALID_MESSAGE: &str = "Template is valid";

/// Result of a syntax check. Always carries a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl From<Result<(), CheckError>> for ValidationOutcome {
    fn from(result: Result<(), CheckError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                message: SYNTAX_VALID_MESSAGE.to_string(),
            },
            Err(err) => Self {
                valid: false,
                message: err.to_string(),
            },
        }
    }
}

/// Result of a render attempt.
///
/// Exactly one of `output` and `message` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutcome {
    pub succeeded: bool,
    pub output: Option<String>,
    pub message: Option<String>,
}

impl From<Result<String, CheckError>> for RenderOutcome {
    fn from(result: Result<String, CheckError>) -> Self {
        match result {
            Ok(output) => Self {
                succeeded: true,
                output: Some(output),
                message: None,
            },
            Err(err) => Self {
                succeeded: false,
                output: None,
                message: Some(err.to_string()),
            },
        }
    }
}

/// The single record handed to every outside caller.
///
/// Serializes as `{"is_valid", "result", "rendered_output"}`. The rendered
/// output is present only when `is_valid` is true. Syntax failures and render
/// failures both serialize with `is_valid: false`; use [`failure`](Self::failure)
/// to tell them apart in-process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    is_valid: bool,
    result: String,
    rendered_output: Option<String>,
    #[serde(skip)]
    failure: Option<FailureKind>,
}

impl PipelineResult {
    /// A successful run with its rendered text.
    pub fn rendered(output: String) -> Self {
        Self {
            is_valid: true,
            result: PIPELINE_VALID_MESSAGE.to_string(),
            rendered_output: Some(output),
            failure: None,
        }
    }

    /// A failed run; the error's message becomes `result`.
    pub fn failed(err: &CheckError) -> Self {
        Self {
            is_valid: false,
            result: err.to_string(),
            rendered_output: None,
            failure: Some(err.kind()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The human-readable status or failure cause.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn rendered_output(&self) -> Option<&str> {
        self.rendered_output.as_deref()
    }

    /// Which stage failed, or `None` on success.
    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }
}

impl From<Result<String, CheckError>> for PipelineResult {
    fn from(result: Result<String, CheckError>) -> Self {
        match result {
            Ok(output) => Self::rendered(output),
            Err(err) => Self::failed(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_outcome_from_result() {
        let ok = ValidationOutcome::from(Ok(()));
        assert!(ok.valid);
        assert_eq!(ok.message, "Template syntax is valid");

        let bad = ValidationOutcome::from(Err(CheckError::Syntax("unexpected `}`".into())));
        assert!(!bad.valid);
        assert_eq!(bad.message, "Template syntax error: unexpected `}`");
    }

    #[test]
    fn test_render_outcome_from_result() {
        let ok = RenderOutcome::from(Ok("hi".to_string()));
        assert_eq!(ok.output.as_deref(), Some("hi"));
        assert!(ok.message.is_none());

        let bad = RenderOutcome::from(Err(CheckError::Render("undefined value".into())));
        assert!(!bad.succeeded);
        assert!(bad.output.is_none());
        assert_eq!(
            bad.message.as_deref(),
            Some("Error rendering template: undefined value")
        );
    }

    #[test]
    fn test_pipeline_result_serializes_three_fields() {
        let ok = serde_json::to_value(PipelineResult::rendered("x".into())).unwrap();
        assert_eq!(
            ok,
            serde_json::json!({"is_valid": true, "result": "Template is valid", "rendered_output": "x"})
        );

        let bad = serde_json::to_value(PipelineResult::failed(&CheckError::Data("eof".into())))
            .unwrap();
        assert_eq!(
            bad,
            serde_json::json!({
                "is_valid": false,
                "result": "Invalid data format: eof",
                "rendered_output": null
            })
        );
    }

    #[test]
    fn test_failure_kind_is_tracked() {
        let result = PipelineResult::failed(&CheckError::Render("boom".into()));
        assert_eq!(result.failure(), Some(FailureKind::Render));
        assert!(result.rendered_output().is_none());
        assert_eq!(PipelineResult::rendered(String::new()).failure(), None);
    }
}

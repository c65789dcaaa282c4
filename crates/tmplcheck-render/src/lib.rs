//! # tmplcheck-render - Template Validation and Rendering
//!
//! `tmplcheck-render` checks Jinja-style templates for syntax errors and renders
//! them against JSON or YAML data, reporting every failure as a classified
//! result instead of a panic or an opaque error.
//!
//! ## Core Concepts
//!
//! - [`parse_data`]: Parse a payload as JSON, falling back to YAML
//! - [`WhitespacePolicy`]: The `trim_blocks` / `lstrip_blocks` pair
//! - [`validate`]: Check template syntax without touching data
//! - [`render`]: Evaluate a template with data bound as top-level names
//! - [`run`]: The whole pipeline, producing one [`PipelineResult`]
//! - [`CheckError`]: Tagged failure, one variant per stage
//!
//! ## Quick Start
//!
//! ```rust
//! use tmplcheck_render::{run, WhitespacePolicy};
//!
//! let result = run(
//!     "{% if a %}\nyes\n{% endif %}",
//!     r#"{"a": true}"#,
//!     WhitespacePolicy::default(),
//! );
//! assert!(result.is_valid());
//! assert_eq!(result.rendered_output(), Some("yes\n"));
//! ```
//!
//! ## Failure Classes
//!
//! | Stage | Variant | Message prefix |
//! |-------|---------|----------------|
//! | Data parsing | [`CheckError::Data`] | `Invalid data format:` |
//! | Syntax check | [`CheckError::Syntax`] | `Template syntax error:` |
//! | Syntax check | [`CheckError::Validation`] | `Error validating template:` |
//! | Rendering | [`CheckError::Render`] | `Error rendering template:` |
//!
//! Undefined names are a render-time failure: `{{ y }}` is valid syntax and
//! fails only when `y` is not bound.

pub mod data;
pub mod engine;
mod error;
pub mod format;
mod outcome;
mod pipeline;
mod policy;

pub use data::{parse_as, parse_data, parse_json, parse_yaml, DataFormat, ParsedData};
pub use engine::{environment, render, validate, Bindings, MiniJinjaEngine, TemplateEngine};
pub use error::{CheckError, FailureKind};
pub use format::{reformat, FormatError};
pub use outcome::{
    PipelineResult, RenderOutcome, ValidationOutcome, PIPELINE_VALID_MESSAGE,
    SYNTAX_VALID_MESSAGE,
};
pub use pipeline::{run, run_with_engine};
pub use policy::WhitespacePolicy;

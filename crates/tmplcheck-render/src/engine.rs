//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait, the seam between the
//! pipeline and the template backend. The default implementation is
//! [`MiniJinjaEngine`], which builds a fresh MiniJinja environment for every
//! call through the [`environment`] factory. Nothing is cached between calls,
//! so engines are trivially `Send + Sync`.

use std::collections::BTreeMap;

use minijinja::value::ValueKind;
use minijinja::{
    escape_formatter, Environment, Error, ErrorKind, Output, State, UndefinedBehavior, Value,
};
use tracing::debug;

use crate::error::CheckError;
use crate::outcome::{RenderOutcome, ValidationOutcome};
use crate::policy::WhitespacePolicy;

/// Builds a template environment for one validate or render call.
///
/// The environment carries the whitespace policy and strict undefined
/// handling: referencing a name that is not bound fails at render time.
/// Printing `inf` or `NaN` (division by zero in float arithmetic) also
/// fails. No custom filters are registered.
pub fn environment<'source>(policy: WhitespacePolicy) -> Environment<'source> {
    let mut env = Environment::new();
    policy.configure(&mut env);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_formatter(finite_formatter);
    env
}

fn finite_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), Error> {
    if value.kind() == ValueKind::Number {
        if let Ok(number) = f64::try_from(value.clone()) {
            if !number.is_finite() {
                return Err(Error::new(
                    ErrorKind::InvalidOperation,
                    format!("cannot output non-finite number {} (division by zero?)", number),
                ));
            }
        }
    }
    escape_formatter(out, state, value)
}

/// Top-level names visible to a template.
///
/// Each entry of the data mapping becomes a directly referenceable name;
/// nested structures stay reachable through attribute and index access
/// (`{{ user.name }}`, `{{ items[0] }}`).
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    names: BTreeMap<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds every entry of a mapping as a top-level name.
    ///
    /// Fails with [`CheckError::Render`] when `data` is not a mapping, since
    /// there are no names to bind.
    pub fn from_mapping(data: &serde_json::Value) -> Result<Self, CheckError> {
        let map = data.as_object().ok_or_else(|| {
            CheckError::Render(format!(
                "data must be a mapping of names to values, got {}",
                kind_name(data)
            ))
        })?;

        let mut bindings = Self::new();
        for (name, value) in map {
            bindings.bind(name.clone(), value);
        }
        Ok(bindings)
    }

    /// Binds one name, replacing any previous value.
    pub fn bind(&mut self, name: impl Into<String>, value: &serde_json::Value) {
        self.names.insert(name.into(), Value::from_serialize(value));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn into_context(self) -> Value {
        Value::from(self.names)
    }
}

fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}

/// A template backend that can check and render template text.
///
/// Implementors provide the two `Result`-returning primitives; the
/// outcome-returning methods are derived from them.
pub trait TemplateEngine: Send + Sync {
    /// The whitespace policy used for both checking and rendering.
    fn policy(&self) -> WhitespacePolicy;

    /// Parses the template without evaluating it.
    ///
    /// Returns [`CheckError::Syntax`] for grammar errors and
    /// [`CheckError::Validation`] for any other compile failure.
    fn check_syntax(&self, template: &str) -> Result<(), CheckError>;

    /// Compiles and evaluates the template with `data` bound as top-level names.
    ///
    /// Every failure is reported as [`CheckError::Render`].
    fn render_template(&self, template: &str, data: &serde_json::Value)
        -> Result<String, CheckError>;

    /// Validates the template, producing a [`ValidationOutcome`].
    fn validate(&self, template: &str) -> ValidationOutcome {
        self.check_syntax(template).into()
    }

    /// Renders the template, producing a [`RenderOutcome`].
    fn render(&self, template: &str, data: &serde_json::Value) -> RenderOutcome {
        self.render_template(template, data).into()
    }
}

/// MiniJinja-based template engine.
///
/// Jinja2-compatible syntax with the engine's built-in filters and tests.
///
/// # Example
///
/// ```rust
/// use tmplcheck_render::{MiniJinjaEngine, TemplateEngine, WhitespacePolicy};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new(WhitespacePolicy::default());
/// let output = engine
///     .render_template("Hello, {{ name }}!", &json!({"name": "World"}))
///     .unwrap();
/// assert_eq!(output, "Hello, World!");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinjaEngine {
    policy: WhitespacePolicy,
}

impl MiniJinjaEngine {
    pub fn new(policy: WhitespacePolicy) -> Self {
        Self { policy }
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn policy(&self) -> WhitespacePolicy {
        self.policy
    }

    fn check_syntax(&self, template: &str) -> Result<(), CheckError> {
        let env = environment(self.policy);
        env.template_from_str(template)
            .map(|_| ())
            .map_err(|err| CheckError::from_compile(&err))?;
        debug!(bytes = template.len(), "template syntax is valid");
        Ok(())
    }

    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, CheckError> {
        let env = environment(self.policy);
        let compiled = env
            .template_from_str(template)
            .map_err(|err| CheckError::from_eval(&err))?;
        let bindings = Bindings::from_mapping(data)?;
        debug!(names = bindings.len(), "rendering template");
        compiled
            .render(bindings.into_context())
            .map_err(|err| CheckError::from_eval(&err))
    }
}

/// Checks template syntax under `policy`.
pub fn validate(template: &str, policy: WhitespacePolicy) -> ValidationOutcome {
    MiniJinjaEngine::new(policy).validate(template)
}

/// Renders a template against `data` under `policy`.
///
/// Safe to call without validating first: compile errors are reported as
/// render failures.
pub fn render(template: &str, data: &serde_json::Value, policy: WhitespacePolicy) -> RenderOutcome {
    MiniJinjaEngine::new(policy).render(template, data)
}

//! Data payload parsing with JSON-then-YAML fallback.
//!
//! The payload is tried as JSON first. Only when JSON fails is YAML tried, so
//! any strictly valid JSON text is always read as JSON even where YAML would
//! produce a different value. When both fail, the YAML error is reported since
//! YAML is the more permissive format and the last one attempted.
//!
//! YAML values are normalized into [`serde_json::Value`]:
//!
//! - tagged values (`!foo bar`) unwrap to their inner value
//! - non-string mapping keys are stringified (`1: a` becomes `{"1": "a"}`)
//! - non-finite floats become the strings `.inf`, `-.inf` and `.nan`

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Number, Value};
use tracing::{debug, trace};

use crate::error::CheckError;

/// The serialization format a payload was read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DataFormat::Json),
            "yaml" | "yml" => Ok(DataFormat::Yaml),
            other => Err(format!("unknown data format: {}", other)),
        }
    }
}

/// A parsed payload and the format that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedData {
    pub value: Value,
    /// `None` when the payload was empty and defaulted to `{}`.
    pub format: Option<DataFormat>,
}

impl ParsedData {
    /// The value used for an empty payload.
    pub fn empty() -> Self {
        Self {
            value: Value::Object(Map::new()),
            format: None,
        }
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Parses a raw payload, trying JSON and then YAML.
///
/// Empty or whitespace-only text yields an empty mapping.
///
/// # Example
///
/// ```rust
/// use tmplcheck_render::{parse_data, DataFormat};
///
/// let parsed = parse_data("name: widget").unwrap();
/// assert_eq!(parsed.format, Some(DataFormat::Yaml));
/// assert_eq!(parsed.value["name"], "widget");
/// ```
pub fn parse_data(raw: &str) -> Result<ParsedData, CheckError> {
    trace!(bytes = raw.len(), "parsing data payload");

    if raw.trim().is_empty() {
        debug!("empty data payload, using an empty mapping");
        return Ok(ParsedData::empty());
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => {
            debug!(format = "json", "data payload parsed");
            return Ok(ParsedData {
                value,
                format: Some(DataFormat::Json),
            });
        }
        Err(err) => trace!(error = %err, "payload is not JSON, trying YAML"),
    }

    let value = parse_yaml(raw)?;
    debug!(format = "yaml", "data payload parsed");
    Ok(ParsedData {
        value,
        format: Some(DataFormat::Yaml),
    })
}

/// Parses a payload as JSON only.
pub fn parse_json(raw: &str) -> Result<Value, CheckError> {
    serde_json::from_str(raw).map_err(|e| CheckError::Data(e.to_string()))
}

/// Parses a payload as YAML only.
///
/// An empty YAML document is `null`.
pub fn parse_yaml(raw: &str) -> Result<Value, CheckError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(raw).map_err(|e| CheckError::Data(e.to_string()))?;
    Ok(yaml_to_json(yaml))
}

/// Parses a payload in one explicit format.
pub fn parse_as(raw: &str, format: DataFormat) -> Result<Value, CheckError> {
    match format {
        DataFormat::Json => parse_json(raw),
        DataFormat::Yaml => parse_yaml(raw),
    }
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key(key), yaml_to_json(value));
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Number(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Value::Number(u.into());
    }
    let f = n.as_f64().unwrap_or(f64::NAN);
    match Number::from_f64(f) {
        Some(num) => Value::Number(num),
        None if f.is_nan() => Value::String(".nan".to_string()),
        None if f.is_sign_negative() => Value::String("-.inf".to_string()),
        None => Value::String(".inf".to_string()),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match yaml_to_json(key) {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

//! Pretty-printing of parsed data for display.
//!
//! Re-serializes a structured value as canonical JSON (two-space indent) or
//! YAML. This is a display helper for loaded data files and plays no part in
//! validation or rendering.

use serde_json::Value;
use thiserror::Error;

use crate::data::DataFormat;

/// Errors that can occur while re-serializing data.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serializes a value in the requested format.
pub fn reformat(value: &Value, format: DataFormat) -> Result<String, FormatError> {
    match format {
        DataFormat::Json => to_json(value),
        DataFormat::Yaml => to_yaml(value),
    }
}

/// Serializes a value to indented JSON.
pub fn to_json(value: &Value) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serializes a value to YAML.
pub fn to_yaml(value: &Value) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn test_to_json_keeps_key_order() {
        let value = crate::data::parse_yaml("zeta: 1\nalpha: [a, b]\n").unwrap();
        assert_snapshot!(to_json(&value).unwrap(), @r###"
        {
          "zeta": 1,
          "alpha": [
            "a",
            "b"
          ]
        }
        "###);
    }

    #[test]
    fn test_to_yaml() {
        let value = json!({"name": "widget", "sizes": [1, 2]});
        assert_snapshot!(to_yaml(&value).unwrap(), @r###"
        name: widget
        sizes:
        - 1
        - 2
        "###);
    }

    #[test]
    fn test_reformat_dispatches_on_format() {
        let value = json!({"a": true});
        assert_eq!(reformat(&value, DataFormat::Json).unwrap(), "{\n  \"a\": true\n}");
        assert_eq!(reformat(&value, DataFormat::Yaml).unwrap(), "a: true\n");
    }
}

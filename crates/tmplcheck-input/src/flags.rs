//! Text-to-boolean parsing for option flags.
//!
//! Flags arrive as text (`--trim-blocks false`, `TMPLCHECK_TRIM_BLOCKS=0`) and
//! are turned into booleans here, before any policy is built.

use crate::InputError;

/// Parses a boolean flag value.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`,
/// case-insensitively and ignoring surrounding whitespace.
pub fn parse_flag(name: &str, value: &str) -> Result<bool, InputError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(InputError::InvalidFlag {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_truthy_and_falsy() {
        for value in ["true", "TRUE", " True ", "1", "yes", "on"] {
            assert!(parse_flag("trim_blocks", value).unwrap(), "{}", value);
        }
        for value in ["false", "False", "0", "no", "OFF"] {
            assert!(!parse_flag("trim_blocks", value).unwrap(), "{}", value);
        }
    }

    #[test]
    fn rejects_other_text() {
        let err = parse_flag("lstrip_blocks", "maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'maybe' for lstrip_blocks: expected true or false"
        );
    }
}

//! Per-field rules of a performance data metric.
//!
//! The character-class rules search the input rather than matching it as a
//! whole: a field passes as soon as one run of allowed characters is found
//! anywhere in it.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::Field;

/// Characters not allowed in the Label field.
pub const LABEL_DISALLOWED_CHARS: &str = "='";

/// Characters not allowed in the UnitOfMeasurement field.
pub const UOM_DISALLOWED_CHARS: &str = "0123456789;'\"";

/// The Value field literal used when the actual value is unknown.
pub const UNKNOWN_VALUE: &str = "U";

lazy_static! {
    static ref VALUE_RE: Regex = Regex::new(r"[-0-9.]+|U").unwrap();
    static ref MIN_MAX_RE: Regex = Regex::new(r"[-0-9.]+").unwrap();
    static ref THRESHOLD_RANGE_RE: Regex = Regex::new(r"[0-9~@:]+").unwrap();
}

/// Label must be non-empty and must not contain `=` or `'`. Quotes around a
/// label are stripped before this check, so a surviving quote is malformed
/// input.
pub fn validate_label(input: &str) -> Result<()> {
    let input = input.trim();

    if !input.is_empty() && !input.contains(|c: char| LABEL_DISALLOWED_CHARS.contains(c)) {
        return Ok(());
    }

    Err(disallowed_chars(Field::Label, input, LABEL_DISALLOWED_CHARS))
}

/// Value is either the literal `U` or contains characters of class `[-0-9.]`.
pub fn validate_value(input: &str) -> Result<()> {
    matches_class(Field::Value, &VALUE_RE, input.trim())
}

/// UnitOfMeasurement may be empty, otherwise it must not contain digits,
/// semicolons or quotes.
pub fn validate_uom(input: &str) -> Result<()> {
    let input = input.trim();

    if !input.contains(|c: char| UOM_DISALLOWED_CHARS.contains(c)) {
        return Ok(());
    }

    Err(disallowed_chars(
        Field::UnitOfMeasurement,
        input,
        UOM_DISALLOWED_CHARS,
    ))
}

/// Warn may be empty, otherwise it is in the threshold range syntax.
pub fn validate_warn(input: &str) -> Result<()> {
    optional(Field::Warn, &THRESHOLD_RANGE_RE, input)
}

/// Crit may be empty, otherwise it is in the threshold range syntax.
pub fn validate_crit(input: &str) -> Result<()> {
    optional(Field::Crit, &THRESHOLD_RANGE_RE, input)
}

/// Min may be empty, otherwise it is in class `[-0-9.]`.
pub fn validate_min(input: &str) -> Result<()> {
    optional(Field::Min, &MIN_MAX_RE, input)
}

/// Max may be empty, otherwise it is in class `[-0-9.]`.
pub fn validate_max(input: &str) -> Result<()> {
    optional(Field::Max, &MIN_MAX_RE, input)
}

fn optional(field: Field, re: &Regex, input: &str) -> Result<()> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }
    matches_class(field, re, input)
}

fn matches_class(field: Field, re: &Regex, input: &str) -> Result<()> {
    if re.is_match(input) {
        return Ok(());
    }

    Err(Error::invalid_format(format!("field {} fails validation", field)).in_field(field))
}

fn disallowed_chars(field: Field, input: &str, disallowed: &str) -> Error {
    Error::invalid_format(format!(
        "input string {:?} contains disallowed character from set {:?}",
        input, disallowed
    ))
    .in_field(field)
    .context(format!("field {} fails validation", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rejected(result: Result<()>, field: Field, input: &str) {
        match result {
            Err(e) => {
                assert!(e.is_invalid_format(), "while validating {:?}", input);
                assert_eq!(e.field(), Some(field), "while validating {:?}", input);
            }
            Ok(()) => panic!("expected {} rule to reject {:?}", field, input),
        }
    }

    #[test]
    fn test_validate_label() {
        for input in &["load1", "response time", " padded ", "a\"b", "ünïcode", "a;b"] {
            assert!(validate_label(input).is_ok(), "while validating {:?}", input);
        }

        for input in &["", "   ", "a=b", "it's", "'quoted'", "="] {
            assert_rejected(validate_label(input), Field::Label, input);
        }
    }

    #[test]
    fn test_validate_label_message() {
        let err = validate_label("a=b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "field Label fails validation: input string \"a=b\" contains disallowed \
             character from set \"='\": invalid performance data format"
        );
    }

    #[test]
    fn test_validate_value() {
        for input in &["0", "0.26", "-1.5", "U", "...", " 42 "] {
            assert!(validate_value(input).is_ok(), "while validating {:?}", input);
        }

        for input in &["", "abc", "u", "ms"] {
            assert_rejected(validate_value(input), Field::Value, input);
        }
    }

    #[test]
    fn test_validate_value_is_unanchored() {
        // Any qualifying run anywhere in the input is enough.
        for input in &["1x", "x1", "xUx", "abc-def"] {
            assert!(validate_value(input).is_ok(), "while validating {:?}", input);
        }
    }

    #[test]
    fn test_validate_uom() {
        for input in &["", "   ", "%", "ms", "B", "KB", "c", "s/m"] {
            assert!(validate_uom(input).is_ok(), "while validating {:?}", input);
        }

        for input in &["m5", "1", "%;", "'", "\"s\""] {
            assert_rejected(validate_uom(input), Field::UnitOfMeasurement, input);
        }
    }

    #[test]
    fn test_validate_threshold_ranges() {
        for input in &["", " ", "10", "10:", "~:10", "10:20", "@10:20", "@~:0"] {
            assert!(validate_warn(input).is_ok(), "while validating {:?}", input);
            assert!(validate_crit(input).is_ok(), "while validating {:?}", input);
        }

        for input in &["abc", "-", ".", "x-y"] {
            assert_rejected(validate_warn(input), Field::Warn, input);
            assert_rejected(validate_crit(input), Field::Crit, input);
        }
    }

    #[test]
    fn test_validate_threshold_ranges_are_unanchored() {
        // Negative and fractional thresholds pass on their digits only.
        for input in &["-5", "0.5", "a1"] {
            assert!(validate_warn(input).is_ok(), "while validating {:?}", input);
        }
    }

    #[test]
    fn test_validate_min_max() {
        for input in &["", "0", "-10", "1.5", "."] {
            assert!(validate_min(input).is_ok(), "while validating {:?}", input);
            assert!(validate_max(input).is_ok(), "while validating {:?}", input);
        }

        // Range syntax is not numeric syntax.
        for input in &["~", "@", ":", "abc"] {
            assert_rejected(validate_min(input), Field::Min, input);
            assert_rejected(validate_max(input), Field::Max, input);
        }
    }
}

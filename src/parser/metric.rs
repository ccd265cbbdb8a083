use lazy_static::lazy_static;
use regex::Regex;

use super::fields::{
    validate_crit, validate_label, validate_max, validate_min, validate_uom, validate_value,
    validate_warn, UNKNOWN_VALUE,
};
use super::result::Span;
use super::tokenizer::{label_and_raw_value, metric_fields};
use crate::error::{Error, Result};
use crate::model::Metric;

lazy_static! {
    // Value is required, the unit of measurement that follows it is not.
    static ref VALUE_AND_UOM_RE: Regex =
        Regex::new(r#"(?P<value>[-0-9.]+)(?P<uom>[^0-9;'"]*)?"#).unwrap();
}

/// Parses a single metric, e.g. `load1=0.260;5.000;10.000;0;`, into a
/// `Metric`. The input must already be isolated from its sibling metrics.
pub fn parse_metric(input: Span) -> Result<Metric> {
    let fields = metric_fields(input)?;

    let (label, raw_value) = extract_label_and_raw_value(fields[0])
        .map_err(|e| e.context("failed to extract label and raw value"))?;

    let (value, uom) =
        extract_value_and_uom(raw_value).map_err(|e| e.context("failed to extract value and uom"))?;

    let raw = |i: usize| fields.get(i).map_or("", |f| *f.fragment());

    let warn = parse_field(raw(1), validate_warn)
        .map_err(|e| e.context("failed to parse warn field"))?;
    let crit = parse_field(raw(2), validate_crit)
        .map_err(|e| e.context("failed to parse crit field"))?;
    let min =
        parse_field(raw(3), validate_min).map_err(|e| e.context("failed to parse min field"))?;
    let max =
        parse_field(raw(4), validate_max).map_err(|e| e.context("failed to parse max field"))?;

    Ok(Metric::from_parts(label, value, uom, warn, crit, min, max))
}

/// Extracts the label and the raw value from the first field of a metric.
/// The raw value still holds the unit of measurement.
fn extract_label_and_raw_value(input: Span) -> Result<(String, &str)> {
    if input.fragment().is_empty() {
        return Err(Error::invalid_format(format!(
            "empty label and value field at offset {}",
            input.location_offset()
        )));
    }

    let (raw_label, raw_value) = label_and_raw_value(input).map_err(|e| {
        e.context(format!(
            "failed to obtain metric label and raw value from field {:?}",
            input.fragment()
        ))
    })?;

    // Quotes are required around labels with spaces; either way they are
    // not part of the label.
    let label = raw_label.fragment().trim_matches('\'').trim();

    validate_label(label).map_err(|e| {
        e.context(format!(
            "failed to extract Label field from input string {:?}",
            input.fragment()
        ))
    })?;

    let raw_value: &str = *raw_value.fragment();
    let raw_value = raw_value.trim();
    if raw_value.is_empty() {
        return Err(Error::invalid_format(format!(
            "metric value is not present in input string {:?}",
            input.fragment()
        )));
    }

    Ok((label.to_string(), raw_value))
}

/// Splits a raw value such as `120ms` into the value and the unit of
/// measurement.
fn extract_value_and_uom(input: &str) -> Result<(String, String)> {
    if input.is_empty() {
        return Err(Error::invalid_format("empty raw value"));
    }

    if input == UNKNOWN_VALUE {
        return Ok((input.to_string(), String::new()));
    }

    let caps = VALUE_AND_UOM_RE.captures(input).ok_or_else(|| {
        Error::invalid_format(format!(
            "failed to extract Value and UoM fields from input string {:?}",
            input
        ))
    })?;

    let value = caps.name("value").map_or("", |m| m.as_str());
    validate_value(value).map_err(|e| {
        e.context(format!(
            "failed to extract Value field from input string {:?}",
            input
        ))
    })?;

    let uom = caps.name("uom").map_or("", |m| m.as_str());
    validate_uom(uom).map_err(|e| {
        e.context(format!(
            "failed to extract UnitOfMeasurement field from input string {:?}",
            input
        ))
    })?;

    Ok((value.to_string(), uom.to_string()))
}

fn parse_field<F>(input: &str, validate: F) -> Result<String>
where
    F: Fn(&str) -> Result<()>,
{
    let input = input.trim();
    validate(input)?;
    Ok(input.to_string())
}

use proptest::prelude::*;

use perfdata::parser::fields::validate_uom;
use perfdata::{parse_perfdata, render_all, ErrorKind, Field, Metric};

#[test]
fn trailing_separator_is_optional() -> Result<(), perfdata::Error> {
    assert_eq!(
        parse_perfdata("load1=0.26;5;10;0;")?,
        parse_perfdata("load1=0.26;5;10;0")?
    );
    Ok(())
}

#[test]
fn unknown_value() -> Result<(), perfdata::Error> {
    let metrics = parse_perfdata("users=U")?;
    assert_eq!(metrics, vec![Metric::new("users", "U")]);
    assert_eq!(metrics[0].uom(), "");
    Ok(())
}

#[test]
fn quoted_label_with_spaces() -> Result<(), perfdata::Error> {
    let metrics = parse_perfdata("'response time'=120ms;200;500;;")?;
    assert_eq!(metrics.len(), 1);

    let m = &metrics[0];
    assert_eq!(
        (m.label(), m.value(), m.uom(), m.warn(), m.crit(), m.min(), m.max()),
        ("response time", "120", "ms", "200", "500", "", "")
    );
    Ok(())
}

#[test]
fn batch_order_is_kept() -> Result<(), perfdata::Error> {
    let metrics = parse_perfdata("load1=0.26;5;10;0; load5=0.32;4;6;0; load15=0.30;3;4;0;")?;
    let labels: Vec<&str> = metrics.iter().map(Metric::label).collect();
    assert_eq!(labels, vec!["load1", "load5", "load15"]);
    Ok(())
}

#[test]
fn rejections_are_invalid_format() {
    #[rustfmt::skip]
    let tests = [
        "",
        "  \t ",
        "load1=0.26;5;10;0;100;",
        "load1",
        "'it's'=1",
    ];

    for input in &tests {
        let err = parse_perfdata(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat, "while parsing {:?}", input);
    }

    // The value/UoM split never captures digits into the unit, so a UoM with
    // a digit can only reach the UoM rule directly.
    let err = validate_uom("k8s").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert_eq!(err.field(), Some(Field::UnitOfMeasurement));
}

#[test]
fn errors_expose_their_source() {
    use std::error::Error;

    let err = parse_perfdata("a=1;;x").unwrap_err();
    let mut depth = 0;
    let mut source = err.source();
    while let Some(e) = source {
        depth += 1;
        source = e.source();
    }
    // metric -> crit field -> crit rule
    assert_eq!(depth, 2);
}

#[test]
fn validation_is_idempotent() -> Result<(), perfdata::Error> {
    let metric: Metric = "load1=0.26;5;10;0;".parse()?;
    let before = metric.clone();
    assert!(metric.validate().is_ok());
    assert!(metric.validate().is_ok());
    assert_eq!(metric, before);

    let incomplete = Metric::new("load1", "");
    assert_eq!(
        incomplete.validate().unwrap_err().kind(),
        ErrorKind::MissingValue
    );
    assert_eq!(
        incomplete.validate().unwrap_err().kind(),
        ErrorKind::MissingValue
    );
    Ok(())
}

fn metric_strategy() -> impl Strategy<Value = Metric> {
    let label = "[a-zA-Z_]([a-zA-Z0-9_ /.-]{0,14}[a-zA-Z0-9_])?";
    let number = "-?[0-9]{1,5}(\\.[0-9]{1,3})?";
    let value_and_uom = prop_oneof![
        Just(("U".to_string(), String::new())),
        (number, "(%|s|ms|us|B|KB|MB|c)?"),
    ];
    let range = "(@?([0-9]{1,3}|~):?[0-9]{0,3})?";
    let bound = "(-?[0-9]{1,4}(\\.[0-9]{1,2})?)?";

    (label, value_and_uom, range, range, bound, bound).prop_map(
        |(label, (value, uom), warn, crit, min, max)| {
            Metric::new(label, value)
                .with_uom(uom)
                .with_warn(warn)
                .with_crit(crit)
                .with_min(min)
                .with_max(max)
        },
    )
}

proptest! {
    #[test]
    fn prop_render_then_parse(metric in metric_strategy()) {
        let parsed = parse_perfdata(&metric.render()).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed, vec![metric]);
    }

    #[test]
    fn prop_render_all_then_parse(metrics in prop::collection::vec(metric_strategy(), 1..5)) {
        let parsed = parse_perfdata(&render_all(&metrics)).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed, metrics);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};
use crate::parser::parse_metric;
use crate::parser::Span;

/// Names the fields of a performance data metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Label,
    Value,
    UnitOfMeasurement,
    Warn,
    Crit,
    Min,
    Max,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single performance data metric as emitted by a monitoring plugin:
///
/// ```text
/// 'label'=value[UoM];[warn];[crit];[min];[max]
/// ```
///
/// Every field is kept as text. Value may be the literal `U` (the value could
/// not be determined), so no numeric interpretation happens here. Optional
/// fields are empty strings when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Metric {
    label: String,
    value: String,
    uom: String,
    warn: String,
    crit: String,
    min: String,
    max: String,
}

impl Metric {
    /// Creates an unvalidated metric with only label and value set.
    pub fn new<L, V>(label: L, value: V) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            label: label.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub(crate) fn from_parts(
        label: String,
        value: String,
        uom: String,
        warn: String,
        crit: String,
        min: String,
        max: String,
    ) -> Self {
        Self {
            label,
            value,
            uom,
            warn,
            crit,
            min,
            max,
        }
    }

    pub fn with_uom<S: Into<String>>(mut self, uom: S) -> Self {
        self.uom = uom.into();
        self
    }

    pub fn with_warn<S: Into<String>>(mut self, warn: S) -> Self {
        self.warn = warn.into();
        self
    }

    pub fn with_crit<S: Into<String>>(mut self, crit: S) -> Self {
        self.crit = crit.into();
        self
    }

    pub fn with_min<S: Into<String>>(mut self, min: S) -> Self {
        self.min = min.into();
        self
    }

    pub fn with_max<S: Into<String>>(mut self, max: S) -> Self {
        self.max = max.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn uom(&self) -> &str {
        &self.uom
    }

    pub fn warn(&self) -> &str {
        &self.warn
    }

    pub fn crit(&self) -> &str {
        &self.crit
    }

    pub fn min(&self) -> &str {
        &self.min
    }

    pub fn max(&self) -> &str {
        &self.max
    }

    /// Minimal record check: label and value must be present. The per-field
    /// grammar is enforced by the parser, not here.
    pub fn validate(&self) -> Result<()> {
        if self.label.is_empty() {
            return Err(Error::new(ErrorKind::MissingLabel, "metric validation failed")
                .in_field(Field::Label));
        }
        if self.value.is_empty() {
            return Err(Error::new(ErrorKind::MissingValue, "metric validation failed")
                .in_field(Field::Value));
        }
        Ok(())
    }

    /// Renders the metric in the canonical form used in plugin output. The
    /// result starts with a single space so metrics can be concatenated.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            " '{}'={}{};{};{};{};{}",
            self.label, self.value, self.uom, self.warn, self.crit, self.min, self.max,
        )
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::invalid_format("missing input metric string"));
        }
        parse_metric(Span::new(s))
    }
}

/// Renders a batch of metrics as plugins append it to their output.
pub fn render_all(metrics: &[Metric]) -> String {
    metrics.iter().map(Metric::render).collect()
}

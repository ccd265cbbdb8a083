use super::encoder::Encoder;
use crate::error::Result;
use crate::model::Metric;

/// One tab-separated `key=value` line per metric. Empty optional fields are
/// left out.
pub struct HumanReadableEncoder {
    verbose: bool,
}

impl HumanReadableEncoder {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_metric(&self, metric: &Metric) -> String {
        let mut parts = vec![
            format!("label={}", metric.label()),
            format!("value={}", metric.value()),
        ];

        for (key, val) in &[
            ("uom", metric.uom()),
            ("warn", metric.warn()),
            ("crit", metric.crit()),
            ("min", metric.min()),
            ("max", metric.max()),
        ] {
            if !val.is_empty() {
                parts.push(format!("{}={}", key, val));
            }
        }

        parts.join("\t")
    }
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, line_no: usize, metrics: &[Metric]) -> Result<Vec<u8>> {
        let lines = metrics
            .iter()
            .map(|m| {
                if self.verbose {
                    format!("{}: {}", line_no, self.format_metric(m))
                } else {
                    self.format_metric(m)
                }
            })
            .collect::<Vec<_>>();

        Ok(lines.join("\n").into_bytes())
    }
}

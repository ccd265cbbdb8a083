use serde::Serialize;

use super::encoder::Encoder;
use crate::error::Result;
use crate::model::Metric;

#[derive(Serialize)]
struct LineRepr<'a> {
    line: usize,
    metrics: &'a [Metric],
}

pub struct JSONEncoder {
    verbose: bool,
}

impl JSONEncoder {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Encoder for JSONEncoder {
    fn encode(&self, line_no: usize, metrics: &[Metric]) -> Result<Vec<u8>> {
        let encoded = if self.verbose {
            serde_json::to_vec(&LineRepr {
                line: line_no,
                metrics,
            })
        } else {
            serde_json::to_vec(metrics)
        };

        encoded.map_err(|e| ("JSON serialization failed", e).into())
    }
}

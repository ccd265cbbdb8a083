use super::encoder::Encoder;
use crate::error::Result;
use crate::model::{render_all, Metric};

/// Re-renders metrics in the form plugins emit them.
pub struct CanonicalEncoder {
    verbose: bool,
}

impl CanonicalEncoder {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Encoder for CanonicalEncoder {
    fn encode(&self, line_no: usize, metrics: &[Metric]) -> Result<Vec<u8>> {
        let rendered = render_all(metrics);
        let rendered = rendered.trim_start();

        if self.verbose {
            Ok(format!("{}: {}", line_no, rendered).into_bytes())
        } else {
            Ok(rendered.as_bytes().to_vec())
        }
    }
}

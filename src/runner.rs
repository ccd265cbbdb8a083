use tracing::{debug, warn};

use crate::error::Result;
use crate::model::Metric;
use crate::output::{Encoder, Writer};
use crate::parser::parse_perfdata;

// lines -> parse_perfdata -> validate -> Encoder -> Writer
//
// Every input line is one raw performance data batch. A batch is either
// written as a whole or not at all.

pub type LineIter = Box<dyn Iterator<Item = Result<String>>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Non-blank input lines seen.
    pub lines: usize,
    /// Metrics written.
    pub metrics: usize,
    /// Lines dropped because they failed to parse.
    pub skipped: usize,
}

pub struct Runner {
    lines: LineIter,
    encoder: Box<dyn Encoder>,
    writer: Box<dyn Writer>,
    keep_going: bool,
}

impl Runner {
    pub fn new(
        lines: LineIter,
        encoder: Box<dyn Encoder>,
        writer: Box<dyn Writer>,
        keep_going: bool,
    ) -> Self {
        Self {
            lines,
            encoder,
            writer,
            keep_going,
        }
    }

    pub fn run(&mut self) -> Result<Summary> {
        let mut summary = Summary::default();

        for (idx, line) in self.lines.by_ref().enumerate() {
            let line_no = idx + 1;
            let line = line?;

            if line.trim().is_empty() {
                debug!(line_no, "skipping blank line");
                continue;
            }
            summary.lines += 1;

            let metrics = match parse_line(&line) {
                Ok(metrics) => metrics,
                Err(e) if self.keep_going => {
                    warn!(line_no, error = %e, "skipping malformed performance data");
                    summary.skipped += 1;
                    continue;
                }
                Err(e) => return Err(e.context(format!("line {}", line_no))),
            };
            debug!(line_no, metrics = metrics.len(), "parsed performance data");

            let buf = self.encoder.encode(line_no, &metrics)?;
            self.writer
                .write(&buf)
                .map_err(|e| ("writer failed", e))?;

            summary.metrics += metrics.len();
        }

        Ok(summary)
    }
}

fn parse_line(line: &str) -> Result<Vec<Metric>> {
    let metrics = parse_perfdata(line)?;
    metrics.iter().try_for_each(Metric::validate)?;
    Ok(metrics)
}

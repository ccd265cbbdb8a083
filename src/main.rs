use std::io::{self, BufReader};

use structopt::StructOpt;
use tracing::info;

use perfdata::cliopt::CliOpt;
use perfdata::input::LineReader;
use perfdata::output::{new_encoder, LineWriter};
use perfdata::runner::{LineIter, Runner};
use perfdata::utils::logging::setup_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    setup_logging(opt.verbose);

    let delim = opt.delimiter();

    let lines: LineIter = if opt.input.is_empty() {
        Box::new(LineReader::with_delimiter(BufReader::new(io::stdin()), delim))
    } else {
        Box::new(opt.input.into_iter().map(Ok::<String, perfdata::Error>))
    };

    let mut runner = Runner::new(
        lines,
        new_encoder(opt.encode, opt.line_numbers),
        Box::new(LineWriter::with_delimiter(io::stdout(), delim)),
        opt.keep_going,
    );

    let summary = runner.run()?;
    info!(
        lines = summary.lines,
        metrics = summary.metrics,
        skipped = summary.skipped,
        "done"
    );

    Ok(())
}

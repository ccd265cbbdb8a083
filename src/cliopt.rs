use structopt::StructOpt;

use crate::output::Encoding;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "perfdata",
    about = "Parse, validate and re-render monitoring plugin performance data"
)]
pub struct CliOpt {
    /// Performance data strings; stdin is read line by line when none is given
    pub input: Vec<String>,

    /// Output encoding: canonical, json or human
    #[structopt(long = "encode", short = "e", default_value = "canonical")]
    pub encode: Encoding,

    /// Log and skip lines that fail to parse instead of stopping
    #[structopt(long = "keep-going", short = "k")]
    pub keep_going: bool,

    /// Prefix every output record with its input line number
    #[structopt(long = "line-numbers", short = "n")]
    pub line_numbers: bool,

    /// Input lines and output records are NUL-terminated instead of newline-terminated
    #[structopt(long = "null-data", short = "z")]
    pub null_data: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

impl CliOpt {
    /// Line delimiter shared by the stdin reader and the stdout writer.
    pub fn delimiter(&self) -> u8 {
        if self.null_data {
            b'\0'
        } else {
            b'\n'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cliopt_defaults() {
        let opt = CliOpt::from_iter(&["perfdata"]);
        assert!(opt.input.is_empty());
        assert_eq!(opt.encode, Encoding::Canonical);
        assert!(!opt.keep_going);
        assert!(!opt.line_numbers);
        assert!(!opt.null_data);
        assert_eq!(opt.delimiter(), b'\n');
        assert!(!opt.verbose);
    }

    #[test]
    fn test_cliopt_flags() {
        let opt = CliOpt::from_iter(&["perfdata", "-k", "-n", "-e", "json", "a=1", "b=2 c=3"]);
        assert_eq!(opt.input, vec!["a=1", "b=2 c=3"]);
        assert_eq!(opt.encode, Encoding::JSON);
        assert!(opt.keep_going);
        assert!(opt.line_numbers);
    }

    #[test]
    fn test_cliopt_null_data() {
        let opt = CliOpt::from_iter(&["perfdata", "--null-data"]);
        assert!(opt.null_data);
        assert_eq!(opt.delimiter(), b'\0');
        assert_eq!(CliOpt::from_iter(&["perfdata", "-z"]).delimiter(), b'\0');
    }

    #[test]
    fn test_cliopt_bad_encoding() {
        assert!(CliOpt::from_iter_safe(&["perfdata", "-e", "xml"]).is_err());
    }
}

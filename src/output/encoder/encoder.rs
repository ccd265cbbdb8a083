use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};
use crate::model::Metric;

pub trait Encoder {
    /// Encodes the metrics parsed from input line `line_no` (1-based).
    fn encode(&self, line_no: usize, metrics: &[Metric]) -> Result<Vec<u8>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Canonical,
    JSON,
    HumanReadable,
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "canonical" | "c" => Ok(Encoding::Canonical),
            "json" | "j" => Ok(Encoding::JSON),
            "human" | "h" => Ok(Encoding::HumanReadable),
            _ => Err(Error::new(
                ErrorKind::Other,
                format!("unsupported encoding {:?}", s),
            )),
        }
    }
}

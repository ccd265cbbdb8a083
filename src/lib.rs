//! Parsing, validation and rendering of monitoring plugin performance data,
//! the `'label'=value[UoM];warn;crit;min;max` metrics that Nagios and Icinga
//! plugins append to their output.
//!
//! ```
//! let metrics = perfdata::parse_perfdata("load1=0.26;5;10;0; 'response time'=120ms").unwrap();
//! assert_eq!(metrics[1].label(), "response time");
//! assert_eq!(metrics[1].uom(), "ms");
//! assert_eq!(metrics[0].render(), " 'load1'=0.26;5;10;0;");
//! ```

pub mod cliopt;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod parser;
pub mod runner;
pub mod utils;

pub use error::{Error, ErrorKind, Result};
pub use model::{render_all, Field, Metric};
pub use parser::parse_perfdata;

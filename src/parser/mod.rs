pub mod fields;
mod metric;
mod parser;
mod result;
mod tokenizer;

pub use metric::parse_metric;
pub use parser::parse_perfdata;
pub use result::{ParseError, Span};
pub use tokenizer::{MAX_FIELDS, MIN_FIELDS};

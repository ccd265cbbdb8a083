mod metric;

pub use metric::*;

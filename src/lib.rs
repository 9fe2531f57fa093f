//! Extracts user+sys CPU time from files holding the concatenated output of
//! repeated shell `time` runs.

pub mod batch;
pub mod cli;
pub mod parser;
pub mod writer;

pub use batch::{BatchConfig, BatchError, BatchProcessor};
pub use parser::{parse_file, parse_reader, ParseError, ParsedSeries, Series};

//! Label template parsing

mod parser;

pub use parser::{parse, parse_placeholder, PlaceholderSpec, INVALID_FORMAT_TEXT};

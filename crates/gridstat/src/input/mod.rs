//! Input parsing and dataset value types.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{Dataset, SourceMetadata};

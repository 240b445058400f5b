//! Class parsing: tokenizer, parsed model, parser.

pub mod model;
pub mod parser;
pub mod tokenizer;

pub use model::ParsedClass;
pub use parser::parse_class;

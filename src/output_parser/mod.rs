mod error;
pub use error::*;

mod react_parser;
pub use react_parser::*;

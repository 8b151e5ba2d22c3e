mod error;
pub use error::*;

#[allow(clippy::module_inception)]
mod tool;
pub use tool::*;

pub mod search;
pub use search::*;

#[allow(clippy::module_inception)]
mod executor;
pub use executor::*;

mod options;
pub use options::*;

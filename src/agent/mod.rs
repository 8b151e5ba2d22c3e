#[allow(clippy::module_inception)]
mod agent;
pub use agent::*;

mod error;
pub use error::*;

mod executor;
pub use executor::*;

mod react;
pub use react::*;

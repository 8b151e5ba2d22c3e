mod error;
pub use error::*;

mod prompt_template;
pub use prompt_template::*;

mod article;
pub use article::*;

mod duckduckgo;
pub use duckduckgo::*;

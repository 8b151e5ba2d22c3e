use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputParseError {
    /// The completion contained neither a final answer nor an action/input
    /// pair. Carries the full raw text so the caller can log it or re-prompt.
    #[error("Could not parse LLM output: `{0}`")]
    Unparseable(String),
}

impl OutputParseError {
    /// The raw completion that failed to parse.
    pub fn raw_output(&self) -> &str {
        match self {
            OutputParseError::Unparseable(text) => text,
        }
    }
}

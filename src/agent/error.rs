use thiserror::Error;

use crate::{llm::LLMError, output_parser::OutputParseError, template::TemplateError, tools::ToolError};

/// Errors that can occur during agent operations.
#[derive(Error, Debug)]
pub enum AgentError {
    /// An error that occurred during interaction with the LLM.
    #[error("LLM error: {0}")]
    LLMError(#[from] LLMError),

    /// An error that occurred while formatting the prompt, e.g. a template
    /// variable with no binding.
    #[error("Prompt error: {0}")]
    PromptError(#[from] TemplateError),

    /// An error that occurred during tool invocation.
    #[error("Tool error: {0}")]
    ToolError(#[from] ToolError),

    /// The LLM response matched neither the finish marker nor the action
    /// pattern. Not retried here; the caller decides whether to re-prompt.
    #[error("Invalid response from LLM: {0}")]
    ParseError(#[from] OutputParseError),

    /// The plan/act loop ran for the configured maximum number of iterations
    /// without reaching a final answer.
    #[error("Reached the maximum number of iterations ({0}) without a final answer")]
    IterationLimitExceeded(usize),

    /// A catch-all variant for miscellaneous agent errors.
    #[error("Error: {0}")]
    OtherError(String),
}

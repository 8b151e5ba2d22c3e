use async_trait::async_trait;

use crate::llm::LLMError;

/// The model collaborator: turns one prompt into one raw completion.
///
/// Implementations must honor the stop sequences — generation is truncated
/// at the first occurrence of any of them. The agent relies on this to keep
/// the model from fabricating its own `Observation:` lines.
#[async_trait]
pub trait LLM: Send + Sync {
    async fn generate(&self, prompt: &str, stop: &[&str]) -> Result<String, LLMError>;
}

impl<L> From<L> for Box<dyn LLM>
where
    L: 'static + LLM,
{
    fn from(llm: L) -> Self {
        Box::new(llm)
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Error while generating completion: {0}")]
    GenerationError(Box<dyn std::error::Error + Send + Sync>),

    #[error("Error: {0}")]
    OtherError(String),
}

impl LLMError {
    pub fn generation_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LLMError::GenerationError(Box::new(error))
    }
}

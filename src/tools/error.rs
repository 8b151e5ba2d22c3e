use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Error while running tool: {0}")]
    ExecutionError(Box<dyn std::error::Error + Send + Sync>),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

impl ToolError {
    pub fn execution_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ToolError::ExecutionError(Box::new(error))
    }
}

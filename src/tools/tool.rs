use async_trait::async_trait;

use crate::tools::ToolError;

/// An external capability the agent can invoke by name with a text input,
/// returning a text observation.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the name of the tool. Must be unique within an agent's tool
    /// list; the model refers to the tool by this exact string.
    fn name(&self) -> String;

    /// Describes what the tool does and when to use it.
    fn description(&self) -> String;

    /// Runs the tool against the input extracted from the model's
    /// `Action Input:` line.
    async fn call(&self, input: &str) -> Result<String, ToolError>;

    /// The one-line form the tool takes in the prompt's tool list.
    fn to_plain_description(&self) -> String {
        format!("{}: {}", self.name(), self.description())
    }
}

impl<T> From<T> for Box<dyn Tool>
where
    T: Tool + 'static,
{
    fn from(tool: T) -> Self {
        Box::new(tool)
    }
}

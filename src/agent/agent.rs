use async_trait::async_trait;

use crate::{
    schemas::{AgentDecision, AgentStep},
    template::TemplateError,
    tools::Tool,
};

use super::{AgentError, AgentExecutor};

/// The planning half of an agent. Agents are typically not used on their own
/// but wrapped in an [`AgentExecutor`], which drives the plan/act loop and
/// owns the conversation memory.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Produces the next decision given the user input, the history text and
    /// the steps completed so far in this turn.
    async fn plan(
        &self,
        steps: &[AgentStep],
        input: &str,
        history: &str,
    ) -> Result<AgentDecision, AgentError>;

    /// Resolves a tool by the exact name the model used.
    fn get_tool(&self, tool_name: &str) -> Option<&dyn Tool>;

    /// Renders the prompt that `plan` would send to the model. Pure; exposed
    /// for logging and tests.
    fn get_prompt(
        &self,
        steps: &[AgentStep],
        input: &str,
        history: &str,
    ) -> Result<String, TemplateError>;

    /// Wraps the agent into an [`AgentExecutor`].
    fn executor(self) -> AgentExecutor
    where
        Self: Sized + 'static,
    {
        AgentExecutor::from_agent(self)
    }
}

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    agent::{Agent, AgentError},
    memory::Memory,
    schemas::{AgentDecision, AgentStep},
    tools::ToolError,
};

use super::ExecutorOptions;

/// Drives one agent turn: format the prompt, call the model, parse the
/// completion, and either run the requested tool (appending the observation
/// to the scratchpad) or finish with the answer.
///
/// The memory handle is the session object: the caller creates it, shares it
/// across turns and drops it when the session ends. Turns are not concurrent;
/// the caller must let one `invoke` finish before starting the next.
pub struct AgentExecutor {
    agent: Box<dyn Agent>,
    memory: Option<Arc<RwLock<dyn Memory>>>,
    options: ExecutorOptions,
}

impl AgentExecutor {
    pub fn from_agent<A>(agent: A) -> Self
    where
        A: Agent + 'static,
    {
        Self {
            agent: Box::new(agent),
            memory: None,
            options: ExecutorOptions::default(),
        }
    }

    pub fn with_memory(mut self, memory: Arc<RwLock<dyn Memory>>) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn with_options(mut self, options: ExecutorOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs one full turn for `input` and returns the final answer.
    pub async fn invoke(&self, input: &str) -> Result<String, AgentError> {
        let history = match &self.memory {
            Some(memory) => memory.read().await.to_string(),
            None => String::new(),
        };

        let mut steps: Vec<AgentStep> = Vec::new();
        let mut iterations = 0;

        loop {
            if let Some(max_iterations) = self.options.max_iterations {
                if iterations >= max_iterations {
                    log::warn!("Max iterations ({max_iterations}) reached without a final answer");
                    return Err(AgentError::IterationLimitExceeded(max_iterations));
                }
            }
            iterations += 1;

            match self.agent.plan(&steps, input, &history).await? {
                AgentDecision::Finish(output) => {
                    log::debug!("\nAgent finished with result:\n{output}");

                    if let Some(memory) = &self.memory {
                        memory.write().await.update(input.to_string(), output.clone());
                    }

                    return Ok(output);
                }
                AgentDecision::Invoke(action) => {
                    log::debug!("\nTool call: {} ({})", action.tool, action.tool_input);

                    let Some(tool) = self.agent.get_tool(&action.tool) else {
                        log::warn!("Tried to use nonexistent tool '{}'", action.tool);
                        return Err(ToolError::ToolNotFound(action.tool).into());
                    };

                    let observation = match tool.call(&action.tool_input).await {
                        Ok(observation) => observation,
                        Err(e) if !self.options.break_if_tool_error => {
                            log::warn!("Tool '{}' error: {e}", action.tool);
                            format!("Tool '{}' failed: {e}", action.tool)
                        }
                        Err(e) => return Err(e.into()),
                    };

                    log::debug!("\nObservation:\n{observation}");
                    steps.push(AgentStep::new(action, observation));
                }
            }
        }
    }
}

use async_trait::async_trait;

use crate::{
    agent::{Agent, AgentError},
    llm::LLM,
    output_parser::ReActOutputParser,
    schemas::{AgentDecision, AgentStep},
    template::{PromptTemplate, TemplateError, TextReplacements},
    tools::Tool,
};

use super::OBSERVATION_STOP;

/// A single-action ReAct agent: renders one text prompt per step and parses
/// the completion into either a tool invocation or a final answer.
pub struct ReActAgent {
    pub(crate) llm: Box<dyn LLM>,
    pub(crate) template: PromptTemplate,
    // Kept as a Vec: tools appear in the prompt in the order the caller
    // supplied them.
    pub(crate) tools: Vec<Box<dyn Tool>>,
    pub(crate) output_parser: ReActOutputParser,
}

impl ReActAgent {
    /// Renders the steps taken so far into the scratchpad text. Each step
    /// replays the model's own output verbatim, followed by the observation
    /// and a fresh `Thought: ` cue. Deterministic given the same steps.
    pub fn construct_scratchpad(steps: &[AgentStep]) -> String {
        steps
            .iter()
            .map(|step| {
                format!(
                    "{}\nObservation: {}\nThought: ",
                    step.action.log, step.observation
                )
            })
            .collect()
    }

    fn render_tools(&self) -> String {
        self.tools
            .iter()
            .map(|tool| tool.to_plain_description())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_tool_names(&self) -> String {
        self.tools
            .iter()
            .map(|tool| tool.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[async_trait]
impl Agent for ReActAgent {
    async fn plan(
        &self,
        steps: &[AgentStep],
        input: &str,
        history: &str,
    ) -> Result<AgentDecision, AgentError> {
        let prompt = self.get_prompt(steps, input, history)?;
        log::debug!("\nPrompt:\n{prompt}");

        let completion = self.llm.generate(&prompt, &[OBSERVATION_STOP]).await?;
        log::debug!("\nCompletion:\n{completion}");

        Ok(self.output_parser.parse(&completion)?)
    }

    fn get_tool(&self, tool_name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == tool_name)
            .map(AsRef::as_ref)
    }

    fn get_prompt(
        &self,
        steps: &[AgentStep],
        input: &str,
        history: &str,
    ) -> Result<String, TemplateError> {
        let replacements: TextReplacements = [
            ("tools", self.render_tools()),
            ("tool_names", self.render_tool_names()),
            ("agent_scratchpad", Self::construct_scratchpad(steps)),
            ("history", history.to_string()),
            ("input", input.to_string()),
        ]
        .into();

        self.template.format(&replacements)
    }
}

use crate::{
    agent::AgentError, llm::LLM, output_parser::ReActOutputParser, template::PromptTemplate,
    tools::Tool,
};

use super::{ReActAgent, DEFAULT_PREFIX, DEFAULT_SUFFIX, FORMAT_INSTRUCTIONS};

pub struct ReActAgentBuilder<'a> {
    tools: Option<Vec<Box<dyn Tool>>>,
    prefix: Option<&'a str>,
    template: Option<PromptTemplate>,
}

impl<'a> ReActAgentBuilder<'a> {
    pub fn new() -> Self {
        Self {
            tools: None,
            prefix: None,
            template: None,
        }
    }

    pub fn tools(mut self, tools: impl IntoIterator<Item = impl Into<Box<dyn Tool>>>) -> Self {
        self.tools = Some(tools.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the leading instruction paragraph, e.g. to give the agent a
    /// persona. The rest of the template is unchanged.
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Replaces the whole prompt template. The template must use the
    /// `tools`, `tool_names`, `history`, `input` and `agent_scratchpad`
    /// variables.
    pub fn template(mut self, template: PromptTemplate) -> Self {
        self.template = Some(template);
        self
    }

    pub fn build<L: Into<Box<dyn LLM>>>(self, llm: L) -> Result<ReActAgent, AgentError> {
        let tools = self.tools.unwrap_or_default();
        if tools.is_empty() {
            return Err(AgentError::OtherError(
                "A ReAct agent requires at least one tool".into(),
            ));
        }

        let template = match self.template {
            Some(template) => template,
            None => {
                let prefix = self.prefix.unwrap_or(DEFAULT_PREFIX);
                PromptTemplate::from_fstring(format!(
                    "{prefix}\n\n{{tools}}\n\n{FORMAT_INSTRUCTIONS}\n\n{DEFAULT_SUFFIX}"
                ))
            }
        };

        Ok(ReActAgent {
            llm: llm.into(),
            template,
            tools,
            output_parser: ReActOutputParser::new(),
        })
    }
}

impl Default for ReActAgentBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// A request to invoke one tool, as extracted from a model completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentAction {
    /// Name of the tool to invoke.
    pub tool: String,
    /// Input text handed to the tool.
    pub tool_input: String,
    /// The complete raw completion the action was extracted from. Replayed
    /// verbatim when the scratchpad is rendered for the next model call.
    pub log: String,
}

/// A completed loop iteration: one tool invocation and what it returned.
///
/// Steps are append-only; once pushed onto the scratchpad they are never
/// mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStep {
    pub action: AgentAction,
    pub observation: String,
}

impl AgentStep {
    pub fn new(action: AgentAction, observation: impl Into<String>) -> Self {
        Self {
            action,
            observation: observation.into(),
        }
    }
}

/// The parsed outcome of one model completion: either call a tool or stop
/// with a final answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentDecision {
    Invoke(AgentAction),
    Finish(String),
}

use crate::schemas::Message;

/// Conversation history shared across turns. The caller owns the handle and
/// is responsible for serializing turns; only one turn may mutate it at a
/// time.
pub trait Memory: Send + Sync {
    fn messages(&self) -> Vec<Message>;

    fn add_message(&mut self, message: Message);

    fn clear(&mut self);

    /// Renders the history as `Human:` / `AI:` prefixed lines, ready to be
    /// substituted into a prompt.
    fn to_string(&self) -> String {
        self.messages()
            .iter()
            .map(|msg| msg.to_string())
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Commits one completed turn: the user's input and the final answer.
    fn update(&mut self, human_message: String, ai_message: String) {
        self.add_human_message(human_message);
        self.add_ai_message(ai_message);
    }

    fn add_human_message(&mut self, content: String) {
        self.add_message(Message::new_human_message(content))
    }

    fn add_ai_message(&mut self, content: String) {
        self.add_message(Message::new_ai_message(content))
    }
}

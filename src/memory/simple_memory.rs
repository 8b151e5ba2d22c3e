use std::sync::Arc;

use tokio::sync::RwLock;

use crate::schemas::Message;

use super::Memory;

/// Unbounded in-memory history.
pub struct SimpleMemory {
    messages: Vec<Message>,
}

impl SimpleMemory {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }
}

impl Default for SimpleMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SimpleMemory> for Arc<RwLock<dyn Memory>> {
    fn from(val: SimpleMemory) -> Self {
        Arc::new(RwLock::new(val))
    }
}

impl Memory for SimpleMemory {
    fn messages(&self) -> Vec<Message> {
        self.messages.clone()
    }

    fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    fn clear(&mut self) {
        self.messages.clear();
    }
}

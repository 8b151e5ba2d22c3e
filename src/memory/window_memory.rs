use std::sync::Arc;

use tokio::sync::RwLock;

use crate::schemas::Message;

use super::Memory;

/// History bounded to the last `window_size` human/AI exchanges. Older
/// messages are evicted from the front as new ones arrive. A window size of
/// zero keeps no history at all.
pub struct WindowBufferMemory {
    window_size: usize,
    messages: Vec<Message>,
}

impl WindowBufferMemory {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            messages: Vec::new(),
        }
    }
}

impl Default for WindowBufferMemory {
    fn default() -> Self {
        Self::new(2)
    }
}

impl From<WindowBufferMemory> for Arc<RwLock<dyn Memory>> {
    fn from(val: WindowBufferMemory) -> Self {
        Arc::new(RwLock::new(val))
    }
}

impl Memory for WindowBufferMemory {
    fn messages(&self) -> Vec<Message> {
        self.messages.clone()
    }

    fn add_message(&mut self, message: Message) {
        if self.window_size == 0 {
            return;
        }
        // One exchange is a human message plus an AI message.
        if self.messages.len() >= self.window_size * 2 {
            self.messages.remove(0);
        }
        self.messages.push(message);
    }

    fn clear(&mut self) {
        self.messages.clear();
    }
}

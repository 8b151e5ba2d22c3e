mod agent_plan;
pub use agent_plan::*;

mod message;
pub use message::*;

//! Conversation with the health assistant

pub mod model;
pub mod ui;
pub mod workflow;

pub use ui::AssistantChatPage;
pub use workflow::AssistantChatWorkflow;

use crate::shared::error::ApiError;
use crate::shared::lifecycle::ErrorInfo;
use crate::shared::projection::open_envelope;
use contracts::domain::a003_assistant_chat::dto::ChatResponse;

pub const CHAT_FAILED: &str = "Failed to get response";

pub const GREETING: &str =
    "Hello! I'm your AI assistant. Ask me anything about seizures, epilepsy, or neurological health.";

pub const QUICK_QUESTIONS: [&str; 4] = [
    "What is a seizure?",
    "Seizure first aid",
    "Types of seizures",
    "Prevention tips",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Append-only transcript, display order is insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: GREETING.to_string(),
            }],
        }
    }
}

impl ChatLog {
    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

pub fn project_reply(outcome: Result<ChatResponse, ApiError>) -> Result<String, ErrorInfo> {
    open_envelope(outcome, CHAT_FAILED, |env| env.response.map(|r| r.message))
}

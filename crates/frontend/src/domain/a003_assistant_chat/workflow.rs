use super::model::{project_reply, ChatLog, ChatRole};
use crate::shared::backend::AnalysisBackend;
use crate::shared::error::{ApiError, ValidationError};
use crate::shared::lifecycle::{
    run_request, RequestId, RequestLifecycle, Settlement, StateCell, Ticket,
};
use contracts::domain::a003_assistant_chat::dto::{ChatRequest, ChatResponse};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantChatWorkflow {
    log: ChatLog,
    draft: String,
    lifecycle: RequestLifecycle<ChatRequest, String>,
}

impl AssistantChatWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Quick questions only fill the input
    pub fn prefill(&mut self, question: &str) {
        self.draft = question.to_string();
    }

    /// Append the user's message and dispatch it.
    ///
    /// The message stays in the log whatever the reply turns out to be.
    pub fn begin(&mut self) -> Result<Ticket<ChatRequest>, ValidationError> {
        if self.draft.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        let message = std::mem::take(&mut self.draft);
        self.log.push(ChatRole::User, message.clone());
        Ok(self.lifecycle.dispatch(ChatRequest { message }))
    }

    pub fn settle(&mut self, id: RequestId, outcome: Result<ChatResponse, ApiError>) -> Settlement {
        let reply = project_reply(outcome);
        let content = reply.as_ref().ok().cloned();
        let settlement = self.lifecycle.settle(id, reply);
        if let (Settlement::Fulfilled, Some(content)) = (&settlement, content) {
            self.log.push(ChatRole::Assistant, content);
        }
        settlement
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Input is disabled and the typing indicator shown while pending
    pub fn is_pending(&self) -> bool {
        self.lifecycle.is_pending()
    }
}

/// Send the current draft
pub async fn send<C, B>(cell: &C, backend: &B) -> Result<Settlement, ValidationError>
where
    C: StateCell<AssistantChatWorkflow>,
    B: AnalysisBackend + ?Sized,
{
    run_request(
        cell,
        |w: &mut AssistantChatWorkflow| w.begin(),
        |request| backend.chat(request),
        |w, id, outcome| w.settle(id, outcome),
    )
    .await
}

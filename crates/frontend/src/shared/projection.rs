//! Envelope unwrapping shared by the feature projections

use crate::shared::error::ApiError;
use crate::shared::lifecycle::ErrorInfo;
use contracts::shared::Envelope;

/// Normalize transport failure, `success: false` and a missing payload into
/// one rejection; hand the envelope to `payload` otherwise.
pub fn open_envelope<E, T>(
    outcome: Result<E, ApiError>,
    fallback: &str,
    payload: impl FnOnce(E) -> Option<T>,
) -> Result<T, ErrorInfo>
where
    E: Envelope,
{
    let envelope = outcome.map_err(|e| e.into_error_info(fallback))?;
    if !envelope.is_success() {
        let message = envelope.error_message().map(str::to_string);
        return Err(ApiError::Application { message }.into_error_info(fallback));
    }
    payload(envelope).ok_or_else(|| {
        ApiError::Decode("envelope is missing its payload".to_string()).into_error_info(fallback)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_assistant_chat::dto::{ChatReplyDto, ChatResponse};

    fn open(outcome: Result<ChatResponse, ApiError>) -> Result<String, ErrorInfo> {
        open_envelope(outcome, "Failed to get response", |e| e.response.map(|r| r.message))
    }

    #[test]
    fn test_success_yields_payload() {
        let resp = ChatResponse {
            success: true,
            error: None,
            response: Some(ChatReplyDto {
                message: "hello".to_string(),
                intent: None,
                confidence: None,
            }),
        };
        assert_eq!(open(Ok(resp)), Ok("hello".to_string()));
    }

    #[test]
    fn test_application_failure_uses_server_message() {
        let resp = ChatResponse {
            success: false,
            error: Some("No message provided".to_string()),
            response: None,
        };
        assert_eq!(open(Ok(resp)), Err(ErrorInfo::new("No message provided")));
    }

    #[test]
    fn test_application_failure_without_message_uses_fallback() {
        let resp = ChatResponse {
            success: false,
            error: None,
            response: None,
        };
        assert_eq!(open(Ok(resp)), Err(ErrorInfo::new("Failed to get response")));
    }

    #[test]
    fn test_missing_payload_is_rejection() {
        let resp = ChatResponse {
            success: true,
            error: None,
            response: None,
        };
        assert_eq!(open(Ok(resp)), Err(ErrorInfo::new("Failed to get response")));
    }

    #[test]
    fn test_transport_failure_uses_fallback() {
        let outcome = Err(ApiError::Network("offline".to_string()));
        assert_eq!(open(outcome), Err(ErrorInfo::new("Failed to get response")));
    }
}

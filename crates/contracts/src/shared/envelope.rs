use serde::{Deserialize, Serialize};

/// Common shape of every `/api` response: `{ success, error?, ... }`.
///
/// Each endpoint has its own response struct carrying the payload field;
/// this trait exposes the part they share so the client can normalize
/// `success: false` into its rejection path.
pub trait Envelope {
    fn is_success(&self) -> bool;
    fn error_message(&self) -> Option<&str>;
}

/// Envelope without a payload.
///
/// Used to salvage the server message from an error body (the backend
/// answers 400/500 with `{ success: false, error }`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

macro_rules! impl_envelope {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::shared::envelope::Envelope for $ty {
                fn is_success(&self) -> bool {
                    self.success
                }

                fn error_message(&self) -> Option<&str> {
                    self.error.as_deref().filter(|e| !e.trim().is_empty())
                }
            }
        )*
    };
}

pub(crate) use impl_envelope;

impl_envelope!(ErrorEnvelope);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_from_backend_body() {
        let body = r#"{"success": false, "error": "No file provided"}"#;
        let env: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.error_message(), Some("No file provided"));
    }

    #[test]
    fn test_blank_error_is_treated_as_absent() {
        let env = ErrorEnvelope {
            success: false,
            error: Some("   ".to_string()),
        };
        assert_eq!(env.error_message(), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let env: ErrorEnvelope = serde_json::from_str("{}").unwrap();
        assert!(!env.success);
        assert!(env.error.is_none());
    }
}

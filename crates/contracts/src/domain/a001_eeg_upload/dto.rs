use crate::shared::envelope::impl_envelope;
use crate::shared::RiskLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multipart form field carrying the uploaded file
pub const UPLOAD_FORM_FIELD: &str = "file";

/// Classifier output for one processed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDto {
    pub prediction: String,
    /// Percent, 0..=100
    pub confidence: f64,
    pub risk_level: RiskLevel,
    /// Class name to percent
    #[serde(default)]
    pub probabilities: HashMap<String, f64>,
    #[serde(default)]
    pub explanation: String,
}

/// `result` object of `POST /api/upload`
///
/// `prediction` is absent when the backend has no trained model loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResultDto {
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub prediction: Option<PredictionDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<UploadResultDto>,
}

impl_envelope!(UploadResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Envelope;

    #[test]
    fn test_decode_upload_response_ignores_extra_fields() {
        let body = r#"{
            "success": true,
            "result": {
                "success": true,
                "file_type": "csv",
                "features": {"mean": 0.1},
                "message": "Successfully processed CSV with 178 rows",
                "prediction": {
                    "prediction": "PREICTAL",
                    "confidence": 81.5,
                    "risk_level": "HIGH",
                    "probabilities": {"NORMAL": 10.0, "PREICTAL": 81.5, "ICTAL": 8.5},
                    "explanation": "Pre-seizure state detected"
                }
            }
        }"#;
        let resp: UploadResponse = serde_json::from_str(body).unwrap();
        assert!(resp.is_success());
        let result = resp.result.unwrap();
        assert_eq!(result.file_type.as_deref(), Some("csv"));
        let prediction = result.prediction.unwrap();
        assert_eq!(prediction.risk_level, RiskLevel::High);
        assert_eq!(prediction.probabilities.len(), 3);
    }

    #[test]
    fn test_decode_upload_failure() {
        let body = r#"{"success": false, "error": "Unsupported file type"}"#;
        let resp: UploadResponse = serde_json::from_str(body).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.error_message(), Some("Unsupported file type"));
        assert!(resp.result.is_none());
    }
}

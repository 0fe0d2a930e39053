use crate::shared::envelope::impl_envelope;
use crate::shared::RiskLevel;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/symptoms/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomsRequest {
    pub symptoms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedSymptomDto {
    pub symptom: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentDto {
    pub risk_level: RiskLevel,
    /// 0..=100, may carry decimals
    pub risk_score: f64,
    #[serde(default)]
    pub possible_condition: String,
    #[serde(default)]
    pub detected_symptoms: Vec<DetectedSymptomDto>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub urgency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeSymptomsResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<AssessmentDto>,
}

impl_envelope!(AnalyzeSymptomsResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_assessment() {
        let body = r#"{
            "success": true,
            "result": {
                "detected_symptoms": [
                    {"symptom": "dizzy", "weight": 5, "severity": "medium"},
                    {"symptom": "confused", "weight": 6, "severity": "medium"}
                ],
                "risk_score": 55.0,
                "risk_level": "MEDIUM",
                "possible_condition": "PRE-ICTAL",
                "recommendations": ["Rest in a safe place"],
                "urgency": "URGENT",
                "explanation": "Moderate risk"
            }
        }"#;
        let resp: AnalyzeSymptomsResponse = serde_json::from_str(body).unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.detected_symptoms[1].symptom, "confused");
        assert_eq!(result.urgency.as_deref(), Some("URGENT"));
    }

    #[test]
    fn test_request_serializes_symptoms_field() {
        let req = SymptomsRequest {
            symptoms: "I feel dizzy".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"symptoms": "I feel dizzy"})
        );
    }
}

use crate::shared::error::ApiError;
use crate::shared::lifecycle::ErrorInfo;
use crate::shared::projection::open_envelope;
use contracts::domain::a002_symptom_check::dto::{AnalyzeSymptomsResponse, AssessmentDto};
use contracts::shared::RiskLevel;

pub const ANALYSIS_FAILED: &str = "Analysis failed";

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedSymptom {
    pub symptom: String,
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentResult {
    pub risk_level: RiskLevel,
    /// 0..=100
    pub risk_score: u8,
    pub possible_condition: String,
    pub detected_symptoms: Vec<DetectedSymptom>,
    pub explanation: String,
    pub recommendations: Vec<String>,
    pub urgency: Option<String>,
}

impl From<AssessmentDto> for AssessmentResult {
    fn from(dto: AssessmentDto) -> Self {
        Self {
            risk_level: dto.risk_level,
            risk_score: score_to_percent(dto.risk_score),
            possible_condition: dto.possible_condition,
            detected_symptoms: dto
                .detected_symptoms
                .into_iter()
                .map(|s| DetectedSymptom {
                    symptom: s.symptom,
                    severity: s.severity,
                })
                .collect(),
            explanation: dto.explanation,
            recommendations: dto.recommendations,
            urgency: dto.urgency.filter(|u| !u.trim().is_empty()),
        }
    }
}

/// Backend scores are floats with two decimals
fn score_to_percent(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u8
}

pub fn project_assessment(
    outcome: Result<AnalyzeSymptomsResponse, ApiError>,
) -> Result<AssessmentResult, ErrorInfo> {
    open_envelope(outcome, ANALYSIS_FAILED, |env| env.result).map(AssessmentResult::from)
}

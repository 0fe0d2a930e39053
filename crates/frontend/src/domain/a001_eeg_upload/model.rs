use crate::shared::error::ApiError;
use crate::shared::lifecycle::ErrorInfo;
use crate::shared::projection::open_envelope;
use contracts::domain::a001_eeg_upload::dto::{PredictionDto, UploadResponse};
use contracts::shared::RiskLevel;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const UPLOAD_FAILED: &str = "Upload failed";
pub const MODEL_UNAVAILABLE: &str = "Prediction model is not available";

pub const ACCEPTED_EXTENSIONS: [&str; 6] = ["csv", "pdf", "png", "jpg", "jpeg", "edf"];

/// `accept` attribute for the file input
pub const ACCEPT_ATTRIBUTE: &str = ".csv,.pdf,.png,.jpg,.jpeg,.edf";

/// Lower-cased extension of `name`, if it has one
pub fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_accepted(name: &str) -> bool {
    extension_of(name).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

/// The resident file, bytes included
#[derive(Debug, Clone, PartialEq)]
pub struct FileSelection {
    pub name: String,
    pub size_bytes: u64,
    /// Browser-reported MIME type, may be empty
    pub mime_hint: String,
    pub bytes: Arc<[u8]>,
}

impl FileSelection {
    pub fn new(name: impl Into<String>, mime_hint: impl Into<String>, bytes: Vec<u8>) -> Self {
        let bytes: Arc<[u8]> = bytes.into();
        Self {
            name: name.into(),
            size_bytes: bytes.len() as u64,
            mime_hint: mime_hint.into(),
            bytes,
        }
    }

    /// Content type sent with the part
    pub fn content_type(&self) -> &str {
        if self.mime_hint.is_empty() {
            "application/octet-stream"
        } else {
            &self.mime_hint
        }
    }

    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub predicted_class: String,
    pub confidence_percent: f64,
    pub risk_level: RiskLevel,
    /// Class name to percent; sorted by name for stable rendering
    pub class_probabilities: BTreeMap<String, f64>,
    pub explanation: String,
}

impl From<PredictionDto> for PredictionResult {
    fn from(dto: PredictionDto) -> Self {
        Self {
            predicted_class: dto.prediction,
            confidence_percent: dto.confidence.clamp(0.0, 100.0),
            risk_level: dto.risk_level,
            class_probabilities: dto.probabilities.into_iter().collect(),
            explanation: dto.explanation,
        }
    }
}

/// What the backend said about the file itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingSummary {
    pub file_type: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub prediction: PredictionResult,
    pub summary: ProcessingSummary,
}

pub fn project_upload(outcome: Result<UploadResponse, ApiError>) -> Result<UploadOutcome, ErrorInfo> {
    let result = open_envelope(outcome, UPLOAD_FAILED, |env| env.result)?;
    let Some(prediction) = result.prediction else {
        log::warn!("upload processed but no prediction returned");
        return Err(ErrorInfo::new(MODEL_UNAVAILABLE));
    };
    Ok(UploadOutcome {
        prediction: prediction.into(),
        summary: ProcessingSummary {
            file_type: result.file_type,
            message: result.message,
        },
    })
}

use serde::{Deserialize, Serialize};

/// `GET /api/health`; this endpoint does not use the `success` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub predictor_loaded: bool,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

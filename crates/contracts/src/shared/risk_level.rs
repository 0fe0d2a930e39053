use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal severity returned by the backend for predictions and assessments.
///
/// Values outside the known four are kept as `Unknown` instead of failing
/// the whole response decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Minimal,
    Unknown(String),
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
            RiskLevel::Minimal => "MINIMAL",
            RiskLevel::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RiskLevel::Unknown(_))
    }
}

impl From<&str> for RiskLevel {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("HIGH") {
            RiskLevel::High
        } else if trimmed.eq_ignore_ascii_case("MEDIUM") {
            RiskLevel::Medium
        } else if trimmed.eq_ignore_ascii_case("LOW") {
            RiskLevel::Low
        } else if trimmed.eq_ignore_ascii_case("MINIMAL") {
            RiskLevel::Minimal
        } else {
            RiskLevel::Unknown(s.to_string())
        }
    }
}

impl From<String> for RiskLevel {
    fn from(s: String) -> Self {
        RiskLevel::from(s.as_str())
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod envelope;
pub mod risk_level;

pub use envelope::{Envelope, ErrorEnvelope};
pub use risk_level::RiskLevel;

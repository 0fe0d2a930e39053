use contracts::shared::RiskLevel;

/// Presentation of a risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskPalette {
    /// Class for the prediction/assessment card
    pub card_class: &'static str,
    /// Variant understood by `ui::Badge`
    pub badge_variant: &'static str,
    pub label: &'static str,
}

/// Total over every level, including values the backend may add later.
pub fn risk_palette(level: &RiskLevel) -> RiskPalette {
    match level {
        RiskLevel::High => RiskPalette {
            card_class: "risk-card risk-card--high",
            badge_variant: "error",
            label: "High risk",
        },
        RiskLevel::Medium => RiskPalette {
            card_class: "risk-card risk-card--medium",
            badge_variant: "warning",
            label: "Medium risk",
        },
        RiskLevel::Low => RiskPalette {
            card_class: "risk-card risk-card--low",
            badge_variant: "success",
            label: "Low risk",
        },
        RiskLevel::Minimal => RiskPalette {
            card_class: "risk-card risk-card--minimal",
            badge_variant: "primary",
            label: "Minimal risk",
        },
        RiskLevel::Unknown(_) => RiskPalette {
            card_class: "risk-card risk-card--unknown",
            badge_variant: "neutral",
            label: "Unclassified risk",
        },
    }
}

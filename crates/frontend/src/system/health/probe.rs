//! Startup probe of `GET /api/health`

use crate::shared::backend::AnalysisBackend;
use crate::shared::error::{ApiError, ValidationError};
use crate::shared::lifecycle::{
    run_request, RequestId, RequestLifecycle, RequestStatus, Settlement, StateCell,
};
use contracts::system::health::HealthResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendStatus {
    pub online: bool,
    pub predictor_loaded: bool,
    pub version: Option<String>,
}

impl From<HealthResponse> for BackendStatus {
    fn from(resp: HealthResponse) -> Self {
        Self {
            online: resp.is_healthy(),
            predictor_loaded: resp.predictor_loaded,
            version: resp.version,
        }
    }
}

/// Header text for each probe state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBadge {
    Checking,
    Online { predictor_loaded: bool },
    Unreachable,
}

impl HealthBadge {
    pub fn label(self) -> &'static str {
        match self {
            HealthBadge::Checking => "Checking backend...",
            HealthBadge::Online { predictor_loaded: true } => "Backend online",
            HealthBadge::Online { predictor_loaded: false } => "Backend online (model not loaded)",
            HealthBadge::Unreachable => "Backend unreachable",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            HealthBadge::Checking => "health health--checking",
            HealthBadge::Online { predictor_loaded: true } => "health health--online",
            HealthBadge::Online { predictor_loaded: false } => "health health--degraded",
            HealthBadge::Unreachable => "health health--offline",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthProbe {
    lifecycle: RequestLifecycle<(), BackendStatus>,
}

impl HealthProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settle(&mut self, id: RequestId, outcome: Result<HealthResponse, ApiError>) -> Settlement {
        let projected = outcome
            .map(BackendStatus::from)
            .map_err(|e| e.into_error_info("Backend unreachable"));
        if let Ok(status) = &projected {
            log::info!(
                "backend {} (predictor loaded: {}, version: {})",
                if status.online { "online" } else { "not healthy" },
                status.predictor_loaded,
                status.version.as_deref().unwrap_or("unknown"),
            );
        }
        self.lifecycle.settle(id, projected)
    }

    pub fn badge(&self) -> HealthBadge {
        match (self.lifecycle.status(), self.lifecycle.result()) {
            (RequestStatus::Fulfilled, Some(status)) if status.online => HealthBadge::Online {
                predictor_loaded: status.predictor_loaded,
            },
            (RequestStatus::Fulfilled | RequestStatus::Rejected, _) => HealthBadge::Unreachable,
            _ => HealthBadge::Checking,
        }
    }
}

pub async fn probe<C, B>(cell: &C, backend: &B) -> Result<Settlement, ValidationError>
where
    C: StateCell<HealthProbe>,
    B: AnalysisBackend + ?Sized,
{
    run_request(
        cell,
        |p: &mut HealthProbe| Ok(p.lifecycle.dispatch(())),
        |()| backend.health(),
        |p, id, outcome| p.settle(id, outcome),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lifecycle::ErrorInfo;
    use crate::shared::testing::FakeBackend;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn health(status: &str, predictor_loaded: bool) -> HealthResponse {
        HealthResponse {
            status: status.to_string(),
            predictor_loaded,
            version: Some("1.0.0".to_string()),
        }
    }

    #[test]
    fn test_probe_starts_checking() {
        assert_eq!(HealthProbe::new().badge(), HealthBadge::Checking);
    }

    #[test]
    fn test_healthy_backend() {
        let cell = Rc::new(RefCell::new(HealthProbe::new()));
        let backend = FakeBackend::default();
        backend.health.ready(Ok(health("healthy", true)));

        block_on(probe(&cell, &backend)).unwrap();

        assert_eq!(
            cell.borrow().badge(),
            HealthBadge::Online { predictor_loaded: true }
        );
        assert_eq!(cell.borrow().badge().label(), "Backend online");
    }

    #[test]
    fn test_model_not_loaded_is_degraded() {
        let cell = Rc::new(RefCell::new(HealthProbe::new()));
        let backend = FakeBackend::default();
        backend.health.ready(Ok(health("healthy", false)));

        block_on(probe(&cell, &backend)).unwrap();

        assert_eq!(cell.borrow().badge().css_class(), "health health--degraded");
    }

    #[test]
    fn test_unreachable_backend() {
        let cell = Rc::new(RefCell::new(HealthProbe::new()));
        let backend = FakeBackend::default();
        backend
            .health
            .ready(Err(ApiError::Network("connection refused".to_string())));

        let outcome = block_on(probe(&cell, &backend));

        assert_eq!(
            outcome,
            Ok(Settlement::Rejected(ErrorInfo::new("Backend unreachable")))
        );
        assert_eq!(cell.borrow().badge(), HealthBadge::Unreachable);
    }

    #[test]
    fn test_unhealthy_status_is_unreachable() {
        let mut probe = HealthProbe::new();
        let ticket = probe.lifecycle.dispatch(());
        probe.settle(ticket.id, Ok(health("degraded", true)));
        assert_eq!(probe.badge(), HealthBadge::Unreachable);
    }
}

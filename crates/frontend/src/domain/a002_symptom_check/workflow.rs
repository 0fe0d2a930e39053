use super::model::{project_assessment, AssessmentResult};
use crate::shared::backend::AnalysisBackend;
use crate::shared::error::{ApiError, ValidationError};
use crate::shared::lifecycle::{
    run_request, ErrorInfo, RequestId, RequestLifecycle, Settlement, StateCell, Ticket,
};
use contracts::domain::a002_symptom_check::dto::{AnalyzeSymptomsResponse, SymptomsRequest};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymptomCheckWorkflow {
    lifecycle: RequestLifecycle<SymptomsRequest, AssessmentResult>,
}

impl SymptomCheckWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and dispatch. The text is sent as typed.
    pub fn begin(&mut self, text: &str) -> Result<Ticket<SymptomsRequest>, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptySymptoms);
        }
        Ok(self.lifecycle.dispatch(SymptomsRequest {
            symptoms: text.to_string(),
        }))
    }

    pub fn settle(
        &mut self,
        id: RequestId,
        outcome: Result<AnalyzeSymptomsResponse, ApiError>,
    ) -> Settlement {
        let settlement = self.lifecycle.settle(id, project_assessment(outcome));
        if settlement == Settlement::Fulfilled {
            if let Some(result) = self.lifecycle.result() {
                log::info!(
                    "assessment #{id}: {} ({})",
                    result.risk_level,
                    result.risk_score
                );
            }
        }
        settlement
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.lifecycle.result()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.lifecycle.error()
    }

    pub fn is_pending(&self) -> bool {
        self.lifecycle.is_pending()
    }

    pub fn lifecycle(&self) -> &RequestLifecycle<SymptomsRequest, AssessmentResult> {
        &self.lifecycle
    }
}

/// Submit `text` for assessment
pub async fn analyze<C, B>(cell: &C, backend: &B, text: &str) -> Result<Settlement, ValidationError>
where
    C: StateCell<SymptomCheckWorkflow>,
    B: AnalysisBackend + ?Sized,
{
    run_request(
        cell,
        |w: &mut SymptomCheckWorkflow| w.begin(text),
        |request| backend.analyze_symptoms(request),
        |w, id, outcome| w.settle(id, outcome),
    )
    .await
}

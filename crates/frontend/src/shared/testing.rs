//! In-memory backend for workflow tests

use crate::shared::backend::{AnalysisBackend, FilePart};
use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_eeg_upload::dto::UploadResponse;
use contracts::domain::a002_symptom_check::dto::{AnalyzeSymptomsResponse, SymptomsRequest};
use contracts::domain::a003_assistant_chat::dto::{ChatRequest, ChatResponse};
use contracts::domain::a004_doctor_directory::dto::{
    DoctorQuery, DoctorsResponse, LocationsResponse, SpecializationsResponse,
};
use contracts::system::health::HealthResponse;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;

type Reply<T> = oneshot::Receiver<Result<T, ApiError>>;

/// Scripted replies for one endpoint, consumed in call order
pub struct Replies<T>(RefCell<VecDeque<Reply<T>>>);

impl<T> Default for Replies<T> {
    fn default() -> Self {
        Self(RefCell::new(VecDeque::new()))
    }
}

impl<T> Replies<T> {
    /// Next call resolves immediately with `outcome`
    pub fn ready(&self, outcome: Result<T, ApiError>) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(outcome);
        self.0.borrow_mut().push_back(rx);
    }

    /// Next call stays pending until the returned sender fires
    pub fn deferred(&self) -> oneshot::Sender<Result<T, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.0.borrow_mut().push_back(rx);
        tx
    }

    async fn next(&self) -> Result<T, ApiError> {
        let reply = self.0.borrow_mut().pop_front();
        match reply {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("reply dropped".to_string()))),
            None => Err(ApiError::Network("no reply scripted".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Upload(FilePart),
    Symptoms(SymptomsRequest),
    Chat(ChatRequest),
    Doctors(DoctorQuery),
    Locations,
    Specializations,
    Health,
}

#[derive(Default)]
pub struct FakeBackend {
    pub uploads: Replies<UploadResponse>,
    pub assessments: Replies<AnalyzeSymptomsResponse>,
    pub chats: Replies<ChatResponse>,
    pub doctors: Replies<DoctorsResponse>,
    pub locations: Replies<LocationsResponse>,
    pub specializations: Replies<SpecializationsResponse>,
    pub health: Replies<HealthResponse>,
    pub calls: RefCell<Vec<Recorded>>,
}

impl FakeBackend {
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: Recorded) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl AnalysisBackend for FakeBackend {
    async fn upload(&self, file: FilePart) -> Result<UploadResponse, ApiError> {
        self.record(Recorded::Upload(file));
        self.uploads.next().await
    }

    async fn analyze_symptoms(
        &self,
        request: SymptomsRequest,
    ) -> Result<AnalyzeSymptomsResponse, ApiError> {
        self.record(Recorded::Symptoms(request));
        self.assessments.next().await
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ApiError> {
        self.record(Recorded::Chat(request));
        self.chats.next().await
    }

    async fn doctors(&self, query: DoctorQuery) -> Result<DoctorsResponse, ApiError> {
        self.record(Recorded::Doctors(query));
        self.doctors.next().await
    }

    async fn locations(&self) -> Result<LocationsResponse, ApiError> {
        self.record(Recorded::Locations);
        self.locations.next().await
    }

    async fn specializations(&self) -> Result<SpecializationsResponse, ApiError> {
        self.record(Recorded::Specializations);
        self.specializations.next().await
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.record(Recorded::Health);
        self.health.next().await
    }
}

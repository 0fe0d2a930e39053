//! Outbound seam to the analysis backend
//!
//! Workflows never talk HTTP directly; they are driven against
//! [`AnalysisBackend`]. The browser build uses [`http::HttpBackend`].

pub mod http;

use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_eeg_upload::dto::UploadResponse;
use contracts::domain::a002_symptom_check::dto::{AnalyzeSymptomsResponse, SymptomsRequest};
use contracts::domain::a003_assistant_chat::dto::{ChatRequest, ChatResponse};
use contracts::domain::a004_doctor_directory::dto::{
    DoctorQuery, DoctorsResponse, LocationsResponse, SpecializationsResponse,
};
use contracts::system::health::HealthResponse;
use std::sync::Arc;

pub use http::HttpBackend;

/// One file as it goes into the multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Arc<[u8]>,
}

#[async_trait(?Send)]
pub trait AnalysisBackend {
    /// `POST /api/upload`
    async fn upload(&self, file: FilePart) -> Result<UploadResponse, ApiError>;

    /// `POST /api/symptoms/analyze`
    async fn analyze_symptoms(
        &self,
        request: SymptomsRequest,
    ) -> Result<AnalyzeSymptomsResponse, ApiError>;

    /// `POST /api/chat`
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ApiError>;

    /// `GET /api/doctors`
    async fn doctors(&self, query: DoctorQuery) -> Result<DoctorsResponse, ApiError>;

    /// `GET /api/doctors/locations`
    async fn locations(&self) -> Result<LocationsResponse, ApiError>;

    /// `GET /api/doctors/specializations`
    async fn specializations(&self) -> Result<SpecializationsResponse, ApiError>;

    /// `GET /api/health`
    async fn health(&self) -> Result<HealthResponse, ApiError>;
}

/// Hook to access the backend client provided by `App`
pub fn use_backend() -> HttpBackend {
    leptos::prelude::use_context::<HttpBackend>().expect("HttpBackend not provided in component tree")
}

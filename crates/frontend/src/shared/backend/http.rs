use super::{AnalysisBackend, FilePart};
use crate::shared::api_utils::{api_base, api_url};
use crate::shared::config::ApiConfig;
use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_eeg_upload::dto::{UploadResponse, UPLOAD_FORM_FIELD};
use contracts::domain::a002_symptom_check::dto::{AnalyzeSymptomsResponse, SymptomsRequest};
use contracts::domain::a003_assistant_chat::dto::{ChatRequest, ChatResponse};
use contracts::domain::a004_doctor_directory::dto::{
    DoctorQuery, DoctorsResponse, LocationsResponse, SpecializationsResponse,
};
use contracts::shared::{Envelope, ErrorEnvelope};
use contracts::system::health::HealthResponse;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use std::future::Future;

/// `fetch`-based backend client
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: String,
    timeout_ms: u32,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base: api_base(config),
            timeout_ms: config.timeout_ms,
        }
    }

    fn url(&self, path: &str) -> String {
        api_url(&self.base, path)
    }

    async fn with_timeout<T>(
        &self,
        call: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        let call = Box::pin(call);
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));
        match select(call, timeout).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => Err(ApiError::Timeout(self.timeout_ms)),
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        log::debug!("GET {url}");
        let request = Request::get(&url)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.with_timeout(send_request(request)).await
    }
}

async fn send_request<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

async fn read_body<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_body(status, ok, &text)
}

/// Turn a raw HTTP response into a typed body.
///
/// Non-2xx responses become `ApiError::Http`, keeping the envelope's error
/// message when the body carries one.
pub fn decode_body<T: DeserializeOwned>(status: u16, ok: bool, text: &str) -> Result<T, ApiError> {
    if !ok {
        let message = serde_json::from_str::<ErrorEnvelope>(text)
            .ok()
            .and_then(|env| env.error_message().map(str::to_string));
        return Err(ApiError::Http { status, message });
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Query string for `GET /api/doctors`, empty when no dimension is set
pub fn doctors_query_string(query: &DoctorQuery) -> Result<String, ApiError> {
    serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))
}

fn multipart_body(file: &FilePart) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));

    let bytes = js_sys::Uint8Array::from(&file.bytes[..]);
    let parts = js_sys::Array::of1(&bytes);
    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(js_err)?;

    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(UPLOAD_FORM_FIELD, &blob, &file.file_name)
        .map_err(js_err)?;
    Ok(form)
}

#[async_trait(?Send)]
impl AnalysisBackend for HttpBackend {
    async fn upload(&self, file: FilePart) -> Result<UploadResponse, ApiError> {
        let url = self.url("/api/upload");
        log::debug!("POST {url} ({}, {} bytes)", file.file_name, file.bytes.len());
        let form = multipart_body(&file)?;
        // Content-Type with the multipart boundary is set by the browser
        let request = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.with_timeout(send_request(request)).await
    }

    async fn analyze_symptoms(
        &self,
        request: SymptomsRequest,
    ) -> Result<AnalyzeSymptomsResponse, ApiError> {
        let url = self.url("/api/symptoms/analyze");
        log::debug!("POST {url}");
        let request = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {e}")))?;
        self.with_timeout(send_request(request)).await
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ApiError> {
        let url = self.url("/api/chat");
        log::debug!("POST {url}");
        let request = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {e}")))?;
        self.with_timeout(send_request(request)).await
    }

    async fn doctors(&self, query: DoctorQuery) -> Result<DoctorsResponse, ApiError> {
        let qs = doctors_query_string(&query)?;
        let url = if qs.is_empty() {
            self.url("/api/doctors")
        } else {
            format!("{}?{}", self.url("/api/doctors"), qs)
        };
        self.get(url).await
    }

    async fn locations(&self) -> Result<LocationsResponse, ApiError> {
        self.get(self.url("/api/doctors/locations")).await
    }

    async fn specializations(&self) -> Result<SpecializationsResponse, ApiError> {
        self.get(self.url("/api/doctors/specializations")).await
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get(self.url("/api/health")).await
    }
}

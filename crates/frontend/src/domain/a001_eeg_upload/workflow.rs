use super::model::{is_accepted, project_upload, FileSelection, UploadOutcome};
use crate::shared::backend::{AnalysisBackend, FilePart};
use crate::shared::error::{ApiError, ValidationError};
use crate::shared::lifecycle::{
    run_request, ErrorInfo, RequestId, RequestLifecycle, Settlement, StateCell, Ticket,
};
use contracts::domain::a001_eeg_upload::dto::UploadResponse;

/// Identifies one file pick whose contents are still being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickToken(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EegUploadWorkflow {
    selection: Option<FileSelection>,
    lifecycle: RequestLifecycle<FilePart, UploadOutcome>,
    last_pick: u64,
}

impl EegUploadWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `file` the resident selection.
    ///
    /// Replaces any previous file and starts a new session: the displayed
    /// result is cleared and an in-flight upload is abandoned. Unsupported
    /// files leave the current state untouched.
    pub fn select_file(&mut self, file: FileSelection) -> Result<(), ValidationError> {
        let token = self.begin_pick();
        self.finish_pick(token, file).map(|_| ())
    }

    /// Register a pick whose bytes arrive later. Any earlier pick still
    /// being read loses to this one.
    pub fn begin_pick(&mut self) -> PickToken {
        self.last_pick += 1;
        PickToken(self.last_pick)
    }

    /// Apply the file read for `token`.
    ///
    /// Returns `Ok(false)` and leaves the state alone when a newer pick or a
    /// clear happened while the file was being read.
    pub fn finish_pick(&mut self, token: PickToken, file: FileSelection) -> Result<bool, ValidationError> {
        if token.0 != self.last_pick {
            log::warn!("dropping superseded pick of {}", file.name);
            return Ok(false);
        }
        if !is_accepted(&file.name) {
            return Err(ValidationError::UnsupportedFileType { name: file.name });
        }
        log::info!("selected {} ({} bytes)", file.name, file.size_bytes);
        self.selection = Some(file);
        self.lifecycle.reset();
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.last_pick += 1;
        self.selection = None;
        self.lifecycle.reset();
    }

    pub fn begin(&mut self) -> Result<Ticket<FilePart>, ValidationError> {
        let file = self.selection.as_ref().ok_or(ValidationError::NoFileSelected)?;
        let part = FilePart {
            file_name: file.name.clone(),
            content_type: file.content_type().to_string(),
            bytes: file.bytes.clone(),
        };
        Ok(self.lifecycle.dispatch(part))
    }

    pub fn settle(&mut self, id: RequestId, outcome: Result<UploadResponse, ApiError>) -> Settlement {
        self.lifecycle.settle(id, project_upload(outcome))
    }

    pub fn selection(&self) -> Option<&FileSelection> {
        self.selection.as_ref()
    }

    pub fn outcome(&self) -> Option<&UploadOutcome> {
        self.lifecycle.result()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.lifecycle.error()
    }

    pub fn is_pending(&self) -> bool {
        self.lifecycle.is_pending()
    }

    pub fn lifecycle(&self) -> &RequestLifecycle<FilePart, UploadOutcome> {
        &self.lifecycle
    }
}

/// Upload the resident file
pub async fn upload<C, B>(cell: &C, backend: &B) -> Result<Settlement, ValidationError>
where
    C: StateCell<EegUploadWorkflow>,
    B: AnalysisBackend + ?Sized,
{
    run_request(
        cell,
        |w: &mut EegUploadWorkflow| w.begin(),
        |part| backend.upload(part),
        |w, id, outcome| w.settle(id, outcome),
    )
    .await
}

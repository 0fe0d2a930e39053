//! Request lifecycle shared by every feature workflow
//!
//! ```text
//! idle ──dispatch──▶ pending ──settle(current id, Ok)──▶ fulfilled
//!                       │    ──settle(current id, Err)─▶ rejected
//!                       └─── settle(old id, _) ────────▶ (dropped)
//! ```
//!
//! The lifecycle never performs I/O. `dispatch` hands out a [`Ticket`] with
//! a fresh request id; whoever performs the call brings the id back to
//! `settle`. Only the most recent ticket can change state, so a slow first
//! request that resolves after a fast second one is discarded.

pub mod driver;

pub use driver::{run_request, StateCell};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// User-displayable failure stored on rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Proof of dispatch; carries the payload to the outbound call
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket<P> {
    pub id: RequestId,
    pub payload: P,
}

/// What a settlement did to the lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Fulfilled,
    Rejected(ErrorInfo),
    /// A newer dispatch (or a reset) superseded this request
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestLifecycle<P, R> {
    status: RequestStatus,
    payload: Option<P>,
    result: Option<R>,
    error: Option<ErrorInfo>,
    request_id: RequestId,
}

impl<P, R> Default for RequestLifecycle<P, R> {
    fn default() -> Self {
        Self {
            status: RequestStatus::Idle,
            payload: None,
            result: None,
            error: None,
            request_id: 0,
        }
    }
}

impl<P: Clone, R> RequestLifecycle<P, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any outstanding one.
    ///
    /// The previous result stays visible until the new request fulfils.
    pub fn dispatch(&mut self, payload: P) -> Ticket<P> {
        self.request_id += 1;
        self.status = RequestStatus::Pending;
        self.error = None;
        self.payload = Some(payload.clone());
        log::debug!("lifecycle: dispatch #{}", self.request_id);
        Ticket {
            id: self.request_id,
            payload,
        }
    }

    pub fn settle(&mut self, id: RequestId, outcome: Result<R, ErrorInfo>) -> Settlement {
        match outcome {
            Ok(result) => self.fulfill(id, result),
            Err(error) => self.reject(id, error),
        }
    }

    pub fn fulfill(&mut self, id: RequestId, result: R) -> Settlement {
        if !self.is_current(id) {
            log::warn!("lifecycle: dropping stale fulfilment #{id} (current #{})", self.request_id);
            return Settlement::Stale;
        }
        log::info!("lifecycle: fulfilled #{id}");
        self.status = RequestStatus::Fulfilled;
        self.result = Some(result);
        self.error = None;
        Settlement::Fulfilled
    }

    /// Record a failure; the last good result is kept.
    pub fn reject(&mut self, id: RequestId, error: ErrorInfo) -> Settlement {
        if !self.is_current(id) {
            log::warn!("lifecycle: dropping stale rejection #{id} (current #{})", self.request_id);
            return Settlement::Stale;
        }
        self.status = RequestStatus::Rejected;
        self.error = Some(error.clone());
        Settlement::Rejected(error)
    }

    /// Back to idle with nothing displayed.
    ///
    /// Also invalidates the outstanding request, if any.
    pub fn reset(&mut self) {
        self.request_id += 1;
        self.status = RequestStatus::Idle;
        self.payload = None;
        self.result = None;
        self.error = None;
    }
}

impl<P, R> RequestLifecycle<P, R> {
    pub fn is_current(&self, id: RequestId) -> bool {
        self.status == RequestStatus::Pending && id == self.request_id
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }
}

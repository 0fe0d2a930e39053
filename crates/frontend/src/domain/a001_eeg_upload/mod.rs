//! EEG file ingestion
//!
//! One file at a time: pick or drop, upload as multipart, show the
//! classifier output.

pub mod model;
pub mod ui;
pub mod workflow;

pub use ui::EegUploadPage;
pub use workflow::EegUploadWorkflow;

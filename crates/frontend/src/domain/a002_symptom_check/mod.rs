//! Symptom assessment
//!
//! Structure:
//! - model.rs: render model and projection from the backend envelope
//! - workflow.rs: validation, lifecycle and the `analyze` action
//! - ui/view.rs: page component

pub mod model;
pub mod ui;
pub mod workflow;

pub use ui::SymptomCheckPage;
pub use workflow::SymptomCheckWorkflow;

//! Provider directory
//!
//! Reference lists live in [`model::ReferenceCache`] for the whole session;
//! the listing and its filter belong to the page.

pub mod model;
pub mod ui;
pub mod workflow;

pub use ui::DoctorDirectoryPage;
pub use workflow::DoctorDirectoryWorkflow;

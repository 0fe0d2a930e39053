//! Wire contracts between the SeizureGuard web client and the analysis backend.
//!
//! Everything here is plain serde data. Field names follow the backend's
//! snake_case JSON.

pub mod domain;
pub mod shared;
pub mod system;

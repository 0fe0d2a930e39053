pub mod indicator;
pub mod probe;

pub use indicator::HealthIndicator;
pub use probe::HealthProbe;

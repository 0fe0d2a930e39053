pub mod badge;
pub mod button;
pub mod checkbox;
pub mod select;
pub mod textarea;

pub use badge::{Badge, RiskBadge};
pub use button::Button;
pub use checkbox::Checkbox;
pub use select::Select;
pub use textarea::Textarea;

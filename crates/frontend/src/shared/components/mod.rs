pub mod notice_host;
pub mod page_frame;
pub mod ui;

pub use notice_host::NoticeHost;
pub use page_frame::PageFrame;

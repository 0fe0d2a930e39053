mod view;

pub use view::EegUploadPage;

mod view;

pub use view::DoctorDirectoryPage;

mod view;

pub use view::SymptomCheckPage;

pub mod convert;
pub mod sheets;
pub mod summary;

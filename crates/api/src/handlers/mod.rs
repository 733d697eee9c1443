pub mod spec;
pub mod upload;

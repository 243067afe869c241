pub mod convert;
pub mod releases;

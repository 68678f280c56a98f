pub mod details;
pub mod version;

pub mod library;
pub mod manifest;

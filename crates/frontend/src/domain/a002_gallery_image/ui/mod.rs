pub mod details;
pub mod gallery;
pub mod list;

pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod icons;
pub mod list_utils;
pub mod map;
pub mod multipart;
pub mod state;

pub mod a001_project_record;
pub mod a002_gallery_image;
pub mod common;

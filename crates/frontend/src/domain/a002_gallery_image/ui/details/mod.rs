//! Форма загрузки изображения галереи

mod view;
mod view_model;

pub use view::GalleryImageForm;
pub use view_model::{create_view_model, GalleryFormViewModel};

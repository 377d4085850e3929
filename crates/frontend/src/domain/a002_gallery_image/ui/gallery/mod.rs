//! Публичная галерея с просмотром в полный размер

mod state;
mod view;

pub use state::Lightbox;
pub use view::PhotoGallery;

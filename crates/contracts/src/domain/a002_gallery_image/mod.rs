pub mod aggregate;

pub use aggregate::GalleryImage;

use crate::domain::a002_gallery_image::draft::GalleryDraft;
use crate::shared::state::upload_form::{UploadFormViewModel, UploadMessages};

pub type GalleryFormViewModel = UploadFormViewModel<GalleryDraft>;

const MESSAGES: UploadMessages = UploadMessages {
    created: "Image uploaded successfully!",
    updated: "Image updated successfully!",
    failed: "Error uploading image. Please try again.",
};

pub fn create_view_model(collection_url: String) -> GalleryFormViewModel {
    UploadFormViewModel::new(collection_url, MESSAGES)
}

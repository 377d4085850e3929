use crate::domain::a001_project_record::draft::ProjectDraft;
use crate::shared::state::upload_form::{UploadFormViewModel, UploadMessages};

pub type ProjectFormViewModel = UploadFormViewModel<ProjectDraft>;

const MESSAGES: UploadMessages = UploadMessages {
    created: "Data uploaded successfully!",
    updated: "Data updated successfully!",
    failed: "Error saving data. Please try again.",
};

/// `collection_url` is `{base}/api/{category}`
pub fn create_view_model(collection_url: String) -> ProjectFormViewModel {
    UploadFormViewModel::new(collection_url, MESSAGES)
}
